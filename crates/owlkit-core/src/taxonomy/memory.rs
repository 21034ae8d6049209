//! In-memory taxonomy
//!
//! HashMap-backed index of every observed concept and stated relationship,
//! filled once from a snapshot pass and read-only afterwards.

use ahash::AHashMap;
use tracing::debug;

use crate::component::{Concept, ConceptState, Relationship, RelationshipState};
use crate::rf2::ComponentFactory;
use crate::taxonomy::traits::{StatedView, TaxonomyStats};

/// In-memory taxonomy.
///
/// Upserts are last-write-wins per id. Nothing is ever removed: an inactive
/// row replaces the active one and stays visible to callers that care about
/// history.
#[derive(Debug, Default)]
pub struct Taxonomy {
    concepts: AHashMap<u64, Concept>,
    relationships: AHashMap<u64, Relationship>,
    stated_by_source: AHashMap<u64, Vec<u64>>,
    dropped: usize,
}

impl Taxonomy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert the latest state of a concept.
    pub fn record_concept(&mut self, concept: Concept) {
        self.concepts.insert(concept.id, concept);
    }

    /// Upsert the latest state of a stated relationship.
    ///
    /// Non-stated rows and rows without a source or destination are dropped
    /// and `false` is returned.
    pub fn record_relationship(&mut self, relationship: Relationship) -> bool {
        if !relationship.characteristic.is_stated()
            || relationship.source_id == 0
            || relationship.destination_id == 0
        {
            self.dropped += 1;
            debug!(id = relationship.id, "dropping out of scope relationship");
            return false;
        }

        let previous = self.relationships.insert(relationship.id, relationship);
        match previous {
            Some(old) if old.source_id == relationship.source_id => {}
            Some(old) => {
                if let Some(ids) = self.stated_by_source.get_mut(&old.source_id) {
                    ids.retain(|id| *id != relationship.id);
                }
                self.index(relationship);
            }
            None => self.index(relationship),
        }
        true
    }

    fn index(&mut self, relationship: Relationship) {
        self.stated_by_source
            .entry(relationship.source_id)
            .or_default()
            .push(relationship.id);
    }
}

impl StatedView for Taxonomy {
    fn concept(&self, id: u64) -> Option<&Concept> {
        self.concepts.get(&id)
    }

    fn stated_relationships(&self, concept_id: u64) -> Vec<&Relationship> {
        self.stated_by_source
            .get(&concept_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| self.relationships.get(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn stats(&self) -> TaxonomyStats {
        TaxonomyStats {
            concepts: self.concepts.len(),
            stated_relationships: self.relationships.len(),
            active_stated_relationships: self.relationships.values().filter(|r| r.active).count(),
            dropped_relationships: self.dropped,
        }
    }
}

impl ComponentFactory for Taxonomy {
    fn new_concept_state(&mut self, concept: &ConceptState) {
        self.record_concept(Concept::from(concept));
    }

    fn new_relationship_state(&mut self, relationship: &RelationshipState) {
        self.record_relationship(Relationship::from(relationship));
    }
}
