//! Extension override classifier
//!
//! Consumes concept and relationship state events in any order, retires
//! extension stated relationships between international concepts through an
//! optional row emitter, and freezes the strategy buckets on completion.

use std::io::{self, Write};

use ahash::{AHashMap, AHashSet};
use tracing::{debug, info, warn};

use super::accumulator::Accumulator;
use super::types::Classification;
use crate::component::{ConceptState, RelationshipState};
use crate::constants::is_international_module;
use crate::emit::{RelationshipRow, RowEmitter};
use crate::error::Result;
use crate::rf2::ComponentFactory;

/// Streaming classifier for extension edits on international concepts.
///
/// Ingestion is `on_concept` / `on_relationship` in any interleaving; then a
/// single [`complete`](Self::complete) call flushes the emitter and runs the
/// decision pass. Relationships that arrive before their source concept (or
/// before the extension module is known) are parked and resolved at
/// completion, so buckets depend only on the set of events.
pub struct ExtensionClassifier<W: Write = io::Sink> {
    /// Latest state per concept id: `true` when active and international
    international: AHashMap<u64, bool>,
    extension_module_id: Option<u64>,
    other_modules: AHashSet<u64>,
    pending: Vec<RelationshipRow>,
    acc: Accumulator,
    emitter: Option<RowEmitter<W>>,
}

impl ExtensionClassifier {
    /// Classifier without row output (report mode).
    pub fn new() -> Self {
        Self::build(None)
    }
}

impl Default for ExtensionClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ExtensionClassifier<W> {
    /// Classifier that writes an inactivation row for every retired relationship.
    pub fn with_emitter(emitter: RowEmitter<W>) -> Self {
        Self::build(Some(emitter))
    }

    fn build(emitter: Option<RowEmitter<W>>) -> Self {
        Self {
            international: AHashMap::new(),
            extension_module_id: None,
            other_modules: AHashSet::new(),
            pending: Vec::new(),
            acc: Accumulator::default(),
            emitter,
        }
    }

    /// The extension module established so far.
    pub fn extension_module_id(&self) -> Option<u64> {
        self.extension_module_id
    }

    /// Relationships waiting for completion to be resolved.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn on_concept(&mut self, concept: &ConceptState) {
        let international = is_international_module(concept.module_id);
        self.international
            .insert(concept.id, concept.active && international);

        if !concept.active || international {
            return;
        }
        match self.extension_module_id {
            None => {
                info!(module = concept.module_id, "extension module established");
                self.extension_module_id = Some(concept.module_id);
            }
            Some(module) if module != concept.module_id => {
                if self.other_modules.insert(concept.module_id) {
                    warn!(
                        module = concept.module_id,
                        extension = module,
                        "ignoring second extension module"
                    );
                }
            }
            Some(_) => {}
        }
    }

    pub fn on_relationship(&mut self, relationship: &RelationshipState) {
        if !relationship.active || !relationship.characteristic_type().is_stated() {
            return;
        }
        if is_international_module(relationship.module_id) {
            return;
        }
        let row = RelationshipRow::inactivation(relationship);

        match self.extension_module_id {
            Some(module) if module != relationship.module_id => return,
            Some(_) => {}
            None => {
                self.pending.push(row);
                return;
            }
        }

        let source = self.international.get(&row.source_id).copied();
        let destination = self.international.get(&row.destination_id).copied();
        match (source, destination) {
            (Some(false), _) => {}
            (Some(true), Some(true)) => self.retire(&row),
            (Some(true), Some(false)) => self.acc.record_international_source_only(row.source_id),
            _ => self.pending.push(row),
        }
    }

    /// Relationship between two international concepts: classify and retire it.
    fn retire(&mut self, row: &RelationshipRow) {
        self.acc
            .record_international_edit(row.source_id, row.type_id, row.group);
        if let Some(emitter) = self.emitter.as_mut() {
            emitter.emit(row);
        }
    }

    fn is_international(&self, id: u64) -> bool {
        self.international.get(&id).copied().unwrap_or(false)
    }

    /// Resolve parked relationships, flush row output, and freeze the buckets.
    ///
    /// Returns the emitter's sink so the caller can keep writing to it. The
    /// first row write failure seen during ingestion is returned here.
    pub fn complete(mut self) -> Result<(Classification, Option<W>)> {
        let pending = std::mem::take(&mut self.pending);
        let mut resolved = 0usize;
        for row in &pending {
            if Some(row.module_id) != self.extension_module_id
                || !self.is_international(row.source_id)
            {
                continue;
            }
            resolved += 1;
            if self.is_international(row.destination_id) {
                self.retire(row);
            } else {
                self.acc.record_international_source_only(row.source_id);
            }
        }
        debug!(parked = pending.len(), resolved, "resolved parked relationships");

        if let Some(emitter) = &self.emitter {
            debug!(rows = emitter.rows(), "flushing inactivation rows");
        }
        let sink = self.emitter.take().map(RowEmitter::finish).transpose()?;
        let classification = self.acc.decide(self.extension_module_id);

        info!(
            retired = classification.both_international_relationships(),
            "classification complete"
        );
        Ok((classification, sink))
    }
}

impl<W: Write> ComponentFactory for ExtensionClassifier<W> {
    fn new_concept_state(&mut self, concept: &ConceptState) {
        self.on_concept(concept);
    }

    fn new_relationship_state(&mut self, relationship: &RelationshipState) {
        self.on_relationship(relationship);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Bucket;
    use crate::component::CharacteristicType;
    use crate::constants::{CORE_MODULE, IS_A, MODEL_COMPONENT_MODULE};

    const EXT: u64 = 731000124108;

    #[test]
    fn test_extension_module_from_first_active_non_international_concept() {
        let mut classifier = ExtensionClassifier::new();
        classifier.on_concept(&ConceptState::new(1, 555).inactive());
        classifier.on_concept(&ConceptState::new(2, MODEL_COMPONENT_MODULE));
        assert_eq!(classifier.extension_module_id(), None);

        classifier.on_concept(&ConceptState::new(3, EXT));
        classifier.on_concept(&ConceptState::new(4, 777));
        assert_eq!(classifier.extension_module_id(), Some(EXT));
    }

    #[test]
    fn test_relationship_before_concepts_is_parked() {
        let mut classifier = ExtensionClassifier::new();
        classifier.on_relationship(&RelationshipState::stated(100, 10, IS_A, 20).module(EXT));
        assert_eq!(classifier.pending(), 1);

        classifier.on_concept(&ConceptState::new(10, CORE_MODULE));
        classifier.on_concept(&ConceptState::new(20, CORE_MODULE));
        classifier.on_concept(&ConceptState::new(30, EXT));

        let (c, sink) = classifier.complete().unwrap();
        assert!(sink.is_none());
        assert_eq!(c.strategy_for(10), Some(Bucket::NoInternationalModelNeeded));
    }

    #[test]
    fn test_ignores_international_and_inferred_relationships() {
        let mut classifier = ExtensionClassifier::new();
        classifier.on_concept(&ConceptState::new(10, CORE_MODULE));
        classifier.on_concept(&ConceptState::new(20, CORE_MODULE));
        classifier.on_concept(&ConceptState::new(30, EXT));

        classifier.on_relationship(&RelationshipState::stated(1, 10, IS_A, 20));
        classifier.on_relationship(
            &RelationshipState::stated(2, 10, IS_A, 20)
                .module(EXT)
                .characteristic(CharacteristicType::Inferred),
        );
        classifier.on_relationship(&RelationshipState::stated(3, 10, IS_A, 20).module(EXT).inactive());
        assert_eq!(classifier.pending(), 0);

        let (c, _) = classifier.complete().unwrap();
        assert_eq!(c, Classification {
            extension_module_id: Some(EXT),
            ..Classification::default()
        });
    }

    #[test]
    fn test_emits_inactivation_rows() {
        let emitter = RowEmitter::new(Vec::new()).unwrap();
        let mut classifier = ExtensionClassifier::with_emitter(emitter);
        classifier.on_concept(&ConceptState::new(10, CORE_MODULE));
        classifier.on_concept(&ConceptState::new(20, CORE_MODULE));
        classifier.on_concept(&ConceptState::new(30, 9999));

        classifier.on_relationship(&RelationshipState::stated(100, 10, IS_A, 20).module(9999));
        classifier.on_relationship(&RelationshipState::stated(101, 10, IS_A, 30).module(9999));

        let (c, sink) = classifier.complete().unwrap();
        let out = String::from_utf8(sink.unwrap()).unwrap();
        let rows: Vec<&str> = out.lines().skip(1).collect();
        assert_eq!(rows, vec!["100\t0\t9999\t10\t20\t0\t116680003"]);
        assert!(c.concepts(Bucket::InternationalSourceOnly).is_empty());
        assert!(c.concepts(Bucket::BothInternational).contains(&10));
    }
}
