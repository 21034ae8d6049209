//! Read-side taxonomy trait

use crate::component::{Concept, Relationship};

/// Read access to concepts and their stated relationships.
///
/// Report writers and axiom generators only need this view, so tests can hand
/// them a hand-built taxonomy and alternative stores can be plugged in later.
pub trait StatedView {
    /// Latest state of a concept, if it was ever observed.
    fn concept(&self, id: u64) -> Option<&Concept>;

    /// Stated relationships whose source is `concept_id`, in first-seen order.
    ///
    /// Inactive relationships are included.
    fn stated_relationships(&self, concept_id: u64) -> Vec<&Relationship>;

    /// Active stated relationships whose source is `concept_id`.
    fn active_stated_relationships(&self, concept_id: u64) -> Vec<&Relationship> {
        self.stated_relationships(concept_id)
            .into_iter()
            .filter(|r| r.active)
            .collect()
    }

    /// Whether the concept's latest state is active and international.
    fn is_active_international(&self, id: u64) -> bool {
        self.concept(id)
            .map(|c| c.active && c.is_international())
            .unwrap_or(false)
    }

    fn stats(&self) -> TaxonomyStats;
}

/// Taxonomy statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaxonomyStats {
    pub concepts: usize,
    pub stated_relationships: usize,
    pub active_stated_relationships: usize,
    /// Rows rejected as non-stated or structurally invalid
    pub dropped_relationships: usize,
}
