//! Axiom generation
//!
//! Conversion mode hands one strategy bucket to an [`AxiomGenerator`], which
//! turns each concept's stated relationships into OWL axiom reference set
//! rows. [`PrimitiveAxiomGenerator`] covers the strategies that need only
//! extension data; generators that consult the international stated view can
//! be plugged in through the same trait.

mod primitive;
mod row;

use std::collections::BTreeSet;

pub use primitive::{primitive_expression, PrimitiveAxiomGenerator};
pub use row::AxiomRow;

use crate::classify::Bucket;
use crate::error::Result;
use crate::taxonomy::StatedView;

/// Builds axiom rows for a set of concepts.
pub trait AxiomGenerator {
    /// Whether this generator can express concepts from `bucket`.
    fn supports(&self, bucket: Bucket) -> bool {
        bucket.is_axiom_strategy()
    }

    /// Axiom rows for `concepts`, owned by `module_id`, in concept order.
    fn generate(
        &self,
        view: &dyn StatedView,
        concepts: &BTreeSet<u64>,
        module_id: u64,
    ) -> Result<Vec<AxiomRow>>;
}
