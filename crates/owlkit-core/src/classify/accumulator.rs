//! Per-run structural facts and the decision pass

use std::collections::BTreeSet;

use ahash::{AHashMap, AHashSet};

use super::types::Classification;
use crate::constants::IS_A;

/// Unordered facts gathered during ingestion.
///
/// Nothing here depends on arrival order; [`Accumulator::decide`] is the only
/// place buckets are assigned.
#[derive(Debug, Default)]
pub(crate) struct Accumulator {
    both_international: AHashSet<u64>,
    international_source_only: AHashSet<u64>,
    has_is_a: AHashSet<u64>,
    has_non_is_a: AHashSet<u64>,
    non_is_a_groups: AHashMap<u64, AHashSet<u32>>,
    both_international_relationships: usize,
}

impl Accumulator {
    /// An extension relationship between two international concepts.
    pub(crate) fn record_international_edit(&mut self, source_id: u64, type_id: u64, group: u32) {
        self.both_international.insert(source_id);
        self.both_international_relationships += 1;
        if type_id == IS_A {
            self.has_is_a.insert(source_id);
        } else {
            self.has_non_is_a.insert(source_id);
            self.non_is_a_groups
                .entry(source_id)
                .or_default()
                .insert(group);
        }
    }

    /// An extension relationship from an international concept to a non-international one.
    pub(crate) fn record_international_source_only(&mut self, source_id: u64) {
        self.international_source_only.insert(source_id);
    }

    /// Whether any non-is-a edit on the concept sits in a role group.
    fn is_grouped(&self, concept_id: u64) -> bool {
        self.non_is_a_groups
            .get(&concept_id)
            .map(|groups| groups.iter().any(|g| *g != 0))
            .unwrap_or(false)
    }

    /// Assign every touched concept to exactly one strategy bucket.
    ///
    /// - is-a only: no international model needed
    /// - is-a and non-is-a: grouped needs the international stated view,
    ///   ungrouped needs no international model
    /// - non-is-a only: grouped needs the international stated view,
    ///   ungrouped needs a manual is-a
    pub(crate) fn decide(&self, extension_module_id: Option<u64>) -> Classification {
        let mut result = Classification {
            extension_module_id,
            both_international: sorted(&self.both_international),
            international_source_only: self
                .international_source_only
                .iter()
                .filter(|id| !self.both_international.contains(*id))
                .copied()
                .collect(),
            both_international_relationships: self.both_international_relationships,
            ..Classification::default()
        };

        for &concept in self.has_is_a.iter() {
            if !self.has_non_is_a.contains(&concept) || !self.is_grouped(concept) {
                result.no_international_model_needed.insert(concept);
            } else {
                result.requires_international_stated_view.insert(concept);
            }
        }

        for &concept in self.has_non_is_a.difference(&self.has_is_a) {
            if self.is_grouped(concept) {
                result.requires_international_stated_view.insert(concept);
            } else {
                result.needs_manual_is_a.insert(concept);
            }
        }

        result
    }
}

fn sorted(set: &AHashSet<u64>) -> BTreeSet<u64> {
    set.iter().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Bucket;

    const FINDING_SITE: u64 = 363698007;

    #[test]
    fn test_decision_table() {
        let mut acc = Accumulator::default();
        // C1: is-a only
        acc.record_international_edit(1, IS_A, 0);
        // C2: is-a + ungrouped attribute
        acc.record_international_edit(2, IS_A, 0);
        acc.record_international_edit(2, FINDING_SITE, 0);
        // C3: is-a + grouped attribute
        acc.record_international_edit(3, IS_A, 0);
        acc.record_international_edit(3, FINDING_SITE, 1);
        // C4: ungrouped attribute only
        acc.record_international_edit(4, FINDING_SITE, 0);
        // C5: grouped attribute only
        acc.record_international_edit(5, FINDING_SITE, 2);

        let c = acc.decide(Some(9999));
        assert_eq!(c.strategy_for(1), Some(Bucket::NoInternationalModelNeeded));
        assert_eq!(c.strategy_for(2), Some(Bucket::NoInternationalModelNeeded));
        assert_eq!(c.strategy_for(3), Some(Bucket::RequiresInternationalStatedView));
        assert_eq!(c.strategy_for(4), Some(Bucket::NeedsManualIsA));
        assert_eq!(c.strategy_for(5), Some(Bucket::RequiresInternationalStatedView));
        assert_eq!(c.both_international_relationships(), 7);
    }

    #[test]
    fn test_mixed_groups_count_as_grouped() {
        let mut acc = Accumulator::default();
        acc.record_international_edit(7, FINDING_SITE, 0);
        acc.record_international_edit(7, FINDING_SITE, 3);

        let c = acc.decide(None);
        assert_eq!(c.strategy_for(7), Some(Bucket::RequiresInternationalStatedView));
    }

    #[test]
    fn test_source_only_excludes_both_international() {
        let mut acc = Accumulator::default();
        acc.record_international_edit(1, IS_A, 0);
        acc.record_international_source_only(1);
        acc.record_international_source_only(2);

        let c = acc.decide(None);
        assert_eq!(
            c.concepts(Bucket::InternationalSourceOnly).iter().copied().collect::<Vec<_>>(),
            vec![2]
        );
        assert_eq!(c.strategy_for(2), None);
    }
}
