//! Primitive axioms from extension stated relationships

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use super::{AxiomGenerator, AxiomRow};
use crate::classify::Bucket;
use crate::component::Relationship;
use crate::constants::{OWL_AXIOM_REFSET, ROLE_GROUP};
use crate::error::Result;
use crate::taxonomy::StatedView;

/// Builds `SubClassOf` axioms from a concept's active stated relationships in
/// the extension module.
///
/// Is-a targets become named superclasses, ungrouped attributes become
/// existential restrictions, and each role group is wrapped in a
/// `609096000 |Role group|` restriction.
#[derive(Debug, Clone)]
pub struct PrimitiveAxiomGenerator {
    refset_id: u64,
}

impl PrimitiveAxiomGenerator {
    pub fn new(refset_id: u64) -> Self {
        Self { refset_id }
    }
}

impl Default for PrimitiveAxiomGenerator {
    fn default() -> Self {
        Self::new(OWL_AXIOM_REFSET)
    }
}

impl AxiomGenerator for PrimitiveAxiomGenerator {
    /// Grouped international edits cannot be expressed without the international stated view.
    fn supports(&self, bucket: Bucket) -> bool {
        matches!(
            bucket,
            Bucket::NoInternationalModelNeeded | Bucket::NeedsManualIsA
        )
    }

    fn generate(
        &self,
        view: &dyn StatedView,
        concepts: &BTreeSet<u64>,
        module_id: u64,
    ) -> Result<Vec<AxiomRow>> {
        let mut rows = Vec::with_capacity(concepts.len());
        for &concept_id in concepts {
            let relationships: Vec<&Relationship> = view
                .active_stated_relationships(concept_id)
                .into_iter()
                .filter(|r| r.module_id == module_id)
                .collect();

            match primitive_expression(concept_id, &relationships) {
                Some(expression) => {
                    rows.push(AxiomRow::new(module_id, self.refset_id, concept_id, expression))
                }
                None => debug!(concept = concept_id, "no extension relationships to convert"),
            }
        }
        Ok(rows)
    }
}

/// OWL functional syntax for a primitive definition, `None` without relationships.
pub fn primitive_expression(concept_id: u64, relationships: &[&Relationship]) -> Option<String> {
    let mut parents = BTreeSet::new();
    let mut ungrouped = BTreeSet::new();
    let mut groups: BTreeMap<u32, BTreeSet<(u64, u64)>> = BTreeMap::new();

    for rel in relationships {
        if rel.is_is_a() {
            parents.insert(rel.destination_id);
        } else if rel.group == 0 {
            ungrouped.insert((rel.type_id, rel.destination_id));
        } else {
            groups
                .entry(rel.group)
                .or_default()
                .insert((rel.type_id, rel.destination_id));
        }
    }

    let mut terms: Vec<String> = parents.iter().map(|p| format!(":{p}")).collect();
    terms.extend(ungrouped.iter().map(|&(t, d)| some_values(t, d)));
    for attributes in groups.values() {
        let inner: Vec<String> = attributes.iter().map(|&(t, d)| some_values(t, d)).collect();
        terms.push(format!(
            "ObjectSomeValuesFrom(:{ROLE_GROUP} {})",
            intersection(inner)
        ));
    }

    if terms.is_empty() {
        return None;
    }
    Some(format!("SubClassOf(:{concept_id} {})", intersection(terms)))
}

fn some_values(type_id: u64, destination_id: u64) -> String {
    format!("ObjectSomeValuesFrom(:{type_id} :{destination_id})")
}

fn intersection(mut terms: Vec<String>) -> String {
    if terms.len() == 1 {
        terms.remove(0)
    } else {
        format!("ObjectIntersectionOf({})", terms.join(" "))
    }
}
