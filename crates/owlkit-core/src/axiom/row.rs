//! OWL axiom reference set rows

use std::fmt;

use uuid::Uuid;

/// One row of the OWL axiom reference set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxiomRow {
    pub id: String,
    /// Blank for unpublished content
    pub effective_time: Option<u32>,
    pub active: bool,
    pub module_id: u64,
    pub refset_id: u64,
    pub referenced_component_id: u64,
    pub owl_expression: String,
}

impl AxiomRow {
    /// New active, unpublished row with a name-based id.
    pub fn new(module_id: u64, refset_id: u64, concept_id: u64, owl_expression: String) -> Self {
        Self {
            id: member_id(module_id, refset_id, concept_id, &owl_expression),
            effective_time: None,
            active: true,
            module_id,
            refset_id,
            referenced_component_id: concept_id,
            owl_expression,
        }
    }
}

impl fmt::Display for AxiomRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let effective_time = self
            .effective_time
            .map(|t| t.to_string())
            .unwrap_or_default();
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.id,
            effective_time,
            if self.active { "1" } else { "0" },
            self.module_id,
            self.refset_id,
            self.referenced_component_id,
            self.owl_expression
        )
    }
}

/// Namespace for axiom member ids.
const AXIOM_NAMESPACE: Uuid = Uuid::from_u128(0x6f1c_2b7e_4d3a_4e59_9a8b_0c5d_7e21_f384);

/// Name-based (v5) UUID over the row content.
///
/// The same axiom always gets the same member id, so reruns produce
/// byte-identical archives.
fn member_id(module_id: u64, refset_id: u64, concept_id: u64, expression: &str) -> String {
    let name = format!("{module_id}\t{refset_id}\t{concept_id}\t{expression}");
    Uuid::new_v5(&AXIOM_NAMESPACE, name.as_bytes()).to_string()
}
