//! Reserved SNOMED CT identifiers and RF2 file conventions.

/// SNOMED CT core module (international).
pub const CORE_MODULE: u64 = 900000000000207008;

/// SNOMED CT model component module (international).
pub const MODEL_COMPONENT_MODULE: u64 = 900000000000012004;

/// `116680003 |Is a (attribute)|`
pub const IS_A: u64 = 116680003;

/// `609096000 |Role group (attribute)|`
pub const ROLE_GROUP: u64 = 609096000;

/// Characteristic type of authored relationships.
pub const STATED_RELATIONSHIP: u64 = 900000000000010007;

/// Characteristic type of classifier output.
pub const INFERRED_RELATIONSHIP: u64 = 900000000000011006;

/// Characteristic type of additional (non-defining) relationships.
pub const ADDITIONAL_RELATIONSHIP: u64 = 900000000000227009;

/// `900000000000451002 |Existential restriction modifier|`
pub const EXISTENTIAL_RESTRICTION_MODIFIER: u64 = 900000000000451002;

/// `733073007 |OWL axiom reference set|`
pub const OWL_AXIOM_REFSET: u64 = 733073007;

/// Returns true for the two module ids owned by the international release.
pub fn is_international_module(module_id: u64) -> bool {
    module_id == CORE_MODULE || module_id == MODEL_COMPONENT_MODULE
}

/// RF2 line terminator.
pub const LINE_ENDING: &str = "\r\n";

/// Column header of inactivation and report rows.
pub const RELATIONSHIP_HEADER: &str =
    "id\tactive\tmoduleId\tsourceId\tdestinationId\trelationshipGroup\ttypeId";

/// Column header of the OWL axiom reference set.
pub const OWL_AXIOM_REFSET_HEADER: &str =
    "id\teffectiveTime\tactive\tmoduleId\trefsetId\treferencedComponentId\towlExpression";

/// Archive entry prefix for stated relationship inactivations.
pub const SCT2_STATED_RELATIONSHIP_DELTA: &str = "sct2_StatedRelationship_Delta_INT_";

/// Archive entry prefix for generated OWL axioms.
pub const OWL_AXIOM_REFSET_DELTA: &str = "sct2_sRefset_OWLAxiomDelta_INT_";

pub const TXT: &str = ".txt";
