//! Row parsing for RF2 snapshot tables

use crate::component::{ConceptState, RelationshipState};

const CONCEPT_FIELDS: usize = 5;
const RELATIONSHIP_FIELDS: usize = 10;

/// Parse one concept row. Returns `None` for malformed rows.
pub(crate) fn parse_concept(line: &str) -> Option<ConceptState> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != CONCEPT_FIELDS {
        return None;
    }

    Some(ConceptState {
        id: parse_id(fields[0])?,
        effective_time: parse_effective_time(fields[1])?,
        active: parse_active(fields[2])?,
        module_id: parse_id(fields[3])?,
        definition_status_id: parse_id(fields[4])?,
    })
}

/// Parse one relationship row. Returns `None` for malformed rows.
pub(crate) fn parse_relationship(line: &str) -> Option<RelationshipState> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != RELATIONSHIP_FIELDS {
        return None;
    }

    Some(RelationshipState {
        id: parse_id(fields[0])?,
        effective_time: parse_effective_time(fields[1])?,
        active: parse_active(fields[2])?,
        module_id: parse_id(fields[3])?,
        source_id: parse_id(fields[4])?,
        destination_id: parse_id(fields[5])?,
        group: fields[6].parse().ok()?,
        type_id: parse_id(fields[7])?,
        characteristic_type_id: parse_id(fields[8])?,
        modifier_id: parse_id(fields[9])?,
    })
}

fn parse_id(field: &str) -> Option<u64> {
    field.parse().ok()
}

/// Blank effective times are legal for unpublished content.
fn parse_effective_time(field: &str) -> Option<Option<u32>> {
    if field.is_empty() {
        return Some(None);
    }
    if field.len() != 8 {
        return None;
    }
    field.parse().ok().map(Some)
}

fn parse_active(field: &str) -> Option<bool> {
    match field {
        "1" => Some(true),
        "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{CORE_MODULE, IS_A, STATED_RELATIONSHIP};

    #[test]
    fn test_parses_concept_row() {
        let concept =
            parse_concept("10\t20200131\t1\t900000000000207008\t900000000000074008").unwrap();
        assert_eq!(concept.id, 10);
        assert_eq!(concept.effective_time, Some(20200131));
        assert!(concept.active);
        assert_eq!(concept.module_id, CORE_MODULE);
    }

    #[test]
    fn test_parses_relationship_with_blank_effective_time() {
        let rel = parse_relationship(
            "100\t\t0\t9999\t10\t20\t3\t116680003\t900000000000010007\t900000000000451002",
        )
        .unwrap();
        assert_eq!(rel.effective_time, None);
        assert!(!rel.active);
        assert_eq!(rel.group, 3);
        assert_eq!(rel.type_id, IS_A);
        assert_eq!(rel.characteristic_type_id, STATED_RELATIONSHIP);
    }

    #[test]
    fn test_rejects_malformed_rows() {
        assert!(parse_concept("10\t20200131\t1\t900000000000207008").is_none());
        assert!(parse_concept("x\t20200131\t1\t1\t2").is_none());
        assert!(parse_concept("10\t2020\t1\t1\t2").is_none());
        assert!(parse_concept("10\t20200131\ttrue\t1\t2").is_none());
        assert!(parse_relationship("100\t\t1\t9999\t10\t\t0\t1\t2\t3").is_none());
    }
}
