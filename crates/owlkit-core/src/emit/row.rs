//! Relationship row rendering

use std::fmt;

use crate::component::{Relationship, RelationshipState};

/// Seven-column relationship row.
///
/// Renders as `id, active, moduleId, sourceId, destinationId, group, typeId`
/// separated by tabs, with `active` written as `1` or `0`. The line terminator
/// is added by the writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationshipRow {
    pub id: u64,
    pub active: bool,
    pub module_id: u64,
    pub source_id: u64,
    pub destination_id: u64,
    pub group: u32,
    pub type_id: u64,
}

impl RelationshipRow {
    /// Row retiring the given relationship.
    pub fn inactivation(state: &RelationshipState) -> Self {
        Self {
            id: state.id,
            active: false,
            module_id: state.module_id,
            source_id: state.source_id,
            destination_id: state.destination_id,
            group: state.group,
            type_id: state.type_id,
        }
    }
}

impl From<&Relationship> for RelationshipRow {
    fn from(rel: &Relationship) -> Self {
        Self {
            id: rel.id,
            active: rel.active,
            module_id: rel.module_id,
            source_id: rel.source_id,
            destination_id: rel.destination_id,
            group: rel.group,
            type_id: rel.type_id,
        }
    }
}

impl fmt::Display for RelationshipRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.id,
            if self.active { "1" } else { "0" },
            self.module_id,
            self.source_id,
            self.destination_id,
            self.group,
            self.type_id
        )
    }
}
