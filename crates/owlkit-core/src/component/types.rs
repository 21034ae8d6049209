//! RF2 component type definitions

use serde::{Deserialize, Serialize};

use crate::constants::{
    self, ADDITIONAL_RELATIONSHIP, CORE_MODULE, EXISTENTIAL_RESTRICTION_MODIFIER,
    INFERRED_RELATIONSHIP, STATED_RELATIONSHIP,
};

/// Which release owns a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    International,
    Extension,
}

impl Origin {
    pub fn of_module(module_id: u64) -> Self {
        if constants::is_international_module(module_id) {
            Self::International
        } else {
            Self::Extension
        }
    }
}

/// How a relationship came to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacteristicType {
    /// Authored by a terminology editor
    Stated,
    /// Produced by the classifier
    Inferred,
    /// Non-defining
    Additional,
    Other(u64),
}

impl CharacteristicType {
    pub fn from_id(id: u64) -> Self {
        match id {
            STATED_RELATIONSHIP => Self::Stated,
            INFERRED_RELATIONSHIP => Self::Inferred,
            ADDITIONAL_RELATIONSHIP => Self::Additional,
            other => Self::Other(other),
        }
    }

    pub fn id(&self) -> u64 {
        match self {
            Self::Stated => STATED_RELATIONSHIP,
            Self::Inferred => INFERRED_RELATIONSHIP,
            Self::Additional => ADDITIONAL_RELATIONSHIP,
            Self::Other(id) => *id,
        }
    }

    pub fn is_stated(&self) -> bool {
        matches!(self, Self::Stated)
    }
}

/// One concept row as presented by a snapshot reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptState {
    pub id: u64,
    /// `YYYYMMDD`, absent for unpublished content
    pub effective_time: Option<u32>,
    pub active: bool,
    pub module_id: u64,
    pub definition_status_id: u64,
}

impl ConceptState {
    /// An active, primitive concept in the given module.
    pub fn new(id: u64, module_id: u64) -> Self {
        Self {
            id,
            effective_time: None,
            active: true,
            module_id,
            definition_status_id: 900000000000074008,
        }
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}

/// One relationship row as presented by a snapshot reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipState {
    pub id: u64,
    pub effective_time: Option<u32>,
    pub active: bool,
    pub module_id: u64,
    pub source_id: u64,
    pub destination_id: u64,
    pub group: u32,
    pub type_id: u64,
    pub characteristic_type_id: u64,
    pub modifier_id: u64,
}

impl RelationshipState {
    /// An active, ungrouped stated relationship in the core module.
    pub fn stated(id: u64, source_id: u64, type_id: u64, destination_id: u64) -> Self {
        Self {
            id,
            effective_time: None,
            active: true,
            module_id: CORE_MODULE,
            source_id,
            destination_id,
            group: 0,
            type_id,
            characteristic_type_id: STATED_RELATIONSHIP,
            modifier_id: EXISTENTIAL_RESTRICTION_MODIFIER,
        }
    }

    pub fn module(mut self, module_id: u64) -> Self {
        self.module_id = module_id;
        self
    }

    pub fn group(mut self, group: u32) -> Self {
        self.group = group;
        self
    }

    pub fn characteristic(mut self, characteristic: CharacteristicType) -> Self {
        self.characteristic_type_id = characteristic.id();
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    pub fn characteristic_type(&self) -> CharacteristicType {
        CharacteristicType::from_id(self.characteristic_type_id)
    }
}

/// Latest known state of a concept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    pub id: u64,
    pub active: bool,
    pub module_id: u64,
}

impl Concept {
    pub fn origin(&self) -> Origin {
        Origin::of_module(self.module_id)
    }

    pub fn is_international(&self) -> bool {
        self.origin() == Origin::International
    }
}

impl From<&ConceptState> for Concept {
    fn from(state: &ConceptState) -> Self {
        Self {
            id: state.id,
            active: state.active,
            module_id: state.module_id,
        }
    }
}

/// Latest known state of a relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub id: u64,
    pub active: bool,
    pub module_id: u64,
    pub source_id: u64,
    pub destination_id: u64,
    pub type_id: u64,
    /// 0 means ungrouped
    pub group: u32,
    pub characteristic: CharacteristicType,
}

impl Relationship {
    pub fn is_is_a(&self) -> bool {
        self.type_id == constants::IS_A
    }
}

impl From<&RelationshipState> for Relationship {
    fn from(state: &RelationshipState) -> Self {
        Self {
            id: state.id,
            active: state.active,
            module_id: state.module_id,
            source_id: state.source_id,
            destination_id: state.destination_id,
            type_id: state.type_id,
            group: state.group,
            characteristic: state.characteristic_type(),
        }
    }
}
