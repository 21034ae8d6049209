//! RF2 component records
//!
//! Two shapes live here:
//!
//! - **State events** (`ConceptState`, `RelationshipState`): one snapshot row each,
//!   as pushed by a record stream reader. Fields the engine does not need
//!   (effective time, definition status, modifier) are carried but ignored.
//! - **Stored records** (`Concept`, `Relationship`): the latest state per id kept
//!   by the taxonomy.
//!
//! A concept is *international* when its module is one of the two reserved
//! international module ids; every other module is an *extension* module.

mod types;

pub use types::{
    CharacteristicType, Concept, ConceptState, Origin, Relationship, RelationshipState,
};
