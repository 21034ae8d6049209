//! Taxonomy store
//!
//! Holds the latest state of every observed concept and stated relationship,
//! indexed from source concept to its stated relationships. The store is
//! filled once while the snapshot is read and is only read from afterwards.
//!
//! # Example
//!
//! ```rust
//! use owlkit_core::component::{Concept, Relationship, RelationshipState};
//! use owlkit_core::constants::{CORE_MODULE, IS_A};
//! use owlkit_core::taxonomy::{StatedView, Taxonomy};
//!
//! let mut taxonomy = Taxonomy::new();
//! taxonomy.record_concept(Concept { id: 10, active: true, module_id: CORE_MODULE });
//! taxonomy.record_relationship(Relationship::from(&RelationshipState::stated(100, 10, IS_A, 20)));
//!
//! assert_eq!(taxonomy.stated_relationships(10).len(), 1);
//! ```

mod memory;
mod traits;

pub use memory::Taxonomy;
pub use traits::{StatedView, TaxonomyStats};
