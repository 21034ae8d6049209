//! Extension override classification
//!
//! Sorts every international concept that an extension edits through stated
//! relationships into the axiom strategy that can re-express those edits:
//!
//! - **No international model needed**: is-a only, or is-a plus ungrouped
//!   attributes; a primitive axiom built from extension data is enough
//! - **Needs manual is-a**: ungrouped attributes without an is-a
//! - **Requires international stated view**: any grouped attribute
//!
//! Two diagnostic sets ride along: concepts whose edited relationships join
//! two international concepts, and concepts whose edits point at a
//! non-international destination (those need GCI axioms).
//!
//! # Example
//!
//! ```rust
//! use owlkit_core::classify::{Bucket, ExtensionClassifier};
//! use owlkit_core::component::{ConceptState, RelationshipState};
//! use owlkit_core::constants::{CORE_MODULE, IS_A};
//!
//! let ext = 731000124108;
//! let mut classifier = ExtensionClassifier::new();
//! classifier.on_concept(&ConceptState::new(10, CORE_MODULE));
//! classifier.on_concept(&ConceptState::new(20, CORE_MODULE));
//! classifier.on_concept(&ConceptState::new(30, ext));
//! classifier.on_relationship(&RelationshipState::stated(100, 10, IS_A, 20).module(ext));
//!
//! let (classification, _) = classifier.complete().unwrap();
//! assert_eq!(classification.strategy_for(10), Some(Bucket::NoInternationalModelNeeded));
//! ```

mod accumulator;
mod engine;
mod types;

pub use engine::ExtensionClassifier;
pub use types::{Bucket, Classification, ParseBucketError};
