//! owlkit core engine
//!
//! Reconciles extension stated relationship edits against the international
//! SNOMED CT release and decides, per edited international concept, how the
//! edits must be re-expressed as additional OWL axioms.
//!
//! # Pipeline
//!
//! 1. [`rf2::Rf2Reader`] pushes snapshot rows into a [`rf2::ComponentFactory`]
//! 2. [`taxonomy::Taxonomy`] keeps the latest concept and stated relationship state
//! 3. [`classify::ExtensionClassifier`] sorts edited concepts into strategy buckets
//! 4. [`report`] writes one audit file per bucket, or [`convert`] retires the
//!    edited relationships and writes axioms for one bucket into a zip archive
//!
//! # Example
//!
//! ```rust
//! use owlkit_core::classify::{Bucket, ExtensionClassifier};
//! use owlkit_core::component::{ConceptState, RelationshipState};
//! use owlkit_core::constants::{CORE_MODULE, IS_A};
//! use owlkit_core::emit::RowEmitter;
//!
//! let ext = 731000124108;
//! let emitter = RowEmitter::new(Vec::new()).unwrap();
//! let mut classifier = ExtensionClassifier::with_emitter(emitter);
//!
//! classifier.on_concept(&ConceptState::new(10, CORE_MODULE));
//! classifier.on_concept(&ConceptState::new(20, CORE_MODULE));
//! classifier.on_concept(&ConceptState::new(30, ext));
//! classifier.on_relationship(&RelationshipState::stated(100, 10, 363698007, 20).module(ext));
//!
//! let (classification, rows) = classifier.complete().unwrap();
//! assert_eq!(classification.strategy_for(10), Some(Bucket::NeedsManualIsA));
//! assert!(String::from_utf8(rows.unwrap()).unwrap().contains("100\t0\t"));
//! ```

pub mod axiom;
pub mod classify;
pub mod component;
pub mod config;
pub mod constants;
pub mod convert;
pub mod emit;
pub mod error;
pub mod report;
pub mod rf2;
pub mod taxonomy;

// Re-export main types at crate root
pub use axiom::{AxiomGenerator, AxiomRow, PrimitiveAxiomGenerator};
pub use classify::{Bucket, Classification, ExtensionClassifier, ParseBucketError};
pub use component::{
    CharacteristicType, Concept, ConceptState, Origin, Relationship, RelationshipState,
};
pub use config::RunConfig;
pub use convert::{convert, ConversionSummary};
pub use emit::{RelationshipRow, RowEmitter, RowWriter};
pub use error::{Error, Result};
pub use report::{analyze, write_reports, BucketReport, ReportSummary};
pub use rf2::{ComponentFactory, LoadStats, Rf2Reader};
pub use taxonomy::{StatedView, Taxonomy, TaxonomyStats};
