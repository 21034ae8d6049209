//! RF2 record stream
//!
//! Push-style reading of SNOMED CT release format 2 snapshot tables. A reader
//! walks the configured sources and hands each row to a [`ComponentFactory`];
//! pairs of listeners let one pass build the taxonomy and feed the classifier.
//!
//! # Example
//!
//! ```rust,no_run
//! use owlkit_core::rf2::Rf2Reader;
//! use owlkit_core::taxonomy::Taxonomy;
//!
//! let mut taxonomy = Taxonomy::new();
//! let stats = Rf2Reader::new(["SnomedCT_InternationalRF2.zip", "extension_snapshot.zip"])
//!     .load(&mut taxonomy)
//!     .unwrap();
//! println!("{} concepts", stats.concepts);
//! ```

mod factory;
mod parse;
mod reader;

pub use factory::ComponentFactory;
pub use reader::{read_table, LoadStats, Rf2Reader, TableKind};
