//! Row emitter
//!
//! Renders relationship states as fixed seven-column, tab separated rows
//! behind a single header line. [`RowWriter`] propagates I/O errors and is
//! used for reports; [`RowEmitter`] keeps the first failure so it can be
//! driven from record callbacks.

mod row;
mod writer;

pub use row::RelationshipRow;
pub use writer::{RowEmitter, RowWriter};
