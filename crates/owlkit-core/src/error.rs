//! Common error types for owlkit.

use std::path::PathBuf;

use thiserror::Error;

use crate::classify::Bucket;

/// Common error type for owlkit operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Zip archive error
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// An RF2 file could not be read as a snapshot table
    #[error("malformed RF2 file `{path}`: {reason}")]
    MalformedFile { path: PathBuf, reason: String },

    /// Writing an inactivation row failed during ingestion
    #[error("failed to write row for relationship {relationship_id}: {source}")]
    RowEmission {
        relationship_id: u64,
        #[source]
        source: std::io::Error,
    },

    /// The input never presented an active extension concept
    #[error("no extension module found in the snapshot input")]
    MissingExtensionModule,

    /// The axiom generator cannot express the requested strategy
    #[error("axiom generation is not supported for `{0}`")]
    UnsupportedStrategy(Bucket),
}

/// Result type alias using owlkit Error.
pub type Result<T> = std::result::Result<T, Error>;
