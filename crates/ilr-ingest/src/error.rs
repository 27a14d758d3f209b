//! Error types for ILR data loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading messages or reference data.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File extension does not identify a supported format.
    #[error("unsupported file format for {path} (expected .xml or .json)")]
    UnsupportedFormat { path: PathBuf },

    /// ILR XML could not be deserialized.
    #[error("failed to parse ILR XML: {source}")]
    Xml {
        #[source]
        source: quick_xml::DeError,
    },

    /// ILR JSON could not be deserialized.
    #[error("failed to parse ILR JSON: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },

    /// Reference data CSV could not be parsed.
    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Result type for ingest operations.
pub type Result<T> = std::result::Result<T, IngestError>;
