//! ILR message loading from XML or JSON.

use std::path::Path;

use ilr_model::Message;
use tracing::{debug, info};

use crate::error::{IngestError, Result};

/// Supported message encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageFormat {
    Xml,
    Json,
}

impl MessageFormat {
    /// Detect the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        if extension.eq_ignore_ascii_case("xml") {
            Some(Self::Xml)
        } else if extension.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else {
            None
        }
    }
}

/// Load an ILR message from disk, choosing the parser by file extension.
pub fn load_message(path: &Path) -> Result<Message> {
    let format = MessageFormat::from_path(path).ok_or_else(|| IngestError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let contents = std::fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = contents.len(), ?format, "read ILR file");

    let message = parse_message(&contents, format)?;
    info!(
        path = %path.display(),
        learners = message.learners.len(),
        destinations = message.learner_destination_and_progressions.len(),
        "loaded ILR message"
    );
    Ok(message)
}

pub fn parse_message(contents: &str, format: MessageFormat) -> Result<Message> {
    match format {
        MessageFormat::Xml => parse_message_xml(contents),
        MessageFormat::Json => parse_message_json(contents),
    }
}

/// Parse an ILR XML document. The root element name is not checked.
pub fn parse_message_xml(contents: &str) -> Result<Message> {
    quick_xml::de::from_str(contents).map_err(|source| IngestError::Xml { source })
}

pub fn parse_message_json(contents: &str) -> Result<Message> {
    serde_json::from_str(contents).map_err(|source| IngestError::Json { source })
}
