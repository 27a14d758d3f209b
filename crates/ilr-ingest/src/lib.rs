//! ILR data ingestion.
//!
//! Loads ILR submissions (XML as transmitted, or the equivalent JSON) into the
//! [`ilr_model::Message`] model, and LARS reference data from CSV extracts.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use ilr_ingest::{load_lars, load_message};
//!
//! let message = load_message(Path::new("ILR-10000001-1920-20191001-090000-01.xml"))?;
//! let lars = load_lars(Path::new("lars/framework_aims.csv"))?;
//! ```

mod error;
mod lars;
mod message;

pub use error::{IngestError, Result};
pub use lars::{load_lars, parse_lars};
pub use message::{
    MessageFormat, load_message, parse_message, parse_message_json, parse_message_xml,
};
