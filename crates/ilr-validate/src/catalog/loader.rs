//! CSV loader for rule metadata.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::category::Category;
use super::registry::{RuleMetadata, RuleRegistry};
use crate::violation::Severity;

static DEFAULT_RULES_CSV: &str = include_str!("../../../../standards/ilr/Rules.csv");

static RULE_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^R\d+$").expect("Invalid rule name regex"));

/// Error loading rule metadata.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing column: {0}")]
    MissingColumn(String),
    #[error("invalid rule name '{0}'")]
    InvalidRuleName(String),
    #[error("rule {rule}: invalid severity '{value}'")]
    InvalidSeverity { rule: String, value: String },
}

/// Load rules from a CSV file.
pub fn load_rules(path: &Path) -> Result<RuleRegistry, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_rules(file)
}

/// Load the rule metadata shipped with the crate.
pub fn load_default_rules() -> Result<RuleRegistry, LoadError> {
    parse_rules(DEFAULT_RULES_CSV.as_bytes())
}

/// Parse rule metadata CSV (`Rule Name, Severity, Category, Message`).
pub fn parse_rules<R: Read>(reader: R) -> Result<RuleRegistry, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = reader.headers()?.clone();

    let name_idx = find_column(&headers, "Rule Name")?;
    let severity_idx = find_column(&headers, "Severity")?;
    let category_idx = find_column(&headers, "Category")?;
    let message_idx = find_column(&headers, "Message")?;

    let mut registry = RuleRegistry::new();
    for result in reader.records() {
        let record = result?;

        let name = record.get(name_idx).unwrap_or("").to_uppercase();
        if name.is_empty() {
            continue;
        }
        if !RULE_NAME_REGEX.is_match(&name) {
            return Err(LoadError::InvalidRuleName(name));
        }

        let severity_value = record.get(severity_idx).unwrap_or("");
        let severity = Severity::parse(severity_value).ok_or_else(|| LoadError::InvalidSeverity {
            rule: name.clone(),
            value: severity_value.to_string(),
        })?;

        registry.insert(RuleMetadata {
            name,
            severity,
            category: Category::parse(record.get(category_idx).unwrap_or("")),
            message: record.get(message_idx).unwrap_or("").to_string(),
        });
    }

    Ok(registry)
}

fn find_column(headers: &csv::StringRecord, name: &str) -> Result<usize, LoadError> {
    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(name))
        .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
}
