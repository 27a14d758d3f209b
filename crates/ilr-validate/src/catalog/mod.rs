//! Rule metadata loaded from CSV.
//!
//! Severity, category and message text for each rule live in
//! `standards/ilr/Rules.csv`, which is embedded at build time.

mod category;
mod loader;
mod registry;

pub use category::Category;
pub use loader::{LoadError, load_default_rules, load_rules, parse_rules};
pub use registry::{RuleMetadata, RuleRegistry};
