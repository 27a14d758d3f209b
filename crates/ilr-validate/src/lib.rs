//! ILR validation rules.
//!
//! Each rule checks one compliance condition over a learner, a destination
//! and progression record, or a whole message, and reports every violation
//! it finds to a [`ValidationErrorHandler`] with the rule name, learner
//! reference, aim sequence number and named error parameters.
//!
//! ```ignore
//! let options = ValidationOptions::new();
//! let ctx = ValidationContext::new(&message, &options);
//! let violations = RuleEngine::with_default_rules().execute(&message, &ctx);
//! ```

pub mod catalog;
pub mod context;
pub mod engine;
pub mod handler;
pub mod properties;
pub mod query;
pub mod report;
pub mod rule;
pub mod rules;
pub mod util;
pub mod violation;

#[cfg(test)]
pub(crate) mod test_support;

pub use catalog::{Category, LoadError, RuleMetadata, RuleRegistry, load_default_rules, load_rules};
pub use context::ValidationContext;
pub use engine::RuleEngine;
pub use handler::{CollectingHandler, ValidationErrorHandler};
pub use report::{ReportedIssue, ValidationReport};
pub use rule::Rule;
pub use violation::{ErrorParameter, ParameterValue, RuleViolation, Severity};
