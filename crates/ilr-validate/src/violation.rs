//! Rule violations and their error parameters.
//!
//! A violation carries the rule name, the learner reference, the failing
//! record's aim sequence number (when the rule works on deliveries) and the
//! named values that explain the failure. Parameter values are rendered the
//! way the ILR error report shows them: dates as `dd/MM/yyyy` and absent
//! values as empty strings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Issue severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    /// Record is rejected
    Error,
    /// Record is accepted but should be reviewed
    Warning,
    /// Whole file is rejected
    Fail,
}

impl Severity {
    /// Parse severity from the registry's `E`/`W`/`F` codes or full names.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "e" | "error" => Some(Self::Error),
            "w" | "warning" => Some(Self::Warning),
            "f" | "fail" => Some(Self::Fail),
            _ => None,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
            Self::Fail => "Fail",
        }
    }

    /// Whether the record (or file) is rejected.
    pub fn is_blocking(&self) -> bool {
        matches!(self, Self::Error | Self::Fail)
    }
}

/// Renders a field value as ILR error-report text.
pub trait ParameterValue {
    fn to_parameter_value(&self) -> String;
}

impl ParameterValue for str {
    fn to_parameter_value(&self) -> String {
        self.to_string()
    }
}

impl ParameterValue for String {
    fn to_parameter_value(&self) -> String {
        self.clone()
    }
}

impl ParameterValue for i32 {
    fn to_parameter_value(&self) -> String {
        self.to_string()
    }
}

impl ParameterValue for i64 {
    fn to_parameter_value(&self) -> String {
        self.to_string()
    }
}

impl ParameterValue for NaiveDate {
    fn to_parameter_value(&self) -> String {
        self.format("%d/%m/%Y").to_string()
    }
}

impl<T: ParameterValue> ParameterValue for Option<T> {
    fn to_parameter_value(&self) -> String {
        self.as_ref()
            .map(ParameterValue::to_parameter_value)
            .unwrap_or_default()
    }
}

impl<T: ParameterValue + ?Sized> ParameterValue for &T {
    fn to_parameter_value(&self) -> String {
        (**self).to_parameter_value()
    }
}

/// A named value attached to a violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorParameter {
    pub property_name: &'static str,
    pub value: String,
}

impl ErrorParameter {
    pub fn new(property_name: &'static str, value: impl ParameterValue) -> Self {
        Self {
            property_name,
            value: value.to_parameter_value(),
        }
    }
}

/// A single rule failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleViolation {
    pub rule_name: &'static str,
    pub learn_ref_number: Option<String>,
    pub aim_sequence_number: Option<i64>,
    pub parameters: Vec<ErrorParameter>,
}

impl RuleViolation {
    pub fn new(rule_name: &'static str) -> Self {
        Self {
            rule_name,
            learn_ref_number: None,
            aim_sequence_number: None,
            parameters: Vec::new(),
        }
    }

    pub fn for_learner(rule_name: &'static str, learn_ref_number: &str) -> Self {
        Self {
            learn_ref_number: Some(learn_ref_number.to_string()),
            ..Self::new(rule_name)
        }
    }

    /// Violation on one learning delivery of a learner.
    pub fn for_delivery(
        rule_name: &'static str,
        learn_ref_number: &str,
        aim_seq_number: i64,
    ) -> Self {
        Self::for_learner(rule_name, learn_ref_number).with_aim_sequence_number(aim_seq_number)
    }

    #[must_use]
    pub fn with_aim_sequence_number(mut self, aim_sequence_number: i64) -> Self {
        self.aim_sequence_number = Some(aim_sequence_number);
        self
    }

    #[must_use]
    pub fn with_parameter(
        mut self,
        property_name: &'static str,
        value: impl ParameterValue,
    ) -> Self {
        self.parameters
            .push(ErrorParameter::new(property_name, value));
        self
    }

    /// Value of the named parameter, if present.
    pub fn parameter(&self, property_name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|parameter| parameter.property_name == property_name)
            .map(|parameter| parameter.value.as_str())
    }
}
