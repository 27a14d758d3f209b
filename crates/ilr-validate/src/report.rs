//! Validation report: violations enriched with rule metadata.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use ilr_model::{AcademicYear, Message};

use crate::catalog::{Category, RuleRegistry};
use crate::context::ValidationContext;
use crate::violation::{ErrorParameter, RuleViolation, Severity};

/// A violation with its severity, category and message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportedIssue {
    pub rule_name: String,
    pub severity: Severity,
    pub category: Category,
    pub message: String,
    pub learn_ref_number: Option<String>,
    pub aim_sequence_number: Option<i64>,
    pub parameters: Vec<ErrorParameter>,
}

impl ReportedIssue {
    pub fn from_violation(violation: RuleViolation, registry: &RuleRegistry) -> Self {
        let metadata = registry.get(violation.rule_name);
        Self {
            rule_name: violation.rule_name.to_string(),
            severity: metadata.map_or(Severity::Error, |rule| rule.severity),
            category: metadata.map_or(Category::Unknown, |rule| rule.category),
            message: metadata
                .map(|rule| rule.message.clone())
                .unwrap_or_default(),
            learn_ref_number: violation.learn_ref_number,
            aim_sequence_number: violation.aim_sequence_number,
            parameters: violation.parameters,
        }
    }
}

/// Outcome of validating one message.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub ukprn: Option<i64>,
    pub reference_date: NaiveDate,
    pub academic_year: AcademicYear,
    pub learner_count: usize,
    pub error_count: usize,
    pub warning_count: usize,
    pub issues: Vec<ReportedIssue>,
}

impl ValidationReport {
    pub fn new(
        message: &Message,
        ctx: &ValidationContext<'_>,
        violations: Vec<RuleViolation>,
        registry: &RuleRegistry,
    ) -> Self {
        let issues: Vec<ReportedIssue> = violations
            .into_iter()
            .map(|violation| ReportedIssue::from_violation(violation, registry))
            .collect();
        let error_count = issues
            .iter()
            .filter(|issue| issue.severity.is_blocking())
            .count();
        let warning_count = issues.len() - error_count;

        Self {
            ukprn: message.ukprn(),
            reference_date: ctx.reference_date,
            academic_year: ctx.academic_year,
            learner_count: message.learners.len(),
            error_count,
            warning_count,
            issues,
        }
    }

    /// Whether any issue rejects a record or the file.
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Issue count per rule name.
    pub fn counts_by_rule(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for issue in &self.issues {
            *counts.entry(issue.rule_name.as_str()).or_default() += 1;
        }
        counts
    }

    /// Distinct learners with at least one issue.
    pub fn learners_with_issues(&self) -> usize {
        let mut refs: Vec<String> = self
            .issues
            .iter()
            .filter_map(|issue| issue.learn_ref_number.as_deref())
            .map(str::to_uppercase)
            .collect();
        refs.sort();
        refs.dedup();
        refs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RuleMetadata;
    use crate::test_support::{learner, options};

    fn registry() -> RuleRegistry {
        RuleRegistry::from_rules([RuleMetadata {
            name: "R108".to_string(),
            severity: Severity::Warning,
            category: Category::Destination,
            message: "stale destination".to_string(),
        }])
    }

    #[test]
    fn severity_comes_from_registry() {
        let message = Message {
            learners: vec![learner(Vec::new())],
            ..Message::default()
        };
        let options = options();
        let ctx = ValidationContext::new(&message, &options);
        let violations = vec![
            RuleViolation::for_learner("R108", "LR001"),
            RuleViolation::for_learner("R99", "lr001"),
            RuleViolation::for_learner("R99", "LR002"),
        ];
        let report = ValidationReport::new(&message, &ctx, violations, &registry());

        assert_eq!(report.warning_count, 1);
        assert_eq!(report.error_count, 2);
        assert!(report.has_errors());
        assert_eq!(report.issues[0].message, "stale destination");
        assert_eq!(report.issues[1].category, Category::Unknown);
        assert_eq!(report.counts_by_rule().get("R99"), Some(&2));
        assert_eq!(report.learners_with_issues(), 2);
    }
}
