//! Rule metadata registry.

use std::collections::BTreeMap;

use serde::Serialize;

use super::category::Category;
use crate::violation::Severity;

/// Published metadata for one rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleMetadata {
    pub name: String,
    pub severity: Severity,
    pub category: Category,
    pub message: String,
}

/// Rule metadata indexed by rule name (case-insensitive).
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: BTreeMap<String, RuleMetadata>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rules(rules: impl IntoIterator<Item = RuleMetadata>) -> Self {
        let mut registry = Self::new();
        for rule in rules {
            registry.insert(rule);
        }
        registry
    }

    /// Insert a rule, replacing any earlier entry with the same name.
    pub fn insert(&mut self, rule: RuleMetadata) {
        self.rules.insert(rule.name.to_uppercase(), rule);
    }

    pub fn get(&self, name: &str) -> Option<&RuleMetadata> {
        self.rules.get(&name.trim().to_uppercase())
    }

    /// Severity of `name`; rules missing from the registry count as errors.
    pub fn severity(&self, name: &str) -> Severity {
        self.get(name)
            .map(|rule| rule.severity)
            .unwrap_or(Severity::Error)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules ordered by rule number.
    pub fn iter(&self) -> impl Iterator<Item = &RuleMetadata> {
        let mut rules: Vec<&RuleMetadata> = self.rules.values().collect();
        rules.sort_by_key(|rule| rule_number(&rule.name));
        rules.into_iter()
    }
}

fn rule_number(name: &str) -> u32 {
    name.trim_start_matches(['R', 'r'])
        .parse()
        .unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(name: &str, severity: Severity) -> RuleMetadata {
        RuleMetadata {
            name: name.to_string(),
            severity,
            category: Category::Programme,
            message: String::new(),
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let registry = RuleRegistry::from_rules([metadata("R108", Severity::Warning)]);
        assert_eq!(registry.severity("r108"), Severity::Warning);
        assert_eq!(registry.severity("R999"), Severity::Error);
    }

    #[test]
    fn iteration_is_numeric() {
        let registry = RuleRegistry::from_rules([
            metadata("R100", Severity::Error),
            metadata("R20", Severity::Error),
            metadata("R99", Severity::Error),
        ]);
        let names: Vec<_> = registry.iter().map(|rule| rule.name.as_str()).collect();
        assert_eq!(names, vec!["R20", "R99", "R100"]);
    }
}
