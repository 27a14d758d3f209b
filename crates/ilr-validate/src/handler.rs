//! Validation error handlers.
//!
//! Rules never return their findings; they report each violation to the
//! handler they are given. Closures taking a [`RuleViolation`] are handlers.

use std::collections::BTreeMap;

use crate::violation::RuleViolation;

/// Receives violations as rules detect them.
pub trait ValidationErrorHandler {
    fn handle(&mut self, violation: RuleViolation);
}

impl<F> ValidationErrorHandler for F
where
    F: FnMut(RuleViolation),
{
    fn handle(&mut self, violation: RuleViolation) {
        self(violation);
    }
}

/// Handler that keeps every violation in arrival order.
#[derive(Debug, Clone, Default)]
pub struct CollectingHandler {
    violations: Vec<RuleViolation>,
}

impl CollectingHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn violations(&self) -> &[RuleViolation] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<RuleViolation> {
        self.violations
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

impl ValidationErrorHandler for CollectingHandler {
    fn handle(&mut self, violation: RuleViolation) {
        self.violations.push(violation);
    }
}

/// Forwards to another handler while counting violations per rule.
pub(crate) struct CountingHandler<'h> {
    inner: &'h mut dyn ValidationErrorHandler,
    counts: BTreeMap<&'static str, usize>,
}

impl<'h> CountingHandler<'h> {
    pub(crate) fn new(inner: &'h mut dyn ValidationErrorHandler) -> Self {
        Self {
            inner,
            counts: BTreeMap::new(),
        }
    }

    pub(crate) fn counts(&self) -> &BTreeMap<&'static str, usize> {
        &self.counts
    }

    pub(crate) fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

impl ValidationErrorHandler for CountingHandler<'_> {
    fn handle(&mut self, violation: RuleViolation) {
        *self.counts.entry(violation.rule_name).or_default() += 1;
        self.inner.handle(violation);
    }
}
