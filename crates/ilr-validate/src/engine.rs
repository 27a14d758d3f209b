//! Rule engine that runs the catalogue over an ILR message.
//!
//! Learner rules run once per learner, destination rules once per destination
//! and progression record, and message rules once per file. Rules disabled in
//! the [`ValidationOptions`](ilr_model::ValidationOptions) are skipped.

use std::fmt;

use ilr_model::{Learner, LearnerDestinationAndProgression, Message};
use tracing::{debug, info, info_span};

use crate::context::ValidationContext;
use crate::handler::{CollectingHandler, CountingHandler, ValidationErrorHandler};
use crate::rule::Rule;
use crate::rules::{
    DestinationRule, LearnerRule, MessageRule, destination_rules, learner_rules, message_rules,
};
use crate::violation::RuleViolation;

/// Ordered set of rules to execute.
#[derive(Default)]
pub struct RuleEngine {
    learner_rules: Vec<LearnerRule>,
    destination_rules: Vec<DestinationRule>,
    message_rules: Vec<MessageRule>,
}

impl fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}

impl RuleEngine {
    /// Create an engine with no rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with the full rule catalogue.
    pub fn with_default_rules() -> Self {
        Self {
            learner_rules: learner_rules(),
            destination_rules: destination_rules(),
            message_rules: message_rules(),
        }
    }

    pub fn add_learner_rule(&mut self, rule: impl Rule<Learner> + 'static) {
        self.learner_rules.push(Box::new(rule));
    }

    pub fn add_destination_rule(
        &mut self,
        rule: impl Rule<LearnerDestinationAndProgression> + 'static,
    ) {
        self.destination_rules.push(Box::new(rule));
    }

    pub fn add_message_rule(&mut self, rule: impl Rule<Message> + 'static) {
        self.message_rules.push(Box::new(rule));
    }

    /// Names of all registered rules.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.learner_rules
            .iter()
            .map(|rule| rule.name())
            .chain(self.destination_rules.iter().map(|rule| rule.name()))
            .chain(self.message_rules.iter().map(|rule| rule.name()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.learner_rules.len() + self.destination_rules.len() + self.message_rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run every enabled rule and collect the violations.
    pub fn execute(&self, message: &Message, ctx: &ValidationContext<'_>) -> Vec<RuleViolation> {
        let mut handler = CollectingHandler::new();
        self.execute_into(message, ctx, &mut handler);
        handler.into_violations()
    }

    /// Run every enabled rule, reporting violations to `handler`.
    ///
    /// Returns the number of violations reported.
    pub fn execute_into(
        &self,
        message: &Message,
        ctx: &ValidationContext<'_>,
        handler: &mut dyn ValidationErrorHandler,
    ) -> usize {
        let span = info_span!(
            "validate",
            learners = message.learners.len(),
            destinations = message.learner_destination_and_progressions.len(),
            reference_date = %ctx.reference_date,
        );
        let _guard = span.enter();

        let mut counting = CountingHandler::new(handler);

        for rule in self
            .learner_rules
            .iter()
            .filter(|rule| ctx.is_rule_enabled(rule.name()))
        {
            for learner in &message.learners {
                rule.validate(learner, ctx, &mut counting);
            }
        }

        for rule in self
            .destination_rules
            .iter()
            .filter(|rule| ctx.is_rule_enabled(rule.name()))
        {
            for destination in &message.learner_destination_and_progressions {
                rule.validate(destination, ctx, &mut counting);
            }
        }

        for rule in self
            .message_rules
            .iter()
            .filter(|rule| ctx.is_rule_enabled(rule.name()))
        {
            rule.validate(message, ctx, &mut counting);
        }

        for (rule_name, count) in counting.counts() {
            debug!(rule = rule_name, count, "rule violations");
        }
        let total = counting.total();
        info!(violations = total, "validation complete");
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{date, delivery, learner, options};

    struct AlwaysFails;

    impl Rule<Learner> for AlwaysFails {
        fn name(&self) -> &'static str {
            "R1"
        }

        fn validate(
            &self,
            learner: &Learner,
            _ctx: &ValidationContext<'_>,
            handler: &mut dyn ValidationErrorHandler,
        ) {
            handler.handle(RuleViolation::for_learner(
                self.name(),
                &learner.learn_ref_number,
            ));
        }
    }

    #[test]
    fn custom_rules_run_per_learner() {
        let mut engine = RuleEngine::new();
        engine.add_learner_rule(AlwaysFails);

        let message = Message {
            learners: vec![learner(Vec::new()), learner(Vec::new())],
            ..Message::default()
        };
        let options = options();
        let ctx = ValidationContext::new(&message, &options);
        assert_eq!(engine.execute(&message, &ctx).len(), 2);
    }

    #[test]
    fn disabled_rules_are_skipped() {
        let mut engine = RuleEngine::new();
        engine.add_learner_rule(AlwaysFails);

        let message = Message {
            learners: vec![learner(vec![delivery(1, 4, 35, date(2019, 8, 1))])],
            ..Message::default()
        };
        let options = options().disable_rule("r1");
        let ctx = ValidationContext::new(&message, &options);
        assert!(engine.execute(&message, &ctx).is_empty());
    }

    struct FlagsEveryDestination;

    impl Rule<LearnerDestinationAndProgression> for FlagsEveryDestination {
        fn name(&self) -> &'static str {
            "R2"
        }

        fn validate(
            &self,
            destination: &LearnerDestinationAndProgression,
            _ctx: &ValidationContext<'_>,
            handler: &mut dyn ValidationErrorHandler,
        ) {
            handler.handle(RuleViolation::for_learner(
                self.name(),
                &destination.learn_ref_number,
            ));
        }
    }

    struct FlagsEmptyFile;

    impl Rule<Message> for FlagsEmptyFile {
        fn name(&self) -> &'static str {
            "R3"
        }

        fn validate(
            &self,
            message: &Message,
            _ctx: &ValidationContext<'_>,
            handler: &mut dyn ValidationErrorHandler,
        ) {
            if message.learners.is_empty() {
                handler.handle(RuleViolation::new(self.name()));
            }
        }
    }

    #[test]
    fn destination_and_message_rules_run_after_learner_rules() {
        let mut engine = RuleEngine::new();
        engine.add_message_rule(FlagsEmptyFile);
        engine.add_destination_rule(FlagsEveryDestination);
        engine.add_learner_rule(AlwaysFails);
        assert_eq!(engine.rule_names(), vec!["R1", "R2", "R3"]);

        let message = Message {
            learner_destination_and_progressions: vec![
                LearnerDestinationAndProgression {
                    learn_ref_number: "DP01".to_string(),
                    ..LearnerDestinationAndProgression::default()
                },
                LearnerDestinationAndProgression {
                    learn_ref_number: "DP02".to_string(),
                    ..LearnerDestinationAndProgression::default()
                },
            ],
            ..Message::default()
        };
        let options = options();
        let ctx = ValidationContext::new(&message, &options);
        let violations = engine.execute(&message, &ctx);

        let names: Vec<_> = violations
            .iter()
            .map(|violation| violation.rule_name)
            .collect();
        assert_eq!(names, vec!["R2", "R2", "R3"]);
        assert_eq!(violations[1].learn_ref_number.as_deref(), Some("DP02"));
        assert_eq!(violations[2].learn_ref_number, None);
    }

    #[test]
    fn default_engine_has_full_catalogue() {
        let engine = RuleEngine::with_default_rules();
        assert_eq!(engine.len(), 28);
        assert!(engine.rule_names().contains(&"R59"));
    }
}
