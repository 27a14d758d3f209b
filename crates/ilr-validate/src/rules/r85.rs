//! R85: a destination and progression record must carry the ULN of the
//! learner it belongs to.

use ilr_model::LearnerDestinationAndProgression;

use crate::context::ValidationContext;
use crate::handler::ValidationErrorHandler;
use crate::properties::ULN;
use crate::rule::Rule;
use crate::violation::RuleViolation;

pub struct R85;

impl Rule<LearnerDestinationAndProgression> for R85 {
    fn name(&self) -> &'static str {
        "R85"
    }

    fn validate(
        &self,
        destination: &LearnerDestinationAndProgression,
        ctx: &ValidationContext<'_>,
        handler: &mut dyn ValidationErrorHandler,
    ) {
        let Some(learner) = ctx.learner(&destination.learn_ref_number) else {
            return;
        };
        if learner.uln != destination.uln {
            handler.handle(
                RuleViolation::for_learner(self.name(), &destination.learn_ref_number)
                    .with_parameter(ULN, destination.uln),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{destination, learner, options, run_rule, ULN as LEARNER_ULN};
    use ilr_model::Message;

    fn check(destination: &LearnerDestinationAndProgression) -> Vec<RuleViolation> {
        let message = Message {
            learners: vec![learner(Vec::new())],
            learner_destination_and_progressions: vec![destination.clone()],
            ..Message::default()
        };
        run_rule(&R85, destination, &message, &options(), None)
    }

    #[test]
    fn mismatched_uln_fails() {
        let violations = check(&destination(1_000_000_099, Vec::new()));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].learn_ref_number.as_deref(), Some("LR001"));
        assert_eq!(violations[0].parameter("ULN"), Some("1000000099"));
    }

    #[test]
    fn matching_uln_passes() {
        assert!(check(&destination(LEARNER_ULN, Vec::new())).is_empty());
    }

    #[test]
    fn record_without_learner_is_not_checked() {
        let mut orphan = destination(1_000_000_099, Vec::new());
        orphan.learn_ref_number = "LR999".to_string();
        assert!(check(&orphan).is_empty());
    }
}
