//! R99: a learner may only be on one programme at a time.

use ilr_model::{Learner, LearningDelivery};

use crate::context::ValidationContext;
use crate::handler::ValidationErrorHandler;
use crate::properties::{AIM_TYPE, FUND_MODEL, LEARN_ACT_END_DATE, LEARN_START_DATE};
use crate::query::deliveries::{is_programme_aim, learning_period};
use crate::query::duplicates::later_overlapping;
use crate::rule::Rule;
use crate::violation::RuleViolation;

pub struct R99;

impl Rule<Learner> for R99 {
    fn name(&self) -> &'static str {
        "R99"
    }

    fn validate(
        &self,
        learner: &Learner,
        _ctx: &ValidationContext<'_>,
        handler: &mut dyn ValidationErrorHandler,
    ) {
        let programmes: Vec<&LearningDelivery> = learner
            .learning_deliveries
            .iter()
            .filter(|delivery| is_programme_aim(delivery))
            .collect();

        for aim in later_overlapping(&programmes, |aim| learning_period(aim)) {
            handler.handle(
                RuleViolation::for_delivery(
                    self.name(),
                    &learner.learn_ref_number,
                    aim.aim_seq_number,
                )
                .with_parameter(AIM_TYPE, aim.aim_type)
                .with_parameter(LEARN_START_DATE, aim.learn_start_date)
                .with_parameter(LEARN_ACT_END_DATE, aim.learn_act_end_date)
                .with_parameter(FUND_MODEL, aim.fund_model),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{check_learner, closed, date, delivery, learner, parameters};

    #[test]
    fn overlapping_programmes_fail() {
        let first = closed(delivery(1, 1, 36, date(2019, 8, 1)), date(2019, 12, 31));
        let second = delivery(2, 1, 36, date(2019, 12, 31));
        let violations = check_learner(&R99, &learner(vec![second, first]));

        assert_eq!(violations.len(), 1);
        assert_eq!(
            parameters(&violations[0]),
            vec![
                ("AimType", "1"),
                ("LearnStartDate", "31/12/2019"),
                ("LearnActEndDate", ""),
                ("FundModel", "36"),
            ]
        );
    }

    #[test]
    fn every_later_overlapping_programme_fails_once() {
        let first = delivery(1, 1, 36, date(2019, 8, 1));
        let second = delivery(2, 1, 36, date(2019, 9, 1));
        let third = delivery(3, 1, 36, date(2019, 10, 1));
        let violations = check_learner(&R99, &learner(vec![first, second, third]));

        let seqs: Vec<_> = violations
            .iter()
            .map(|violation| violation.aim_sequence_number)
            .collect();
        assert_eq!(seqs, vec![Some(2), Some(3)]);
    }

    #[test]
    fn programme_starting_after_previous_end_passes() {
        let first = closed(delivery(1, 1, 36, date(2019, 8, 1)), date(2019, 12, 31));
        let second = delivery(2, 1, 36, date(2020, 1, 1));
        let component = delivery(3, 3, 36, date(2019, 9, 1));
        assert!(check_learner(&R99, &learner(vec![first, second, component])).is_empty());
    }
}
