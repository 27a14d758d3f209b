//! R20: a learner may only have one 16-19 core aim in learning at a time.

use ilr_model::codes::fund_model;
use ilr_model::{Learner, LearningDelivery};

use crate::context::ValidationContext;
use crate::handler::ValidationErrorHandler;
use crate::properties::{AIM_TYPE, LEARN_ACT_END_DATE, LEARN_START_DATE};
use crate::query::deliveries::{has_fund_model, is_core_aim, learning_period};
use crate::query::duplicates::later_overlapping;
use crate::rule::Rule;
use crate::violation::RuleViolation;

pub struct R20;

impl R20 {
    fn is_in_scope(delivery: &LearningDelivery) -> bool {
        is_core_aim(delivery) && has_fund_model(delivery, &[fund_model::SIXTEEN_TO_NINETEEN])
    }
}

impl Rule<Learner> for R20 {
    fn name(&self) -> &'static str {
        "R20"
    }

    fn validate(
        &self,
        learner: &Learner,
        _ctx: &ValidationContext<'_>,
        handler: &mut dyn ValidationErrorHandler,
    ) {
        let core_aims: Vec<&LearningDelivery> = learner
            .learning_deliveries
            .iter()
            .filter(|delivery| Self::is_in_scope(delivery))
            .collect();

        for aim in later_overlapping(&core_aims, |aim| learning_period(aim)) {
            handler.handle(
                RuleViolation::for_delivery(
                    self.name(),
                    &learner.learn_ref_number,
                    aim.aim_seq_number,
                )
                .with_parameter(AIM_TYPE, aim.aim_type)
                .with_parameter(LEARN_START_DATE, aim.learn_start_date)
                .with_parameter(LEARN_ACT_END_DATE, aim.learn_act_end_date),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{check_learner, closed, date, delivery, learner, parameters};

    #[test]
    fn overlapping_core_aims_report_the_later_one() {
        let first = delivery(1, 5, 25, date(2019, 8, 1));
        let second = delivery(2, 5, 25, date(2019, 9, 1));
        let violations = check_learner(&R20, &learner(vec![first, second]));

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].aim_sequence_number, Some(2));
        assert_eq!(
            parameters(&violations[0]),
            vec![
                ("AimType", "5"),
                ("LearnStartDate", "01/09/2019"),
                ("LearnActEndDate", ""),
            ]
        );
    }

    #[test]
    fn consecutive_core_aims_pass() {
        let first = closed(delivery(1, 5, 25, date(2018, 8, 1)), date(2019, 7, 31));
        let second = delivery(2, 5, 25, date(2019, 8, 1));
        assert!(check_learner(&R20, &learner(vec![first, second])).is_empty());
    }

    #[test]
    fn other_funding_models_are_ignored() {
        let first = delivery(1, 5, 25, date(2019, 8, 1));
        let second = delivery(2, 5, 35, date(2019, 9, 1));
        let third = delivery(3, 4, 25, date(2019, 9, 1));
        assert!(check_learner(&R20, &learner(vec![first, second, third])).is_empty());
    }
}
