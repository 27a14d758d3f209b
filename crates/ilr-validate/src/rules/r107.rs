//! R107: learners who have finished 16-19 or traineeship learning need a
//! destination and progression record.

use ilr_model::codes::fund_model;
use ilr_model::{Learner, LearningDelivery};

use crate::context::ValidationContext;
use crate::handler::ValidationErrorHandler;
use crate::properties::{LEARN_ACT_END_DATE, ULN};
use crate::query::deliveries::{all_closed, has_fund_model, is_traineeship, latest_end_date};
use crate::rule::Rule;
use crate::violation::RuleViolation;

pub struct R107;

impl R107 {
    fn is_in_scope(delivery: &LearningDelivery) -> bool {
        has_fund_model(
            delivery,
            &[
                fund_model::SIXTEEN_TO_NINETEEN,
                fund_model::OTHER_SIXTEEN_TO_NINETEEN,
            ],
        ) || (has_fund_model(delivery, &[fund_model::ADULT_SKILLS]) && is_traineeship(delivery))
    }

    /// The learner has in-scope learning and every delivery has ended.
    pub(crate) fn has_finished_in_scope_learning(learner: &Learner) -> bool {
        learner.learning_deliveries.iter().any(Self::is_in_scope)
            && all_closed(&learner.learning_deliveries)
    }
}

impl Rule<Learner> for R107 {
    fn name(&self) -> &'static str {
        "R107"
    }

    fn validate(
        &self,
        learner: &Learner,
        ctx: &ValidationContext<'_>,
        handler: &mut dyn ValidationErrorHandler,
    ) {
        if !Self::has_finished_in_scope_learning(learner) {
            return;
        }
        if ctx
            .destination_and_progression(&learner.learn_ref_number)
            .is_some()
        {
            return;
        }
        handler.handle(
            RuleViolation::for_learner(self.name(), &learner.learn_ref_number)
                .with_parameter(ULN, learner.uln)
                .with_parameter(
                    LEARN_ACT_END_DATE,
                    latest_end_date(&learner.learning_deliveries),
                ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        check_learner, closed, date, delivery, destination, learner, options, parameters, run_rule,
        ULN as LEARNER_ULN,
    };
    use ilr_model::Message;

    fn finished_learner() -> Learner {
        learner(vec![
            closed(delivery(1, 5, 25, date(2018, 9, 1)), date(2019, 6, 30)),
            closed(delivery(2, 4, 25, date(2018, 9, 1)), date(2019, 7, 15)),
        ])
    }

    #[test]
    fn finished_learner_without_destination_fails() {
        let violations = check_learner(&R107, &finished_learner());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].aim_sequence_number, None);
        assert_eq!(
            parameters(&violations[0]),
            vec![("ULN", "1000000001"), ("LearnActEndDate", "15/07/2019")]
        );
    }

    #[test]
    fn destination_record_satisfies_rule() {
        let subject = finished_learner();
        let message = Message {
            learners: vec![subject.clone()],
            learner_destination_and_progressions: vec![destination(LEARNER_ULN, Vec::new())],
            ..Message::default()
        };
        assert!(run_rule(&R107, &subject, &message, &options(), None).is_empty());
    }

    #[test]
    fn continuing_or_out_of_scope_learners_pass() {
        let mut continuing = finished_learner();
        continuing.learning_deliveries[1].learn_act_end_date = None;
        assert!(check_learner(&R107, &continuing).is_empty());

        let adult_aim = closed(delivery(1, 4, 35, date(2018, 9, 1)), date(2019, 6, 30));
        let adult = learner(vec![adult_aim]);
        assert!(check_learner(&R107, &adult).is_empty());
    }

    #[test]
    fn adult_traineeship_is_in_scope() {
        let mut traineeship = closed(delivery(1, 1, 35, date(2018, 9, 1)), date(2019, 6, 30));
        traineeship.prog_type = Some(24);
        assert_eq!(check_learner(&R107, &learner(vec![traineeship])).len(), 1);
    }
}
