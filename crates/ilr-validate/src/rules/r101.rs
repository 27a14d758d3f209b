//! R101: apprenticeship deliveries must record a contract type.

use ilr_model::Learner;
use ilr_model::codes::{fund_model, learn_del_fam_type};

use crate::context::ValidationContext;
use crate::handler::ValidationErrorHandler;
use crate::properties::{FUND_MODEL, LEARN_DEL_FAM_TYPE};
use crate::query::deliveries::has_fund_model;
use crate::query::fams::has_fam_type;
use crate::rule::Rule;
use crate::violation::RuleViolation;

pub struct R101;

impl Rule<Learner> for R101 {
    fn name(&self) -> &'static str {
        "R101"
    }

    fn validate(
        &self,
        learner: &Learner,
        _ctx: &ValidationContext<'_>,
        handler: &mut dyn ValidationErrorHandler,
    ) {
        let missing = learner.learning_deliveries.iter().filter(|delivery| {
            has_fund_model(delivery, &[fund_model::APPRENTICESHIPS])
                && !has_fam_type(delivery, learn_del_fam_type::ACT)
        });
        for aim in missing {
            handler.handle(
                RuleViolation::for_delivery(
                    self.name(),
                    &learner.learn_ref_number,
                    aim.aim_seq_number,
                )
                .with_parameter(FUND_MODEL, aim.fund_model)
                .with_parameter(LEARN_DEL_FAM_TYPE, learn_del_fam_type::ACT),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{check_learner, date, dated_fam, delivery, learner, parameters};

    #[test]
    fn apprenticeship_without_act_fails() {
        let mut with_act = delivery(1, 1, 36, date(2019, 8, 1));
        with_act.learning_delivery_fams = vec![dated_fam("ACT", "1", date(2019, 8, 1), None)];
        let without_act = delivery(2, 3, 36, date(2019, 8, 1));
        let adult_skills = delivery(3, 4, 35, date(2019, 8, 1));

        let violations = check_learner(&R101, &learner(vec![with_act, without_act, adult_skills]));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].aim_sequence_number, Some(2));
        assert_eq!(
            parameters(&violations[0]),
            vec![("FundModel", "36"), ("LearnDelFAMType", "ACT")]
        );
    }
}
