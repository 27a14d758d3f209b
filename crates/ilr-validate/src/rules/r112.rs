//! R112: the last contract type of a finished apprenticeship ends on the
//! learning actual end date.

use ilr_model::Learner;
use ilr_model::codes::{fund_model, learn_del_fam_type};

use crate::context::ValidationContext;
use crate::handler::ValidationErrorHandler;
use crate::properties::{LEARN_ACT_END_DATE, LEARN_DEL_FAM_DATE_TO, LEARN_DEL_FAM_TYPE};
use crate::query::deliveries::has_fund_model;
use crate::query::fams::latest_fam_of_type;
use crate::rule::Rule;
use crate::violation::RuleViolation;

pub struct R112;

impl Rule<Learner> for R112 {
    fn name(&self) -> &'static str {
        "R112"
    }

    fn validate(
        &self,
        learner: &Learner,
        _ctx: &ValidationContext<'_>,
        handler: &mut dyn ValidationErrorHandler,
    ) {
        for delivery in &learner.learning_deliveries {
            if !has_fund_model(delivery, &[fund_model::APPRENTICESHIPS]) {
                continue;
            }
            let Some(end) = delivery.learn_act_end_date else {
                continue;
            };
            let Some(fam) = latest_fam_of_type(delivery, learn_del_fam_type::ACT) else {
                continue;
            };
            if fam.learn_del_fam_date_to == Some(end) {
                continue;
            }
            handler.handle(
                RuleViolation::for_delivery(
                    self.name(),
                    &learner.learn_ref_number,
                    delivery.aim_seq_number,
                )
                .with_parameter(LEARN_ACT_END_DATE, end)
                .with_parameter(LEARN_DEL_FAM_TYPE, &fam.learn_del_fam_type)
                .with_parameter(LEARN_DEL_FAM_DATE_TO, fam.learn_del_fam_date_to),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        check_learner, closed, date, dated_fam, delivery, learner, parameters,
    };

    #[test]
    fn contract_left_open_after_end_fails() {
        let mut aim = closed(delivery(1, 1, 36, date(2019, 8, 1)), date(2020, 5, 31));
        aim.learning_delivery_fams = vec![
            dated_fam("ACT", "1", date(2019, 8, 1), Some(date(2019, 12, 31))),
            dated_fam("ACT", "2", date(2020, 1, 1), None),
        ];
        let violations = check_learner(&R112, &learner(vec![aim]));

        assert_eq!(violations.len(), 1);
        assert_eq!(
            parameters(&violations[0]),
            vec![
                ("LearnActEndDate", "31/05/2020"),
                ("LearnDelFAMType", "ACT"),
                ("LearnDelFAMDateTo", ""),
            ]
        );
    }

    #[test]
    fn contract_ending_with_learning_passes() {
        let mut aim = closed(delivery(1, 1, 36, date(2019, 8, 1)), date(2020, 5, 31));
        let act = dated_fam("ACT", "1", date(2019, 8, 1), Some(date(2020, 5, 31)));
        aim.learning_delivery_fams = vec![act];
        assert!(check_learner(&R112, &learner(vec![aim])).is_empty());
    }
}
