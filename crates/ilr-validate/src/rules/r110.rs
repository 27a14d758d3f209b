//! R110: a levy-funded apprentice must be in paid employment when the
//! contract type starts.

use ilr_model::codes::{act_code, emp_stat, fund_model, learn_del_fam_type};
use ilr_model::{Learner, LearningDelivery, LearningDeliveryFam};

use crate::context::ValidationContext;
use crate::handler::ValidationErrorHandler;
use crate::properties::{EMP_STAT, LEARN_DEL_FAM_CODE, LEARN_DEL_FAM_DATE_FROM, LEARN_DEL_FAM_TYPE};
use crate::query::deliveries::has_fund_model;
use crate::query::employment::status_on;
use crate::query::fams::fams_of_type;
use crate::rule::Rule;
use crate::util::code_eq;
use crate::violation::RuleViolation;

pub struct R110;

impl R110 {
    fn levy_fams(delivery: &LearningDelivery) -> impl Iterator<Item = &LearningDeliveryFam> {
        fams_of_type(delivery, learn_del_fam_type::ACT).filter(|fam| {
            code_eq(&fam.learn_del_fam_code, act_code::LEVY)
                && fam.learn_del_fam_date_from.is_some()
        })
    }
}

impl Rule<Learner> for R110 {
    fn name(&self) -> &'static str {
        "R110"
    }

    fn validate(
        &self,
        learner: &Learner,
        _ctx: &ValidationContext<'_>,
        handler: &mut dyn ValidationErrorHandler,
    ) {
        let apprenticeships = learner
            .learning_deliveries
            .iter()
            .filter(|delivery| has_fund_model(delivery, &[fund_model::APPRENTICESHIPS]));

        for delivery in apprenticeships {
            for fam in Self::levy_fams(delivery) {
                let Some(from) = fam.learn_del_fam_date_from else {
                    continue;
                };
                let status = status_on(&learner.learner_employment_statuses, from)
                    .map(|status| status.emp_stat);
                if status == Some(emp_stat::IN_PAID_EMPLOYMENT) {
                    continue;
                }
                handler.handle(
                    RuleViolation::for_delivery(
                        self.name(),
                        &learner.learn_ref_number,
                        delivery.aim_seq_number,
                    )
                    .with_parameter(LEARN_DEL_FAM_TYPE, &fam.learn_del_fam_type)
                    .with_parameter(LEARN_DEL_FAM_CODE, &fam.learn_del_fam_code)
                    .with_parameter(LEARN_DEL_FAM_DATE_FROM, from)
                    .with_parameter(EMP_STAT, status),
                );
            }
        }
    }
}
