//! R113: the current contract type of a continuing apprenticeship must be
//! open.

use ilr_model::Learner;
use ilr_model::codes::{fund_model, learn_del_fam_type};

use crate::context::ValidationContext;
use crate::handler::ValidationErrorHandler;
use crate::properties::{LEARN_ACT_END_DATE, LEARN_DEL_FAM_DATE_TO, LEARN_DEL_FAM_TYPE};
use crate::query::deliveries::{has_fund_model, is_closed};
use crate::query::fams::latest_fam_of_type;
use crate::rule::Rule;
use crate::violation::RuleViolation;

pub struct R113;

impl Rule<Learner> for R113 {
    fn name(&self) -> &'static str {
        "R113"
    }

    fn validate(
        &self,
        learner: &Learner,
        _ctx: &ValidationContext<'_>,
        handler: &mut dyn ValidationErrorHandler,
    ) {
        let continuing = learner.learning_deliveries.iter().filter(|delivery| {
            has_fund_model(delivery, &[fund_model::APPRENTICESHIPS]) && !is_closed(delivery)
        });

        for delivery in continuing {
            let Some(fam) = latest_fam_of_type(delivery, learn_del_fam_type::ACT) else {
                continue;
            };
            if fam.learn_del_fam_date_to.is_none() {
                continue;
            }
            handler.handle(
                RuleViolation::for_delivery(
                    self.name(),
                    &learner.learn_ref_number,
                    delivery.aim_seq_number,
                )
                .with_parameter(LEARN_ACT_END_DATE, delivery.learn_act_end_date)
                .with_parameter(LEARN_DEL_FAM_TYPE, &fam.learn_del_fam_type)
                .with_parameter(LEARN_DEL_FAM_DATE_TO, fam.learn_del_fam_date_to),
            );
        }
    }
}
