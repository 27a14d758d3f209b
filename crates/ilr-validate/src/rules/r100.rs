//! R100: a completed apprenticeship standard must record an assessment price.

use ilr_model::codes::{app_fin, comp_status, fund_model};
use ilr_model::{Learner, LearningDelivery};

use crate::context::ValidationContext;
use crate::handler::ValidationErrorHandler;
use crate::properties::{AIM_TYPE, COMP_STATUS, FUND_MODEL, PROG_TYPE};
use crate::query::deliveries::{has_fund_model, is_apprenticeship_standard, is_programme_aim};
use crate::query::financial::has_record;
use crate::rule::Rule;
use crate::violation::RuleViolation;

pub struct R100;

impl R100 {
    pub fn condition_met(delivery: &LearningDelivery) -> bool {
        has_fund_model(delivery, &[fund_model::APPRENTICESHIPS])
            && is_apprenticeship_standard(delivery)
            && is_programme_aim(delivery)
            && delivery.comp_status == comp_status::COMPLETED
            && !has_record(
                delivery,
                app_fin::TNP,
                &[
                    app_fin::TNP_ASSESSMENT_PRICE,
                    app_fin::TNP_RESIDUAL_ASSESSMENT_PRICE,
                ],
            )
    }
}

impl Rule<Learner> for R100 {
    fn name(&self) -> &'static str {
        "R100"
    }

    fn validate(
        &self,
        learner: &Learner,
        _ctx: &ValidationContext<'_>,
        handler: &mut dyn ValidationErrorHandler,
    ) {
        for aim in &learner.learning_deliveries {
            if Self::condition_met(aim) {
                handler.handle(
                    RuleViolation::for_delivery(
                        self.name(),
                        &learner.learn_ref_number,
                        aim.aim_seq_number,
                    )
                    .with_parameter(AIM_TYPE, aim.aim_type)
                    .with_parameter(FUND_MODEL, aim.fund_model)
                    .with_parameter(PROG_TYPE, aim.prog_type)
                    .with_parameter(COMP_STATUS, aim.comp_status),
                );
            }
        }
    }
}
