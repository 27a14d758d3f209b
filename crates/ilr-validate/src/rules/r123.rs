//! R123: reimbursements cannot exceed the payments the employer made.

use ilr_model::codes::{app_fin, fund_model};
use ilr_model::{Learner, LearningDelivery};

use crate::context::ValidationContext;
use crate::handler::ValidationErrorHandler;
use crate::properties::{AFIN_AMOUNT, AFIN_CODE, AFIN_TYPE};
use crate::query::deliveries::{has_fund_model, is_programme_aim};
use crate::query::financial::{employer_payments, employer_reimbursements};
use crate::rule::Rule;
use crate::violation::RuleViolation;

pub struct R123;

impl R123 {
    pub fn condition_met(delivery: &LearningDelivery) -> bool {
        has_fund_model(delivery, &[fund_model::APPRENTICESHIPS])
            && is_programme_aim(delivery)
            && employer_reimbursements(delivery) > employer_payments(delivery)
    }
}

impl Rule<Learner> for R123 {
    fn name(&self) -> &'static str {
        "R123"
    }

    fn validate(
        &self,
        learner: &Learner,
        _ctx: &ValidationContext<'_>,
        handler: &mut dyn ValidationErrorHandler,
    ) {
        for delivery in &learner.learning_deliveries {
            if Self::condition_met(delivery) {
                handler.handle(
                    RuleViolation::for_delivery(
                        self.name(),
                        &learner.learn_ref_number,
                        delivery.aim_seq_number,
                    )
                    .with_parameter(AFIN_TYPE, app_fin::PMR)
                    .with_parameter(AFIN_CODE, app_fin::PMR_EMPLOYER_PAYMENT_REIMBURSED)
                    .with_parameter(AFIN_AMOUNT, employer_reimbursements(delivery)),
                );
            }
        }
    }
}
