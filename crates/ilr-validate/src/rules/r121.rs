//! R121: employer payments net of reimbursements cannot exceed the
//! negotiated price.

use ilr_model::codes::{app_fin, fund_model};
use ilr_model::{Learner, LearningDelivery};

use crate::context::ValidationContext;
use crate::handler::ValidationErrorHandler;
use crate::properties::{AFIN_AMOUNT, AFIN_TYPE, AIM_TYPE, FUND_MODEL};
use crate::query::deliveries::{has_fund_model, is_programme_aim};
use crate::query::financial::{negotiated_price, net_employer_payments};
use crate::rule::Rule;
use crate::util::code_eq;
use crate::violation::RuleViolation;

pub struct R121;

impl R121 {
    /// Net payments, when they exceed the negotiated price.
    pub fn excess_payments(delivery: &LearningDelivery) -> Option<i64> {
        if !has_fund_model(delivery, &[fund_model::APPRENTICESHIPS])
            || !is_programme_aim(delivery)
        {
            return None;
        }
        let has_price = delivery
            .app_fin_records
            .iter()
            .any(|record| code_eq(&record.afin_type, app_fin::TNP));
        if !has_price {
            return None;
        }
        let net = net_employer_payments(delivery);
        (net > negotiated_price(delivery)).then_some(net)
    }
}

impl Rule<Learner> for R121 {
    fn name(&self) -> &'static str {
        "R121"
    }

    fn validate(
        &self,
        learner: &Learner,
        _ctx: &ValidationContext<'_>,
        handler: &mut dyn ValidationErrorHandler,
    ) {
        for delivery in &learner.learning_deliveries {
            if let Some(net) = Self::excess_payments(delivery) {
                handler.handle(
                    RuleViolation::for_delivery(
                        self.name(),
                        &learner.learn_ref_number,
                        delivery.aim_seq_number,
                    )
                    .with_parameter(AFIN_TYPE, app_fin::PMR)
                    .with_parameter(AFIN_AMOUNT, net)
                    .with_parameter(AIM_TYPE, delivery.aim_type)
                    .with_parameter(FUND_MODEL, delivery.fund_model),
                );
            }
        }
    }
}
