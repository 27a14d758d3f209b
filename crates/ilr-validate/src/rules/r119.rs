//! R119: the first training price of an apprenticeship programme must be
//! dated on the learning start date.

use ilr_model::codes::{app_fin, fund_model};
use ilr_model::{Learner, LearningDelivery};

use crate::context::ValidationContext;
use crate::handler::ValidationErrorHandler;
use crate::properties::{AFIN_CODE, AFIN_DATE, AFIN_TYPE, LEARN_START_DATE};
use crate::query::deliveries::{has_fund_model, is_programme_aim, is_restart};
use crate::query::financial::earliest_record;
use crate::rule::Rule;
use crate::violation::RuleViolation;

pub struct R119;

impl R119 {
    fn is_in_scope(delivery: &LearningDelivery) -> bool {
        has_fund_model(delivery, &[fund_model::APPRENTICESHIPS])
            && is_programme_aim(delivery)
            && !is_restart(delivery)
    }
}

impl Rule<Learner> for R119 {
    fn name(&self) -> &'static str {
        "R119"
    }

    fn validate(
        &self,
        learner: &Learner,
        _ctx: &ValidationContext<'_>,
        handler: &mut dyn ValidationErrorHandler,
    ) {
        for delivery in learner
            .learning_deliveries
            .iter()
            .filter(|d| Self::is_in_scope(d))
        {
            let Some(record) =
                earliest_record(delivery, app_fin::TNP, app_fin::TNP_TRAINING_PRICE)
            else {
                continue;
            };
            if record.afin_date == delivery.learn_start_date {
                continue;
            }
            handler.handle(
                RuleViolation::for_delivery(
                    self.name(),
                    &learner.learn_ref_number,
                    delivery.aim_seq_number,
                )
                .with_parameter(AFIN_TYPE, &record.afin_type)
                .with_parameter(AFIN_CODE, record.afin_code)
                .with_parameter(AFIN_DATE, record.afin_date)
                .with_parameter(LEARN_START_DATE, delivery.learn_start_date),
            );
        }
    }
}
