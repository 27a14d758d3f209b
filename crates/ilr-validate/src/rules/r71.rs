//! R71: a framework component aim must be valid for its framework in LARS.
//!
//! Skipped when no LARS data is supplied.

use ilr_model::codes::fund_model;
use ilr_model::{FrameworkKey, LarsData, Learner, LearningDelivery};

use crate::context::ValidationContext;
use crate::handler::ValidationErrorHandler;
use crate::properties::{FWORK_CODE, LEARN_AIM_REF, LEARN_START_DATE, PROG_TYPE, PWAY_CODE};
use crate::query::deliveries::{has_fund_model, is_apprenticeship_standard, is_component_aim};
use crate::rule::Rule;
use crate::violation::RuleViolation;

const FUND_MODELS: [i32; 3] = [
    fund_model::ADULT_SKILLS,
    fund_model::APPRENTICESHIPS,
    fund_model::OTHER_ADULT,
];

pub struct R71;

impl R71 {
    fn framework_key(delivery: &LearningDelivery) -> Option<FrameworkKey> {
        if !is_component_aim(delivery)
            || !has_fund_model(delivery, &FUND_MODELS)
            || is_apprenticeship_standard(delivery)
        {
            return None;
        }
        Some(FrameworkKey::new(
            &delivery.learn_aim_ref,
            delivery.prog_type?,
            delivery.fwork_code?,
            delivery.pway_code?,
        ))
    }

    /// The aim is checked on its original start date when it has one.
    pub fn condition_met(delivery: &LearningDelivery, lars: &LarsData) -> bool {
        let Some(key) = Self::framework_key(delivery) else {
            return false;
        };
        let start = delivery
            .orig_learn_start_date
            .unwrap_or(delivery.learn_start_date);
        !lars.has_current_framework_aim(&key, start)
    }
}

impl Rule<Learner> for R71 {
    fn name(&self) -> &'static str {
        "R71"
    }

    fn validate(
        &self,
        learner: &Learner,
        ctx: &ValidationContext<'_>,
        handler: &mut dyn ValidationErrorHandler,
    ) {
        let Some(lars) = ctx.lars else {
            return;
        };

        for aim in &learner.learning_deliveries {
            if Self::condition_met(aim, lars) {
                handler.handle(
                    RuleViolation::for_delivery(
                        self.name(),
                        &learner.learn_ref_number,
                        aim.aim_seq_number,
                    )
                    .with_parameter(LEARN_AIM_REF, &aim.learn_aim_ref)
                    .with_parameter(PROG_TYPE, aim.prog_type)
                    .with_parameter(FWORK_CODE, aim.fwork_code)
                    .with_parameter(PWAY_CODE, aim.pway_code)
                    .with_parameter(LEARN_START_DATE, aim.learn_start_date),
                );
            }
        }
    }
}
