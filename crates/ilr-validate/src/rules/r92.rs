//! R92: an ESF learner start and assessment aim may only be recorded once per
//! contract.

use ilr_model::codes::{fund_model, learn_aim_ref};
use ilr_model::{Learner, LearningDelivery};

use crate::context::ValidationContext;
use crate::handler::ValidationErrorHandler;
use crate::properties::{CON_REF_NUMBER, LEARN_AIM_REF};
use crate::query::deliveries::has_fund_model;
use crate::query::duplicates::repeats_by;
use crate::rule::Rule;
use crate::util::code_eq;
use crate::violation::RuleViolation;

pub struct R92;

impl R92 {
    fn is_start_and_assessment(delivery: &LearningDelivery) -> bool {
        has_fund_model(delivery, &[fund_model::EUROPEAN_SOCIAL_FUND])
            && code_eq(
                &delivery.learn_aim_ref,
                learn_aim_ref::ESF_LEARNER_START_AND_ASSESSMENT,
            )
    }
}

impl Rule<Learner> for R92 {
    fn name(&self) -> &'static str {
        "R92"
    }

    fn validate(
        &self,
        learner: &Learner,
        _ctx: &ValidationContext<'_>,
        handler: &mut dyn ValidationErrorHandler,
    ) {
        let aims = learner.learning_deliveries.iter().filter(|delivery| {
            Self::is_start_and_assessment(delivery)
                && delivery
                    .con_ref_number
                    .as_deref()
                    .is_some_and(|reference| !reference.trim().is_empty())
        });
        let repeats = repeats_by(aims, |aim| {
            aim.con_ref_number
                .as_deref()
                .map(|reference| reference.trim().to_uppercase())
        });

        for aim in repeats {
            handler.handle(
                RuleViolation::for_delivery(
                    self.name(),
                    &learner.learn_ref_number,
                    aim.aim_seq_number,
                )
                .with_parameter(LEARN_AIM_REF, &aim.learn_aim_ref)
                .with_parameter(CON_REF_NUMBER, &aim.con_ref_number),
            );
        }
    }
}
