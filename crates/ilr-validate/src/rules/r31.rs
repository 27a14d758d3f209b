//! R31: a component aim must belong to a programme aim the learner has.

use ilr_model::{Learner, LearningDelivery};

use crate::context::ValidationContext;
use crate::handler::ValidationErrorHandler;
use crate::properties::{AIM_TYPE, FWORK_CODE, PROG_TYPE, PWAY_CODE, STD_CODE};
use crate::query::ProgrammeKey;
use crate::query::deliveries::{is_component_aim, is_programme_aim};
use crate::rule::Rule;
use crate::violation::RuleViolation;

pub struct R31;

impl R31 {
    pub fn condition_met(
        component_aim: &LearningDelivery,
        deliveries: &[LearningDelivery],
    ) -> bool {
        if !is_component_aim(component_aim) {
            return false;
        }
        let key = ProgrammeKey::of(component_aim);
        !deliveries
            .iter()
            .any(|delivery| is_programme_aim(delivery) && ProgrammeKey::of(delivery) == key)
    }
}

impl Rule<Learner> for R31 {
    fn name(&self) -> &'static str {
        "R31"
    }

    fn validate(
        &self,
        learner: &Learner,
        _ctx: &ValidationContext<'_>,
        handler: &mut dyn ValidationErrorHandler,
    ) {
        for aim in &learner.learning_deliveries {
            if Self::condition_met(aim, &learner.learning_deliveries) {
                handler.handle(
                    RuleViolation::for_delivery(
                        self.name(),
                        &learner.learn_ref_number,
                        aim.aim_seq_number,
                    )
                    .with_parameter(AIM_TYPE, aim.aim_type)
                    .with_parameter(PROG_TYPE, aim.prog_type)
                    .with_parameter(FWORK_CODE, aim.fwork_code)
                    .with_parameter(PWAY_CODE, aim.pway_code)
                    .with_parameter(STD_CODE, aim.std_code),
                );
            }
        }
    }
}
