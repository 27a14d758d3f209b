//! R64: the same component aim may not be delivered twice at once within one
//! programme, unless the later delivery is a restart.

use ilr_model::codes::fund_model;
use ilr_model::{Learner, LearningDelivery};

use crate::context::ValidationContext;
use crate::handler::ValidationErrorHandler;
use crate::properties::{
    AIM_TYPE, FWORK_CODE, LEARN_AIM_REF, LEARN_START_DATE, PROG_TYPE, PWAY_CODE, STD_CODE,
};
use crate::query::ProgrammeKey;
use crate::query::deliveries::{has_fund_model, is_component_aim, is_restart, learning_period};
use crate::query::duplicates::overlapping_pairs;
use crate::rule::Rule;
use crate::util::code_eq;
use crate::violation::RuleViolation;

const FUND_MODELS: [i32; 3] = [
    fund_model::ADULT_SKILLS,
    fund_model::APPRENTICESHIPS,
    fund_model::OTHER_ADULT,
];

pub struct R64;

impl R64 {
    fn is_in_scope(delivery: &LearningDelivery) -> bool {
        is_component_aim(delivery) && has_fund_model(delivery, &FUND_MODELS)
    }

    fn same_aim(first: &LearningDelivery, second: &LearningDelivery) -> bool {
        code_eq(&first.learn_aim_ref, &second.learn_aim_ref)
            && ProgrammeKey::of(first) == ProgrammeKey::of(second)
    }
}

impl Rule<Learner> for R64 {
    fn name(&self) -> &'static str {
        "R64"
    }

    fn validate(
        &self,
        learner: &Learner,
        _ctx: &ValidationContext<'_>,
        handler: &mut dyn ValidationErrorHandler,
    ) {
        let components: Vec<&LearningDelivery> = learner
            .learning_deliveries
            .iter()
            .filter(|delivery| Self::is_in_scope(delivery))
            .collect();

        let mut reported: Vec<i64> = Vec::new();
        for (earlier, later) in overlapping_pairs(&components, |aim| learning_period(aim)) {
            if !Self::same_aim(earlier, later) || is_restart(later) {
                continue;
            }
            if reported.contains(&later.aim_seq_number) {
                continue;
            }
            reported.push(later.aim_seq_number);

            handler.handle(
                RuleViolation::for_delivery(
                    self.name(),
                    &learner.learn_ref_number,
                    later.aim_seq_number,
                )
                .with_parameter(AIM_TYPE, later.aim_type)
                .with_parameter(LEARN_AIM_REF, &later.learn_aim_ref)
                .with_parameter(LEARN_START_DATE, later.learn_start_date)
                .with_parameter(PROG_TYPE, later.prog_type)
                .with_parameter(FWORK_CODE, later.fwork_code)
                .with_parameter(PWAY_CODE, later.pway_code)
                .with_parameter(STD_CODE, later.std_code),
            );
        }
    }
}
