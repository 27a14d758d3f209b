//! R115: a destination outcome type, code and start date may only be
//! recorded once.

use ilr_model::LearnerDestinationAndProgression;

use crate::context::ValidationContext;
use crate::handler::ValidationErrorHandler;
use crate::properties::{OUT_CODE, OUT_START_DATE, OUT_TYPE};
use crate::query::duplicates::repeats_by;
use crate::rule::Rule;
use crate::violation::RuleViolation;

pub struct R115;

impl Rule<LearnerDestinationAndProgression> for R115 {
    fn name(&self) -> &'static str {
        "R115"
    }

    fn validate(
        &self,
        destination: &LearnerDestinationAndProgression,
        _ctx: &ValidationContext<'_>,
        handler: &mut dyn ValidationErrorHandler,
    ) {
        let repeats = repeats_by(&destination.dp_outcomes, |outcome| {
            (
                outcome.out_type.trim().to_uppercase(),
                outcome.out_code,
                outcome.out_start_date,
            )
        });
        for outcome in repeats {
            handler.handle(
                RuleViolation::for_learner(self.name(), &destination.learn_ref_number)
                    .with_parameter(OUT_TYPE, &outcome.out_type)
                    .with_parameter(OUT_CODE, outcome.out_code)
                    .with_parameter(OUT_START_DATE, outcome.out_start_date),
            );
        }
    }
}
