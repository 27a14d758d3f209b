//! R68: a financial record type, code and date may only appear once per
//! delivery.

use ilr_model::Learner;

use crate::context::ValidationContext;
use crate::handler::ValidationErrorHandler;
use crate::properties::{AFIN_CODE, AFIN_DATE, AFIN_TYPE};
use crate::query::duplicates::repeats_by;
use crate::rule::Rule;
use crate::violation::RuleViolation;

pub struct R68;

impl Rule<Learner> for R68 {
    fn name(&self) -> &'static str {
        "R68"
    }

    fn validate(
        &self,
        learner: &Learner,
        _ctx: &ValidationContext<'_>,
        handler: &mut dyn ValidationErrorHandler,
    ) {
        for delivery in &learner.learning_deliveries {
            let repeats = repeats_by(&delivery.app_fin_records, |record| {
                (
                    record.afin_type.trim().to_uppercase(),
                    record.afin_code,
                    record.afin_date,
                )
            });
            for record in repeats {
                handler.handle(
                    RuleViolation::for_delivery(
                        self.name(),
                        &learner.learn_ref_number,
                        delivery.aim_seq_number,
                    )
                    .with_parameter(AFIN_TYPE, &record.afin_type)
                    .with_parameter(AFIN_CODE, record.afin_code)
                    .with_parameter(AFIN_DATE, record.afin_date),
                );
            }
        }
    }
}
