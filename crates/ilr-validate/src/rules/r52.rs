//! R52: an undated delivery FAM type and code may only be recorded once.

use ilr_model::Learner;

use crate::context::ValidationContext;
use crate::handler::ValidationErrorHandler;
use crate::properties::{LEARN_DEL_FAM_CODE, LEARN_DEL_FAM_TYPE};
use crate::query::duplicates::repeats_by;
use crate::rule::Rule;
use crate::violation::RuleViolation;

pub struct R52;

impl Rule<Learner> for R52 {
    fn name(&self) -> &'static str {
        "R52"
    }

    fn validate(
        &self,
        learner: &Learner,
        _ctx: &ValidationContext<'_>,
        handler: &mut dyn ValidationErrorHandler,
    ) {
        for delivery in &learner.learning_deliveries {
            let undated = delivery
                .learning_delivery_fams
                .iter()
                .filter(|fam| fam.learn_del_fam_date_from.is_none());
            let repeats = repeats_by(undated, |fam| {
                (
                    fam.learn_del_fam_type.trim().to_uppercase(),
                    fam.learn_del_fam_code.trim().to_uppercase(),
                )
            });

            for fam in repeats {
                handler.handle(
                    RuleViolation::for_delivery(
                        self.name(),
                        &learner.learn_ref_number,
                        delivery.aim_seq_number,
                    )
                    .with_parameter(LEARN_DEL_FAM_TYPE, &fam.learn_del_fam_type)
                    .with_parameter(LEARN_DEL_FAM_CODE, &fam.learn_del_fam_code),
                );
            }
        }
    }
}
