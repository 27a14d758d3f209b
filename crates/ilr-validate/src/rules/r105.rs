//! R105: contract type periods must not overlap.

use ilr_model::Learner;
use ilr_model::codes::learn_del_fam_type;

use crate::context::ValidationContext;
use crate::handler::ValidationErrorHandler;
use crate::rule::Rule;
use crate::rules::fam_periods::{fam_violation, overlapping_fams};

pub struct R105;

impl Rule<Learner> for R105 {
    fn name(&self) -> &'static str {
        "R105"
    }

    fn validate(
        &self,
        learner: &Learner,
        _ctx: &ValidationContext<'_>,
        handler: &mut dyn ValidationErrorHandler,
    ) {
        for delivery in &learner.learning_deliveries {
            for fam in overlapping_fams(delivery, learn_del_fam_type::ACT) {
                handler.handle(fam_violation(self.name(), learner, delivery, fam));
            }
        }
    }
}
