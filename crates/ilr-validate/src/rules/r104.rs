//! R104: contract type periods must follow on from each other without gaps.

use ilr_model::Learner;
use ilr_model::codes::learn_del_fam_type;

use crate::context::ValidationContext;
use crate::handler::ValidationErrorHandler;
use crate::rule::Rule;
use crate::rules::fam_periods::{fam_violation, fams_after_gap};

pub struct R104;

impl Rule<Learner> for R104 {
    fn name(&self) -> &'static str {
        "R104"
    }

    fn validate(
        &self,
        learner: &Learner,
        _ctx: &ValidationContext<'_>,
        handler: &mut dyn ValidationErrorHandler,
    ) {
        for delivery in &learner.learning_deliveries {
            for fam in fams_after_gap(delivery, learn_del_fam_type::ACT) {
                handler.handle(fam_violation(self.name(), learner, delivery, fam));
            }
        }
    }
}
