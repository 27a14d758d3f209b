//! R102: learning support funding periods must not overlap.

use ilr_model::Learner;
use ilr_model::codes::learn_del_fam_type;

use crate::context::ValidationContext;
use crate::handler::ValidationErrorHandler;
use crate::rules::fam_periods::{fam_violation, overlapping_fams};
use crate::rule::Rule;

pub struct R102;

impl Rule<Learner> for R102 {
    fn name(&self) -> &'static str {
        "R102"
    }

    fn validate(
        &self,
        learner: &Learner,
        _ctx: &ValidationContext<'_>,
        handler: &mut dyn ValidationErrorHandler,
    ) {
        for delivery in &learner.learning_deliveries {
            for fam in overlapping_fams(delivery, learn_del_fam_type::LSF) {
                handler.handle(fam_violation(self.name(), learner, delivery, fam));
            }
        }
    }
}
