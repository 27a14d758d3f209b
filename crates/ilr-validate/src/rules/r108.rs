//! R108: a destination collected after learning ended should be recorded
//! once two months have passed.

use chrono::NaiveDate;
use ilr_model::{Learner, LearnerDestinationAndProgression};

use crate::context::ValidationContext;
use crate::handler::ValidationErrorHandler;
use crate::properties::{LEARN_ACT_END_DATE, OUT_COLL_DATE};
use crate::query::dates::{latest, months_before};
use crate::query::deliveries::latest_end_date;
use crate::rule::Rule;
use crate::rules::r107::R107;
use crate::violation::RuleViolation;

const COLLECTION_WINDOW_MONTHS: u32 = 2;

pub struct R108;

impl R108 {
    pub fn condition_met(
        latest_end: NaiveDate,
        reference_date: NaiveDate,
        destination: &LearnerDestinationAndProgression,
    ) -> bool {
        let Some(cutoff) = months_before(reference_date, COLLECTION_WINDOW_MONTHS) else {
            return false;
        };
        latest_end <= cutoff
            && !destination
                .dp_outcomes
                .iter()
                .any(|outcome| outcome.out_coll_date >= latest_end)
    }
}

impl Rule<Learner> for R108 {
    fn name(&self) -> &'static str {
        "R108"
    }

    fn validate(
        &self,
        learner: &Learner,
        ctx: &ValidationContext<'_>,
        handler: &mut dyn ValidationErrorHandler,
    ) {
        if !R107::has_finished_in_scope_learning(learner) {
            return;
        }
        let Some(destination) = ctx.destination_and_progression(&learner.learn_ref_number) else {
            return;
        };
        let Some(latest_end) = latest_end_date(&learner.learning_deliveries) else {
            return;
        };

        if Self::condition_met(latest_end, ctx.reference_date, destination) {
            let collections = destination
                .dp_outcomes
                .iter()
                .map(|outcome| outcome.out_coll_date);
            let latest_collection = latest(collections);
            handler.handle(
                RuleViolation::for_learner(self.name(), &learner.learn_ref_number)
                    .with_parameter(LEARN_ACT_END_DATE, latest_end)
                    .with_parameter(OUT_COLL_DATE, latest_collection),
            );
        }
    }
}
