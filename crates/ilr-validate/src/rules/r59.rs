//! R59: a ULN identifies one learner within a file.

use std::collections::{BTreeMap, BTreeSet};

use ilr_model::codes::TEMPORARY_ULN;
use ilr_model::Message;

use crate::context::ValidationContext;
use crate::handler::ValidationErrorHandler;
use crate::properties::ULN;
use crate::rule::Rule;
use crate::violation::RuleViolation;

pub struct R59;

impl Rule<Message> for R59 {
    fn name(&self) -> &'static str {
        "R59"
    }

    fn validate(
        &self,
        message: &Message,
        _ctx: &ValidationContext<'_>,
        handler: &mut dyn ValidationErrorHandler,
    ) {
        let mut refs_by_uln: BTreeMap<i64, BTreeSet<String>> = BTreeMap::new();
        for learner in &message.learners {
            if learner.uln == TEMPORARY_ULN {
                continue;
            }
            refs_by_uln
                .entry(learner.uln)
                .or_default()
                .insert(learner.learn_ref_number.trim().to_uppercase());
        }

        for learner in &message.learners {
            let shared = refs_by_uln
                .get(&learner.uln)
                .is_some_and(|refs| refs.len() > 1);
            if shared {
                handler.handle(
                    RuleViolation::for_learner(self.name(), &learner.learn_ref_number)
                        .with_parameter(ULN, learner.uln),
                );
            }
        }
    }
}
