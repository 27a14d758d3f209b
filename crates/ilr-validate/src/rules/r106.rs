//! R106: a learner FAM type and code may only be recorded once.

use ilr_model::Learner;

use crate::context::ValidationContext;
use crate::handler::ValidationErrorHandler;
use crate::properties::{LEARN_FAM_CODE, LEARN_FAM_TYPE};
use crate::query::duplicates::repeats_by;
use crate::rule::Rule;
use crate::violation::RuleViolation;

pub struct R106;

impl Rule<Learner> for R106 {
    fn name(&self) -> &'static str {
        "R106"
    }

    fn validate(
        &self,
        learner: &Learner,
        _ctx: &ValidationContext<'_>,
        handler: &mut dyn ValidationErrorHandler,
    ) {
        let repeats = repeats_by(&learner.learner_fams, |fam| {
            (fam.learn_fam_type.trim().to_uppercase(), fam.learn_fam_code)
        });
        for fam in repeats {
            handler.handle(
                RuleViolation::for_learner(self.name(), &learner.learn_ref_number)
                    .with_parameter(LEARN_FAM_TYPE, &fam.learn_fam_type)
                    .with_parameter(LEARN_FAM_CODE, fam.learn_fam_code),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{check_learner, learner, learner_fam};

    #[test]
    fn duplicate_learner_fam_fails() {
        let mut subject = learner(Vec::new());
        subject.learner_fams = vec![
            learner_fam("LSR", 55),
            learner_fam("LSR", 56),
            learner_fam("lsr", 55),
        ];
        let violations = check_learner(&R106, &subject);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].parameter("LearnFAMType"), Some("lsr"));
        assert_eq!(violations[0].parameter("LearnFAMCode"), Some("55"));
    }
}
