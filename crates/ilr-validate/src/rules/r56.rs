//! R56: only one employment status may apply from a given date.

use ilr_model::Learner;

use crate::context::ValidationContext;
use crate::handler::ValidationErrorHandler;
use crate::properties::DATE_EMP_STAT_APP;
use crate::query::duplicates::repeats_by;
use crate::rule::Rule;
use crate::violation::RuleViolation;

pub struct R56;

impl Rule<Learner> for R56 {
    fn name(&self) -> &'static str {
        "R56"
    }

    fn validate(
        &self,
        learner: &Learner,
        _ctx: &ValidationContext<'_>,
        handler: &mut dyn ValidationErrorHandler,
    ) {
        let repeats = repeats_by(&learner.learner_employment_statuses, |status| {
            status.date_emp_stat_app
        });
        for status in repeats {
            handler.handle(
                RuleViolation::for_learner(self.name(), &learner.learn_ref_number)
                    .with_parameter(DATE_EMP_STAT_APP, status.date_emp_stat_app),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{check_learner, date, employment_status, learner};

    #[test]
    fn duplicate_status_dates_fail() {
        let mut subject = learner(Vec::new());
        subject.learner_employment_statuses = vec![
            employment_status(10, date(2019, 8, 1)),
            employment_status(11, date(2019, 8, 1)),
            employment_status(10, date(2019, 9, 1)),
        ];
        let violations = check_learner(&R56, &subject);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].aim_sequence_number, None);
        assert_eq!(
            violations[0].parameter("DateEmpStatApp"),
            Some("01/08/2019")
        );
    }

    #[test]
    fn distinct_dates_pass() {
        let mut subject = learner(Vec::new());
        subject.learner_employment_statuses = vec![
            employment_status(10, date(2019, 8, 1)),
            employment_status(11, date(2019, 9, 1)),
        ];
        assert!(check_learner(&R56, &subject).is_empty());
    }
}
