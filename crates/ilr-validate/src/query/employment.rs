use chrono::NaiveDate;
use ilr_model::LearnerEmploymentStatus;

/// Employment status in effect on `date`: the latest status applying on or
/// before it.
pub fn status_on(
    statuses: &[LearnerEmploymentStatus],
    date: NaiveDate,
) -> Option<&LearnerEmploymentStatus> {
    statuses
        .iter()
        .filter(|status| status.date_emp_stat_app <= date)
        .max_by_key(|status| status.date_emp_stat_app)
}
