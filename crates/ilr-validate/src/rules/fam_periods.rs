//! Shared checks for date-bound delivery FAMs (`ACT`, `LSF`).

use chrono::NaiveDate;
use ilr_model::{Learner, LearningDelivery, LearningDeliveryFam};

use crate::properties::{LEARN_DEL_FAM_DATE_FROM, LEARN_DEL_FAM_DATE_TO, LEARN_DEL_FAM_TYPE};
use crate::query::DateRange;
use crate::query::duplicates::later_overlapping;
use crate::query::fams::{applies_to, dated_fams_of_type};
use crate::violation::RuleViolation;

/// Dated FAMs of `fam_type` that overlap an earlier FAM of the same type.
pub(crate) fn overlapping_fams<'a>(
    delivery: &'a LearningDelivery,
    fam_type: &str,
) -> Vec<&'a LearningDeliveryFam> {
    let periods: Vec<(&LearningDeliveryFam, DateRange)> = dated_fams_of_type(delivery, fam_type)
        .into_iter()
        .filter_map(|fam| applies_to(fam).map(|range| (fam, range)))
        .collect();
    later_overlapping(&periods, |(_, range)| *range)
        .into_iter()
        .map(|(fam, _)| *fam)
        .collect()
}

/// Dated FAMs of `fam_type` starting later than the day after every earlier
/// FAM has ended. Early starts and FAMs following an open-ended FAM are left
/// to the overlap checks.
pub(crate) fn fams_after_gap<'a>(
    delivery: &'a LearningDelivery,
    fam_type: &str,
) -> Vec<&'a LearningDeliveryFam> {
    let mut gaps = Vec::new();
    let mut covered_to: Option<NaiveDate> = None;
    for fam in dated_fams_of_type(delivery, fam_type) {
        if let (Some(latest_to), Some(from)) = (covered_to, fam.learn_del_fam_date_from)
            && latest_to.succ_opt().is_some_and(|expected| from > expected)
        {
            gaps.push(fam);
        }
        let Some(to) = fam.learn_del_fam_date_to else {
            break;
        };
        covered_to = Some(covered_to.map_or(to, |latest_to| latest_to.max(to)));
    }
    gaps
}

pub(crate) fn fam_violation(
    rule_name: &'static str,
    learner: &Learner,
    delivery: &LearningDelivery,
    fam: &LearningDeliveryFam,
) -> RuleViolation {
    RuleViolation::for_delivery(
        rule_name,
        &learner.learn_ref_number,
        delivery.aim_seq_number,
    )
    .with_parameter(LEARN_DEL_FAM_TYPE, &fam.learn_del_fam_type)
    .with_parameter(LEARN_DEL_FAM_DATE_FROM, fam.learn_del_fam_date_from)
    .with_parameter(LEARN_DEL_FAM_DATE_TO, fam.learn_del_fam_date_to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{date, dated_fam, delivery};

    #[test]
    fn gaps_are_found_between_consecutive_periods() {
        let mut aim = delivery(1, 1, 36, date(2019, 8, 1));
        aim.learning_delivery_fams = vec![
            dated_fam("ACT", "1", date(2019, 8, 1), Some(date(2019, 9, 30))),
            dated_fam("ACT", "2", date(2019, 10, 1), Some(date(2019, 11, 30))),
            dated_fam("ACT", "1", date(2019, 12, 5), None),
        ];
        let gaps = fams_after_gap(&aim, "ACT");
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].learn_del_fam_date_from, Some(date(2019, 12, 5)));
        assert!(overlapping_fams(&aim, "ACT").is_empty());
    }
}
