//! Learning delivery FAM lookups.

use ilr_model::{LearningDelivery, LearningDeliveryFam};

use super::dates::DateRange;
use crate::util::code_eq;

pub fn has_fam_type(delivery: &LearningDelivery, fam_type: &str) -> bool {
    fams_of_type(delivery, fam_type).next().is_some()
}

pub fn has_fam(delivery: &LearningDelivery, fam_type: &str, fam_code: &str) -> bool {
    fams_of_type(delivery, fam_type).any(|fam| code_eq(&fam.learn_del_fam_code, fam_code))
}

pub fn fams_of_type<'a, 'q>(
    delivery: &'a LearningDelivery,
    fam_type: &'q str,
) -> impl Iterator<Item = &'a LearningDeliveryFam> {
    delivery
        .learning_delivery_fams
        .iter()
        .filter(move |fam| code_eq(&fam.learn_del_fam_type, fam_type))
}

/// FAMs of `fam_type` that carry a date-from, ordered by date-from.
pub fn dated_fams_of_type<'a>(
    delivery: &'a LearningDelivery,
    fam_type: &str,
) -> Vec<&'a LearningDeliveryFam> {
    let mut fams: Vec<_> = fams_of_type(delivery, fam_type)
        .filter(|fam| fam.learn_del_fam_date_from.is_some())
        .collect();
    fams.sort_by_key(|fam| fam.learn_del_fam_date_from);
    fams
}

/// The FAM of `fam_type` with the latest date-from.
pub fn latest_fam_of_type<'a>(
    delivery: &'a LearningDelivery,
    fam_type: &str,
) -> Option<&'a LearningDeliveryFam> {
    dated_fams_of_type(delivery, fam_type).last().copied()
}

/// Date range a FAM applies to, when it is date bound.
pub fn applies_to(fam: &LearningDeliveryFam) -> Option<DateRange> {
    fam.learn_del_fam_date_from
        .map(|from| DateRange::new(from, fam.learn_del_fam_date_to))
}
