//! Apprenticeship financial record sums and lookups.

use ilr_model::codes::app_fin;
use ilr_model::{AppFinRecord, LearningDelivery};

use crate::util::code_eq;

/// Records of `afin_type` whose code is in `codes`.
pub fn records<'a, 'q>(
    delivery: &'a LearningDelivery,
    afin_type: &'q str,
    codes: &'q [i32],
) -> impl Iterator<Item = &'a AppFinRecord> {
    delivery.app_fin_records.iter().filter(move |record| {
        code_eq(&record.afin_type, afin_type) && codes.contains(&record.afin_code)
    })
}

pub fn has_record(delivery: &LearningDelivery, afin_type: &str, codes: &[i32]) -> bool {
    records(delivery, afin_type, codes).next().is_some()
}

pub fn total_amount<'a>(records: impl IntoIterator<Item = &'a AppFinRecord>) -> i64 {
    records
        .into_iter()
        .map(|record| i64::from(record.afin_amount))
        .sum()
}

/// Record with the latest date for a type and code.
pub fn latest_record<'a>(
    delivery: &'a LearningDelivery,
    afin_type: &str,
    code: i32,
) -> Option<&'a AppFinRecord> {
    records(delivery, afin_type, std::slice::from_ref(&code))
        .max_by_key(|record| record.afin_date)
}

pub fn earliest_record<'a>(
    delivery: &'a LearningDelivery,
    afin_type: &str,
    code: i32,
) -> Option<&'a AppFinRecord> {
    records(delivery, afin_type, std::slice::from_ref(&code))
        .min_by_key(|record| record.afin_date)
}

/// Current negotiated price: the latest TNP amount for each price code.
pub fn negotiated_price(delivery: &LearningDelivery) -> i64 {
    [
        app_fin::TNP_TRAINING_PRICE,
        app_fin::TNP_ASSESSMENT_PRICE,
        app_fin::TNP_RESIDUAL_TRAINING_PRICE,
        app_fin::TNP_RESIDUAL_ASSESSMENT_PRICE,
    ]
    .into_iter()
    .filter_map(|code| latest_record(delivery, app_fin::TNP, code))
    .map(|record| i64::from(record.afin_amount))
    .sum()
}

/// Training and assessment payments made by the employer.
pub fn employer_payments(delivery: &LearningDelivery) -> i64 {
    total_amount(records(
        delivery,
        app_fin::PMR,
        &[app_fin::PMR_TRAINING_PAYMENT, app_fin::PMR_ASSESSMENT_PAYMENT],
    ))
}

/// Employer payments the provider has reimbursed.
pub fn employer_reimbursements(delivery: &LearningDelivery) -> i64 {
    total_amount(records(
        delivery,
        app_fin::PMR,
        &[app_fin::PMR_EMPLOYER_PAYMENT_REIMBURSED],
    ))
}

pub fn net_employer_payments(delivery: &LearningDelivery) -> i64 {
    employer_payments(delivery) - employer_reimbursements(delivery)
}
