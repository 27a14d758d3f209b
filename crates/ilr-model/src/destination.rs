use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Destination and progression record for a learner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LearnerDestinationAndProgression {
    pub learn_ref_number: String,
    #[serde(rename = "ULN")]
    pub uln: i64,
    #[serde(rename = "DPOutcome", default)]
    pub dp_outcomes: Vec<DpOutcome>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DpOutcome {
    pub out_type: String,
    pub out_code: i32,
    pub out_start_date: NaiveDate,
    #[serde(default)]
    pub out_end_date: Option<NaiveDate>,
    pub out_coll_date: NaiveDate,
}
