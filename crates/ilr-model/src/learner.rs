//! Learner records and their directly attached entities.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::delivery::LearningDelivery;

/// One learner within an ILR message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Learner {
    pub learn_ref_number: String,
    #[serde(default)]
    pub prev_learn_ref_number: Option<String>,
    #[serde(rename = "PrevUKPRN", default)]
    pub prev_ukprn: Option<i64>,
    #[serde(rename = "ULN")]
    pub uln: i64,
    #[serde(default)]
    pub family_name: Option<String>,
    #[serde(default)]
    pub given_names: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub ethnicity: Option<i32>,
    #[serde(default)]
    pub sex: Option<String>,
    #[serde(rename = "LLDDHealthProb", default)]
    pub llddhealth_prob: Option<i32>,
    #[serde(rename = "NINumber", default)]
    pub ni_number: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde(rename = "LearnerFAM", default)]
    pub learner_fams: Vec<LearnerFam>,
    #[serde(rename = "LearnerEmploymentStatus", default)]
    pub learner_employment_statuses: Vec<LearnerEmploymentStatus>,
    #[serde(rename = "LearningDelivery", default)]
    pub learning_deliveries: Vec<LearningDelivery>,
}

/// Learner funding and monitoring attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnerFam {
    #[serde(rename = "LearnFAMType")]
    pub learn_fam_type: String,
    #[serde(rename = "LearnFAMCode")]
    pub learn_fam_code: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LearnerEmploymentStatus {
    pub emp_stat: i32,
    pub date_emp_stat_app: NaiveDate,
    #[serde(default)]
    pub emp_id: Option<i32>,
    #[serde(rename = "EmploymentStatusMonitoring", default)]
    pub employment_status_monitorings: Vec<EmploymentStatusMonitoring>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentStatusMonitoring {
    #[serde(rename = "ESMType")]
    pub esm_type: String,
    #[serde(rename = "ESMCode")]
    pub esm_code: i32,
}
