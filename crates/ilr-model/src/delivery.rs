//! Learning deliveries (aims) with their FAMs and financial records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single learning aim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LearningDelivery {
    pub learn_aim_ref: String,
    pub aim_type: i32,
    pub aim_seq_number: i64,
    pub learn_start_date: NaiveDate,
    #[serde(default)]
    pub orig_learn_start_date: Option<NaiveDate>,
    pub learn_plan_end_date: NaiveDate,
    pub fund_model: i32,
    #[serde(default)]
    pub prog_type: Option<i32>,
    #[serde(default)]
    pub fwork_code: Option<i32>,
    #[serde(default)]
    pub pway_code: Option<i32>,
    #[serde(default)]
    pub std_code: Option<i32>,
    #[serde(rename = "DelLocPostCode", default)]
    pub del_loc_postcode: Option<String>,
    #[serde(default)]
    pub con_ref_number: Option<String>,
    #[serde(rename = "EPAOrgID", default)]
    pub epa_org_id: Option<String>,
    pub comp_status: i32,
    #[serde(default)]
    pub learn_act_end_date: Option<NaiveDate>,
    #[serde(default)]
    pub withdraw_reason: Option<i32>,
    #[serde(default)]
    pub outcome: Option<i32>,
    #[serde(default)]
    pub ach_date: Option<NaiveDate>,
    #[serde(rename = "LearningDeliveryFAM", default)]
    pub learning_delivery_fams: Vec<LearningDeliveryFam>,
    #[serde(rename = "AppFinRecord", default)]
    pub app_fin_records: Vec<AppFinRecord>,
}

/// Learning delivery funding and monitoring attribute.
///
/// Codes are strings in the ILR schema (LDM codes carry leading zeros).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningDeliveryFam {
    #[serde(rename = "LearnDelFAMType")]
    pub learn_del_fam_type: String,
    #[serde(rename = "LearnDelFAMCode")]
    pub learn_del_fam_code: String,
    #[serde(rename = "LearnDelFAMDateFrom", default)]
    pub learn_del_fam_date_from: Option<NaiveDate>,
    #[serde(rename = "LearnDelFAMDateTo", default)]
    pub learn_del_fam_date_to: Option<NaiveDate>,
}

/// Apprenticeship financial record (negotiated price or payment).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppFinRecord {
    #[serde(rename = "AFinType")]
    pub afin_type: String,
    #[serde(rename = "AFinCode")]
    pub afin_code: i32,
    #[serde(rename = "AFinDate")]
    pub afin_date: NaiveDate,
    #[serde(rename = "AFinAmount")]
    pub afin_amount: i32,
}
