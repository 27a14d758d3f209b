//! ILR code sets used by the validation rules.
//!
//! The ILR transmits these as plain integers or short strings, so the model
//! keeps raw values and rules compare against the constants here. Unknown
//! codes are data to be validated, not parse failures.

/// Funding model (`FundModel`).
pub mod fund_model {
    /// Community Learning.
    pub const COMMUNITY_LEARNING: i32 = 10;
    /// 16-19 (excluding Apprenticeships).
    pub const SIXTEEN_TO_NINETEEN: i32 = 25;
    /// Adult skills.
    pub const ADULT_SKILLS: i32 = 35;
    /// Apprenticeships (from 1 May 2017).
    pub const APPRENTICESHIPS: i32 = 36;
    /// European Social Fund.
    pub const EUROPEAN_SOCIAL_FUND: i32 = 70;
    /// Other Adult.
    pub const OTHER_ADULT: i32 = 81;
    /// Other 16-19.
    pub const OTHER_SIXTEEN_TO_NINETEEN: i32 = 82;
    /// Non-funded.
    pub const NOT_FUNDED: i32 = 99;
}

/// Aim type (`AimType`).
pub mod aim_type {
    pub const PROGRAMME_AIM: i32 = 1;
    pub const COMPONENT_AIM_IN_A_PROGRAMME: i32 = 3;
    pub const AIM_NOT_PART_OF_A_PROGRAMME: i32 = 4;
    /// Core aim for 16-19 study programmes.
    pub const CORE_AIM_16_19_EXCLUDING_APPRENTICESHIPS: i32 = 5;
}

/// Programme type (`ProgType`).
pub mod prog_type {
    pub const ADVANCED_LEVEL_APPRENTICESHIP: i32 = 2;
    pub const INTERMEDIATE_LEVEL_APPRENTICESHIP: i32 = 3;
    pub const HIGHER_APPRENTICESHIP_LEVEL_4: i32 = 20;
    pub const HIGHER_APPRENTICESHIP_LEVEL_5: i32 = 21;
    pub const HIGHER_APPRENTICESHIP_LEVEL_6: i32 = 22;
    pub const HIGHER_APPRENTICESHIP_LEVEL_7_PLUS: i32 = 23;
    pub const TRAINEESHIP: i32 = 24;
    pub const APPRENTICESHIP_STANDARD: i32 = 25;
}

/// Completion status (`CompStatus`).
pub mod comp_status {
    pub const CONTINUING: i32 = 1;
    pub const COMPLETED: i32 = 2;
    pub const WITHDRAWN: i32 = 3;
    pub const BREAK_IN_LEARNING: i32 = 6;
}

/// Outcome (`Outcome`).
pub mod outcome {
    pub const ACHIEVED: i32 = 1;
    pub const PARTIAL_ACHIEVEMENT: i32 = 2;
    pub const NO_ACHIEVEMENT: i32 = 3;
    pub const LEARNING_ACTIVITIES_COMPLETE_OUTCOME_UNKNOWN: i32 = 8;
}

/// Learning delivery FAM types (`LearnDelFAMType`).
pub mod learn_del_fam_type {
    /// Apprenticeship contract type.
    pub const ACT: &str = "ACT";
    /// Advanced learner loan.
    pub const ADL: &str = "ADL";
    /// Advanced learner loans bursary funding.
    pub const ALB: &str = "ALB";
    /// Full or co-funding indicator.
    pub const FFI: &str = "FFI";
    /// Household situation.
    pub const HHS: &str = "HHS";
    /// Learning delivery monitoring.
    pub const LDM: &str = "LDM";
    /// Learning support funding.
    pub const LSF: &str = "LSF";
    /// Restart indicator.
    pub const RES: &str = "RES";
    /// Source of funding.
    pub const SOF: &str = "SOF";
}

/// Apprenticeship contract type codes (`ACT`).
pub mod act_code {
    /// Apprenticeship funded through a contract for services with the employer.
    pub const LEVY: &str = "1";
    /// Apprenticeship funded through a contract for services with the ESFA.
    pub const NON_LEVY: &str = "2";
}

/// Learner FAM types (`LearnFAMType`).
pub mod learn_fam_type {
    pub const EHC: &str = "EHC";
    pub const FME: &str = "FME";
    pub const HNS: &str = "HNS";
    pub const LSR: &str = "LSR";
    pub const MCF: &str = "MCF";
    pub const SEN: &str = "SEN";
}

/// Apprenticeship financial record types and codes.
pub mod app_fin {
    /// Total negotiated price.
    pub const TNP: &str = "TNP";
    /// Payment record.
    pub const PMR: &str = "PMR";

    pub const TNP_TRAINING_PRICE: i32 = 1;
    pub const TNP_ASSESSMENT_PRICE: i32 = 2;
    pub const TNP_RESIDUAL_TRAINING_PRICE: i32 = 3;
    pub const TNP_RESIDUAL_ASSESSMENT_PRICE: i32 = 4;

    pub const PMR_TRAINING_PAYMENT: i32 = 1;
    pub const PMR_ASSESSMENT_PAYMENT: i32 = 2;
    pub const PMR_EMPLOYER_PAYMENT_REIMBURSED: i32 = 3;
}

/// Employment status (`EmpStat`).
pub mod emp_stat {
    pub const IN_PAID_EMPLOYMENT: i32 = 10;
    pub const NOT_EMPLOYED_SEEKING: i32 = 11;
    pub const NOT_EMPLOYED_NOT_SEEKING: i32 = 12;
    pub const NOT_KNOWN: i32 = 98;
}

/// Learning aim references with special meaning.
pub mod learn_aim_ref {
    /// ESF learner start and assessment aim.
    pub const ESF_LEARNER_START_AND_ASSESSMENT: &str = "ZESF0001";
}

/// ULN returned when the learner's ULN is not yet known.
pub const TEMPORARY_ULN: i64 = 9_999_999_999;
