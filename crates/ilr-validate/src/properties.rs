//! ILR property names used as error parameter names.

pub const AIM_TYPE: &str = "AimType";
pub const AFIN_AMOUNT: &str = "AFinAmount";
pub const AFIN_CODE: &str = "AFinCode";
pub const AFIN_DATE: &str = "AFinDate";
pub const AFIN_TYPE: &str = "AFinType";
pub const COMP_STATUS: &str = "CompStatus";
pub const CON_REF_NUMBER: &str = "ConRefNumber";
pub const DATE_EMP_STAT_APP: &str = "DateEmpStatApp";
pub const EMP_STAT: &str = "EmpStat";
pub const FUND_MODEL: &str = "FundModel";
pub const FWORK_CODE: &str = "FworkCode";
pub const LEARN_ACT_END_DATE: &str = "LearnActEndDate";
pub const LEARN_AIM_REF: &str = "LearnAimRef";
pub const LEARN_DEL_FAM_CODE: &str = "LearnDelFAMCode";
pub const LEARN_DEL_FAM_DATE_FROM: &str = "LearnDelFAMDateFrom";
pub const LEARN_DEL_FAM_DATE_TO: &str = "LearnDelFAMDateTo";
pub const LEARN_DEL_FAM_TYPE: &str = "LearnDelFAMType";
pub const LEARN_FAM_CODE: &str = "LearnFAMCode";
pub const LEARN_FAM_TYPE: &str = "LearnFAMType";
pub const LEARN_START_DATE: &str = "LearnStartDate";
pub const OUT_CODE: &str = "OutCode";
pub const OUT_COLL_DATE: &str = "OutCollDate";
pub const OUT_START_DATE: &str = "OutStartDate";
pub const OUT_TYPE: &str = "OutType";
pub const PROG_TYPE: &str = "ProgType";
pub const PWAY_CODE: &str = "PwayCode";
pub const STD_CODE: &str = "StdCode";
pub const ULN: &str = "ULN";
