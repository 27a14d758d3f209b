//! Builders shared by the rule unit tests.

use chrono::{Months, NaiveDate};
use ilr_model::{
    AppFinRecord, DpOutcome, LarsData, Learner, LearnerDestinationAndProgression,
    LearnerEmploymentStatus, LearnerFam, LearningDelivery, LearningDeliveryFam, Message,
    ValidationOptions,
};

use crate::context::ValidationContext;
use crate::handler::CollectingHandler;
use crate::rule::Rule;
use crate::violation::RuleViolation;

pub(crate) const LEARN_REF: &str = "LR001";
pub(crate) const ULN: i64 = 1_000_000_001;

pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub(crate) fn delivery(
    aim_seq_number: i64,
    aim_type: i32,
    fund_model: i32,
    learn_start_date: NaiveDate,
) -> LearningDelivery {
    LearningDelivery {
        learn_aim_ref: "ZPROG001".to_string(),
        aim_type,
        aim_seq_number,
        learn_start_date,
        orig_learn_start_date: None,
        learn_plan_end_date: learn_start_date + Months::new(12),
        fund_model,
        prog_type: None,
        fwork_code: None,
        pway_code: None,
        std_code: None,
        del_loc_postcode: None,
        con_ref_number: None,
        epa_org_id: None,
        comp_status: 1,
        learn_act_end_date: None,
        withdraw_reason: None,
        outcome: None,
        ach_date: None,
        learning_delivery_fams: Vec::new(),
        app_fin_records: Vec::new(),
    }
}

pub(crate) fn framework(
    mut delivery: LearningDelivery,
    prog_type: i32,
    fwork_code: i32,
    pway_code: i32,
) -> LearningDelivery {
    delivery.prog_type = Some(prog_type);
    delivery.fwork_code = Some(fwork_code);
    delivery.pway_code = Some(pway_code);
    delivery
}

pub(crate) fn standard(mut delivery: LearningDelivery, std_code: i32) -> LearningDelivery {
    delivery.prog_type = Some(25);
    delivery.std_code = Some(std_code);
    delivery
}

pub(crate) fn closed(mut delivery: LearningDelivery, end: NaiveDate) -> LearningDelivery {
    delivery.learn_act_end_date = Some(end);
    delivery.comp_status = 2;
    delivery
}

pub(crate) fn learner(learning_deliveries: Vec<LearningDelivery>) -> Learner {
    Learner {
        learn_ref_number: LEARN_REF.to_string(),
        uln: ULN,
        learning_deliveries,
        ..Learner::default()
    }
}

pub(crate) fn fam(fam_type: &str, fam_code: &str) -> LearningDeliveryFam {
    LearningDeliveryFam {
        learn_del_fam_type: fam_type.to_string(),
        learn_del_fam_code: fam_code.to_string(),
        learn_del_fam_date_from: None,
        learn_del_fam_date_to: None,
    }
}

pub(crate) fn dated_fam(
    fam_type: &str,
    fam_code: &str,
    from: NaiveDate,
    to: Option<NaiveDate>,
) -> LearningDeliveryFam {
    LearningDeliveryFam {
        learn_del_fam_date_from: Some(from),
        learn_del_fam_date_to: to,
        ..fam(fam_type, fam_code)
    }
}

pub(crate) fn learner_fam(fam_type: &str, fam_code: i32) -> LearnerFam {
    LearnerFam {
        learn_fam_type: fam_type.to_string(),
        learn_fam_code: fam_code,
    }
}

pub(crate) fn app_fin_record(
    afin_type: &str,
    afin_code: i32,
    afin_date: NaiveDate,
    afin_amount: i32,
) -> AppFinRecord {
    AppFinRecord {
        afin_type: afin_type.to_string(),
        afin_code,
        afin_date,
        afin_amount,
    }
}

pub(crate) fn employment_status(
    emp_stat: i32,
    date_emp_stat_app: NaiveDate,
) -> LearnerEmploymentStatus {
    LearnerEmploymentStatus {
        emp_stat,
        date_emp_stat_app,
        emp_id: None,
        employment_status_monitorings: Vec::new(),
    }
}

pub(crate) fn destination(
    uln: i64,
    dp_outcomes: Vec<DpOutcome>,
) -> LearnerDestinationAndProgression {
    LearnerDestinationAndProgression {
        learn_ref_number: LEARN_REF.to_string(),
        uln,
        dp_outcomes,
    }
}

pub(crate) fn outcome(
    out_type: &str,
    out_code: i32,
    out_start_date: NaiveDate,
    out_coll_date: NaiveDate,
) -> DpOutcome {
    DpOutcome {
        out_type: out_type.to_string(),
        out_code,
        out_start_date,
        out_end_date: None,
        out_coll_date,
    }
}

/// Options pinned to a fixed reference date so time-window rules are stable.
pub(crate) fn options() -> ValidationOptions {
    ValidationOptions::new().with_reference_date(date(2020, 10, 1))
}

/// Run a rule over `item`, building the context from `message`.
pub(crate) fn run_rule<T: ?Sized>(
    rule: &dyn Rule<T>,
    item: &T,
    message: &Message,
    options: &ValidationOptions,
    lars: Option<&LarsData>,
) -> Vec<RuleViolation> {
    let mut ctx = ValidationContext::new(message, options);
    if let Some(lars) = lars {
        ctx = ctx.with_lars(lars);
    }
    let mut handler = CollectingHandler::new();
    rule.validate(item, &ctx, &mut handler);
    handler.into_violations()
}

/// Run a learner rule with the learner as the only record in the message.
pub(crate) fn check_learner(rule: &dyn Rule<Learner>, learner: &Learner) -> Vec<RuleViolation> {
    let message = Message {
        learners: vec![learner.clone()],
        ..Message::default()
    };
    run_rule(rule, learner, &message, &options(), None)
}

/// Parameter values of a violation as `(name, value)` pairs.
pub(crate) fn parameters(violation: &RuleViolation) -> Vec<(&'static str, &str)> {
    violation
        .parameters
        .iter()
        .map(|parameter| (parameter.property_name, parameter.value.as_str()))
        .collect()
}
