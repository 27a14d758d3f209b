//! Learning delivery predicates.

use chrono::NaiveDate;
use ilr_model::LearningDelivery;
use ilr_model::codes::{aim_type, learn_del_fam_type, prog_type};

use super::dates::{DateRange, latest};
use super::fams::has_fam_type;

/// Programme a delivery belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgrammeKey {
    pub prog_type: Option<i32>,
    pub fwork_code: Option<i32>,
    pub pway_code: Option<i32>,
    pub std_code: Option<i32>,
}

impl ProgrammeKey {
    pub fn of(delivery: &LearningDelivery) -> Self {
        Self {
            prog_type: delivery.prog_type,
            fwork_code: delivery.fwork_code,
            pway_code: delivery.pway_code,
            std_code: delivery.std_code,
        }
    }
}

pub fn is_programme_aim(delivery: &LearningDelivery) -> bool {
    delivery.aim_type == aim_type::PROGRAMME_AIM
}

pub fn is_component_aim(delivery: &LearningDelivery) -> bool {
    delivery.aim_type == aim_type::COMPONENT_AIM_IN_A_PROGRAMME
}

pub fn is_core_aim(delivery: &LearningDelivery) -> bool {
    delivery.aim_type == aim_type::CORE_AIM_16_19_EXCLUDING_APPRENTICESHIPS
}

pub fn has_fund_model(delivery: &LearningDelivery, fund_models: &[i32]) -> bool {
    fund_models.contains(&delivery.fund_model)
}

pub fn is_apprenticeship_standard(delivery: &LearningDelivery) -> bool {
    delivery.prog_type == Some(prog_type::APPRENTICESHIP_STANDARD)
}

pub fn is_traineeship(delivery: &LearningDelivery) -> bool {
    delivery.prog_type == Some(prog_type::TRAINEESHIP)
}

/// A restart carries the `RES` FAM.
pub fn is_restart(delivery: &LearningDelivery) -> bool {
    has_fam_type(delivery, learn_del_fam_type::RES)
}

pub fn is_closed(delivery: &LearningDelivery) -> bool {
    delivery.learn_act_end_date.is_some()
}

/// Start date to actual end date, open while the aim continues.
pub fn learning_period(delivery: &LearningDelivery) -> DateRange {
    DateRange::new(delivery.learn_start_date, delivery.learn_act_end_date)
}

/// True when there is at least one delivery and every delivery has ended.
pub fn all_closed<'a>(deliveries: impl IntoIterator<Item = &'a LearningDelivery>) -> bool {
    let mut any = false;
    for delivery in deliveries {
        if !is_closed(delivery) {
            return false;
        }
        any = true;
    }
    any
}

pub fn latest_end_date<'a>(
    deliveries: impl IntoIterator<Item = &'a LearningDelivery>,
) -> Option<NaiveDate> {
    latest(
        deliveries
            .into_iter()
            .filter_map(|delivery| delivery.learn_act_end_date),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{date, delivery, fam};

    #[test]
    fn all_closed_requires_deliveries() {
        assert!(!all_closed(std::iter::empty()));

        let mut first = delivery(1, 4, 25, date(2019, 8, 1));
        let mut second = delivery(2, 4, 25, date(2019, 9, 1));
        first.learn_act_end_date = Some(date(2020, 1, 31));
        assert!(!all_closed([&first, &second]));

        second.learn_act_end_date = Some(date(2020, 3, 31));
        assert!(all_closed([&first, &second]));
        assert_eq!(latest_end_date([&first, &second]), Some(date(2020, 3, 31)));
    }

    #[test]
    fn restart_detection() {
        let mut aim = delivery(1, 1, 36, date(2019, 8, 1));
        assert!(!is_restart(&aim));
        aim.learning_delivery_fams.push(fam("RES", "1"));
        assert!(is_restart(&aim));
    }

    #[test]
    fn programme_key_distinguishes_pathways() {
        let mut first = delivery(1, 1, 35, date(2019, 8, 1));
        first.prog_type = Some(3);
        first.fwork_code = Some(420);
        first.pway_code = Some(1);
        let mut second = first.clone();
        assert_eq!(ProgrammeKey::of(&first), ProgrammeKey::of(&second));
        second.pway_code = Some(2);
        assert_ne!(ProgrammeKey::of(&first), ProgrammeKey::of(&second));
    }
}
