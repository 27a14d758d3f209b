//! R90: a component aim cannot continue after its programme has ended.

use ilr_model::{Learner, LearningDelivery};

use crate::context::ValidationContext;
use crate::handler::ValidationErrorHandler;
use crate::properties::{AIM_TYPE, FWORK_CODE, LEARN_ACT_END_DATE, PROG_TYPE, PWAY_CODE, STD_CODE};
use crate::query::ProgrammeKey;
use crate::query::deliveries::{
    all_closed, is_closed, is_component_aim, is_programme_aim, latest_end_date,
};
use crate::rule::Rule;
use crate::violation::RuleViolation;

pub struct R90;

impl R90 {
    fn programme_aims<'a>(
        component: &LearningDelivery,
        deliveries: &'a [LearningDelivery],
    ) -> Vec<&'a LearningDelivery> {
        let key = ProgrammeKey::of(component);
        deliveries
            .iter()
            .filter(|delivery| is_programme_aim(delivery) && ProgrammeKey::of(delivery) == key)
            .collect()
    }
}

impl Rule<Learner> for R90 {
    fn name(&self) -> &'static str {
        "R90"
    }

    fn validate(
        &self,
        learner: &Learner,
        _ctx: &ValidationContext<'_>,
        handler: &mut dyn ValidationErrorHandler,
    ) {
        let open_components = learner
            .learning_deliveries
            .iter()
            .filter(|delivery| is_component_aim(delivery) && !is_closed(delivery));

        for component in open_components {
            let programmes = Self::programme_aims(component, &learner.learning_deliveries);
            if !all_closed(programmes.iter().copied()) {
                continue;
            }
            handler.handle(
                RuleViolation::for_delivery(
                    self.name(),
                    &learner.learn_ref_number,
                    component.aim_seq_number,
                )
                .with_parameter(AIM_TYPE, component.aim_type)
                .with_parameter(
                    LEARN_ACT_END_DATE,
                    latest_end_date(programmes.iter().copied()),
                )
                .with_parameter(PROG_TYPE, component.prog_type)
                .with_parameter(FWORK_CODE, component.fwork_code)
                .with_parameter(PWAY_CODE, component.pway_code)
                .with_parameter(STD_CODE, component.std_code),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{check_learner, closed, date, delivery, learner, standard};

    #[test]
    fn open_component_of_closed_programme_fails() {
        let programme = closed(
            standard(delivery(1, 1, 36, date(2019, 8, 1)), 17),
            date(2020, 3, 31),
        );
        let component = standard(delivery(2, 3, 36, date(2019, 8, 1)), 17);
        let violations = check_learner(&R90, &learner(vec![programme, component]));

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].aim_sequence_number, Some(2));
        assert_eq!(
            violations[0].parameter("LearnActEndDate"),
            Some("31/03/2020")
        );
        assert_eq!(violations[0].parameter("StdCode"), Some("17"));
    }

    #[test]
    fn open_programme_passes() {
        let programme = standard(delivery(1, 1, 36, date(2019, 8, 1)), 17);
        let component = standard(delivery(2, 3, 36, date(2019, 8, 1)), 17);
        assert!(check_learner(&R90, &learner(vec![programme, component])).is_empty());
    }

    #[test]
    fn component_without_programme_is_left_to_r31() {
        let component = standard(delivery(2, 3, 36, date(2019, 8, 1)), 17);
        assert!(check_learner(&R90, &learner(vec![component])).is_empty());
    }
}
