//! The ILR rule catalogue.
//!
//! One file per rule. Each rule is a unit struct implementing [`Rule`] for
//! the record it checks: most check a [`Learner`], `R85` and `R115` check
//! destination and progression records and `R59` checks the whole message.

mod fam_periods;
mod r100;
mod r101;
mod r102;
mod r104;
mod r105;
mod r106;
mod r107;
mod r108;
mod r110;
mod r112;
mod r113;
mod r115;
mod r119;
mod r121;
mod r123;
mod r20;
mod r30;
mod r31;
mod r52;
mod r56;
mod r59;
mod r64;
mod r68;
mod r71;
mod r85;
mod r90;
mod r92;
mod r99;

use ilr_model::{Learner, LearnerDestinationAndProgression, Message};

use crate::rule::Rule;

pub use r100::R100;
pub use r101::R101;
pub use r102::R102;
pub use r104::R104;
pub use r105::R105;
pub use r106::R106;
pub use r107::R107;
pub use r108::R108;
pub use r110::R110;
pub use r112::R112;
pub use r113::R113;
pub use r115::R115;
pub use r119::R119;
pub use r121::R121;
pub use r123::R123;
pub use r20::R20;
pub use r30::R30;
pub use r31::R31;
pub use r52::R52;
pub use r56::R56;
pub use r59::R59;
pub use r64::R64;
pub use r68::R68;
pub use r71::R71;
pub use r85::R85;
pub use r90::R90;
pub use r92::R92;
pub use r99::R99;

pub type LearnerRule = Box<dyn Rule<Learner>>;
pub type DestinationRule = Box<dyn Rule<LearnerDestinationAndProgression>>;
pub type MessageRule = Box<dyn Rule<Message>>;

/// Every rule run against individual learners, in rule-number order.
pub fn learner_rules() -> Vec<LearnerRule> {
    vec![
        Box::new(R20),
        Box::new(R30),
        Box::new(R31),
        Box::new(R52),
        Box::new(R56),
        Box::new(R64),
        Box::new(R68),
        Box::new(R71),
        Box::new(R90),
        Box::new(R92),
        Box::new(R99),
        Box::new(R100),
        Box::new(R101),
        Box::new(R102),
        Box::new(R104),
        Box::new(R105),
        Box::new(R106),
        Box::new(R107),
        Box::new(R108),
        Box::new(R110),
        Box::new(R112),
        Box::new(R113),
        Box::new(R119),
        Box::new(R121),
        Box::new(R123),
    ]
}

pub fn destination_rules() -> Vec<DestinationRule> {
    vec![Box::new(R85), Box::new(R115)]
}

pub fn message_rules() -> Vec<MessageRule> {
    vec![Box::new(R59)]
}
