//! LARS (Learning Aims Reference Service) reference data.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Framework aim link: a learning aim that may be taken as a component of a
/// given framework pathway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LarsFrameworkAim {
    pub learn_aim_ref: String,
    pub prog_type: i32,
    pub fwork_code: i32,
    pub pway_code: i32,
    pub effective_from: NaiveDate,
    pub effective_to: Option<NaiveDate>,
}

impl LarsFrameworkAim {
    pub fn is_current_on(&self, date: NaiveDate) -> bool {
        self.effective_from <= date && self.effective_to.is_none_or(|to| date <= to)
    }
}

/// Lookup key for framework aims.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrameworkKey {
    pub learn_aim_ref: String,
    pub prog_type: i32,
    pub fwork_code: i32,
    pub pway_code: i32,
}

impl FrameworkKey {
    pub fn new(learn_aim_ref: &str, prog_type: i32, fwork_code: i32, pway_code: i32) -> Self {
        Self {
            learn_aim_ref: learn_aim_ref.trim().to_uppercase(),
            prog_type,
            fwork_code,
            pway_code,
        }
    }
}

/// In-memory LARS data indexed for rule lookups.
#[derive(Debug, Clone, Default)]
pub struct LarsData {
    framework_aims: HashMap<FrameworkKey, Vec<LarsFrameworkAim>>,
}

impl LarsData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_framework_aims(aims: impl IntoIterator<Item = LarsFrameworkAim>) -> Self {
        let mut data = Self::new();
        for aim in aims {
            data.insert_framework_aim(aim);
        }
        data
    }

    pub fn insert_framework_aim(&mut self, aim: LarsFrameworkAim) {
        let key = FrameworkKey::new(
            &aim.learn_aim_ref,
            aim.prog_type,
            aim.fwork_code,
            aim.pway_code,
        );
        self.framework_aims.entry(key).or_default().push(aim);
    }

    /// Whether a framework aim exists for `key` and is current on `date`.
    pub fn has_current_framework_aim(&self, key: &FrameworkKey, date: NaiveDate) -> bool {
        self.framework_aims
            .get(key)
            .is_some_and(|aims| aims.iter().any(|aim| aim.is_current_on(date)))
    }

    pub fn framework_aim_count(&self) -> usize {
        self.framework_aims.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.framework_aims.is_empty()
    }
}
