//! Configuration options for a validation run.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{IlrError, Result};

/// Academic year bounds (1 August to 31 July).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicYear {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl AcademicYear {
    /// Academic year starting on 1 August of `start_year`.
    pub fn starting(start_year: i32) -> Option<Self> {
        Some(Self {
            start: NaiveDate::from_ymd_opt(start_year, 8, 1)?,
            end: NaiveDate::from_ymd_opt(start_year + 1, 7, 31)?,
        })
    }

    /// Parse an ILR collection year code such as `"1920"`.
    ///
    /// The two halves must be consecutive years; `"1920"` is 2019/20.
    pub fn from_code(code: &str) -> Result<Self> {
        let invalid = || IlrError::InvalidAcademicYear {
            code: code.to_string(),
        };
        let code = code.trim();
        if code.len() != 4 || !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let first: i32 = code[..2].parse().map_err(|_| invalid())?;
        let second: i32 = code[2..].parse().map_err(|_| invalid())?;
        if (first + 1) % 100 != second {
            return Err(invalid());
        }
        Self::starting(2000 + first).ok_or_else(invalid)
    }

    /// Academic year containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        let start_year = if date.month() >= 8 {
            date.year()
        } else {
            date.year() - 1
        };
        // 1 August and 31 July exist in every year chrono can represent here.
        Self::starting(start_year).unwrap_or(Self {
            start: date,
            end: date,
        })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Options controlling which rules run and the dates they evaluate against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    /// Date that time-window rules compare against.
    ///
    /// Falls back to the message file preparation date when unset.
    pub reference_date: Option<NaiveDate>,

    /// Academic year override. Derived from the message header when unset.
    pub academic_year: Option<AcademicYear>,

    /// Rule names that are skipped (e.g. `"R108"`).
    pub disabled_rules: BTreeSet<String>,
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    pub fn with_academic_year(mut self, year: AcademicYear) -> Self {
        self.academic_year = Some(year);
        self
    }

    pub fn disable_rule(mut self, rule_name: impl Into<String>) -> Self {
        self.disabled_rules.insert(rule_name.into().to_uppercase());
        self
    }

    /// Whether `rule_name` should run (case-insensitive).
    pub fn is_enabled(&self, rule_name: &str) -> bool {
        !self
            .disabled_rules
            .iter()
            .any(|disabled| disabled.eq_ignore_ascii_case(rule_name))
    }
}
