//! Validation settings file.
//!
//! ```toml
//! reference_date = "2020-09-15"
//! academic_year = "1920"
//! disabled_rules = ["R108"]
//! lars = "reference/framework_aims.csv"
//! ```
//!
//! Dates are quoted ISO strings. Command-line flags take precedence over
//! values read from the file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use ilr_model::{AcademicYear, ValidationOptions};

/// Contents of a settings file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfig {
    pub reference_date: Option<NaiveDate>,
    /// Collection year code such as `"1920"`.
    pub academic_year: Option<String>,
    pub disabled_rules: Vec<String>,
    /// LARS extract, relative paths resolved against the settings file.
    pub lars: Option<PathBuf>,
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub reference_date: Option<NaiveDate>,
    pub disabled_rules: Vec<String>,
    pub lars: Option<PathBuf>,
}

impl ValidationConfig {
    /// Read a settings file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let mut config = Self::parse(&content)
            .with_context(|| format!("parse config {}", path.display()))?;
        if let Some(lars) = config.lars.take() {
            config.lars = Some(resolve_relative(path, lars));
        }
        tracing::info!(path = %path.display(), "loaded validation config");
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Build run options, applying command-line overrides on top.
    pub fn into_options(self, overrides: &Overrides) -> Result<ValidationOptions> {
        let mut options = ValidationOptions::new();
        if let Some(code) = &self.academic_year {
            let year = AcademicYear::from_code(code).context("academic_year")?;
            options = options.with_academic_year(year);
        }
        if let Some(date) = overrides.reference_date.or(self.reference_date) {
            options = options.with_reference_date(date);
        }
        for rule in self.disabled_rules.iter().chain(&overrides.disabled_rules) {
            options = options.disable_rule(rule.trim());
        }
        Ok(options)
    }

    /// LARS path, command line first.
    pub fn lars_path(&self, overrides: &Overrides) -> Option<PathBuf> {
        overrides.lars.clone().or_else(|| self.lars.clone())
    }
}

fn resolve_relative(config_path: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        return path;
    }
    match config_path.parent() {
        Some(dir) => dir.join(path),
        None => path,
    }
}
