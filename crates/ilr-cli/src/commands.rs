use std::fs;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, trace};

use ilr_ingest::{load_lars, load_message};
use ilr_validate::{RuleEngine, ValidationContext, ValidationReport, load_default_rules};

use crate::cli::ValidateArgs;
use crate::config::{Overrides, ValidationConfig};
use crate::logging::redact_value;
use crate::summary::{catalogue_table, category_table};

pub fn run_rules() -> Result<()> {
    let registry = load_default_rules().context("load rule catalogue")?;
    println!("{}", catalogue_table(&registry));
    println!();
    println!("{}", category_table(&registry));
    Ok(())
}

pub fn run_validate(args: &ValidateArgs) -> Result<ValidationReport> {
    let span = info_span!("validate", file = %args.file.display());
    let _guard = span.enter();

    let config = match &args.config {
        Some(path) => ValidationConfig::load(path)?,
        None => ValidationConfig::default(),
    };
    let overrides = Overrides {
        reference_date: args.reference_date,
        disabled_rules: args.disable.clone(),
        lars: args.lars.clone(),
    };
    let lars_path = config.lars_path(&overrides);
    let options = config.into_options(&overrides)?;

    let message = load_message(&args.file)
        .with_context(|| format!("load {}", args.file.display()))?;
    let lars = match lars_path {
        Some(path) => {
            let data = load_lars(&path)
                .with_context(|| format!("load LARS {}", path.display()))?;
            Some(data)
        }
        None => None,
    };
    if lars.is_none() {
        info!("no LARS data supplied, reference data rules are skipped");
    }

    let mut ctx = ValidationContext::new(&message, &options);
    if let Some(lars) = &lars {
        ctx = ctx.with_lars(lars);
    }
    debug!(
        reference_date = %ctx.reference_date,
        academic_year_start = %ctx.academic_year.start,
        disabled = options.disabled_rules.len(),
        "resolved validation options"
    );

    let registry = load_default_rules().context("load rule catalogue")?;
    let violations = RuleEngine::with_default_rules().execute(&message, &ctx);
    for violation in &violations {
        trace!(
            rule = violation.rule_name,
            learner = redact_value(violation.learn_ref_number.as_deref().unwrap_or_default()),
            aim = violation.aim_sequence_number,
            "violation"
        );
    }
    let report = ValidationReport::new(&message, &ctx, violations, &registry);

    if let Some(path) = &args.report {
        let json = serde_json::to_string_pretty(&report).context("serialize report")?;
        fs::write(path, json).with_context(|| format!("write report {}", path.display()))?;
        info!(path = %path.display(), "wrote validation report");
    }
    info!(
        learners = report.learner_count,
        errors = report.error_count,
        warnings = report.warning_count,
        "validation finished"
    );
    Ok(report)
}
