//! CLI argument definitions for the ILR validator.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ilr-validate",
    version,
    about = "Validate ILR learner submissions",
    long_about = "Validate Individualised Learner Record submissions.\n\n\
                  Reads ILR XML or JSON, runs the R-series validation rules over\n\
                  every learner, destination and progression record, and the\n\
                  message as a whole, and reports each violation."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include learner references in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate an ILR submission file.
    Validate(ValidateArgs),

    /// List the rule catalogue.
    Rules,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// ILR submission (.xml or .json).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// LARS framework aims extract (CSV). Rules needing LARS are skipped without it.
    #[arg(long = "lars", value_name = "CSV")]
    pub lars: Option<PathBuf>,

    /// Validation settings file (TOML).
    #[arg(long = "config", value_name = "TOML")]
    pub config: Option<PathBuf>,

    /// Date that time-window rules compare against (YYYY-MM-DD).
    ///
    /// Defaults to the file preparation date in the message header.
    #[arg(long = "reference-date", value_name = "DATE")]
    pub reference_date: Option<NaiveDate>,

    /// Skip a rule (repeatable), e.g. --disable R108.
    #[arg(long = "disable", value_name = "RULE")]
    pub disable: Vec<String>,

    /// Write the full report as JSON.
    #[arg(long = "report", value_name = "JSON")]
    pub report: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
