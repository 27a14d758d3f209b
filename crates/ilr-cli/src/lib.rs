//! Command-line validator for ILR submissions.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod summary;
