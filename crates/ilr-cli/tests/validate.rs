//! End-to-end runs of the validate command.

use std::fs;
use std::path::{Path, PathBuf};

use ilr_cli::cli::ValidateArgs;
use ilr_cli::commands::run_validate;
use ilr_cli::summary::{catalogue_table, category_table, issue_table, rule_count_table};
use ilr_validate::load_default_rules;
use tempfile::TempDir;

const MESSAGE_JSON: &str = include_str!("../../ilr-validate/tests/data/message.json");

fn write_message(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("ILR-10006341-1920.json");
    fs::write(&path, MESSAGE_JSON).unwrap();
    path
}

fn args(file: &Path) -> ValidateArgs {
    ValidateArgs {
        file: file.to_path_buf(),
        lars: None,
        config: None,
        reference_date: None,
        disable: Vec::new(),
        report: None,
    }
}

#[test]
fn validate_writes_json_report() {
    let dir = TempDir::new().unwrap();
    let file = write_message(&dir);
    let report_path = dir.path().join("report.json");
    let args = ValidateArgs {
        report: Some(report_path.clone()),
        ..args(&file)
    };

    let report = run_validate(&args).unwrap();
    assert!(report.has_errors());

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(written["error_count"], 7);
    assert_eq!(written["warning_count"], 1);
    assert_eq!(written["issues"].as_array().unwrap().len(), 8);
}

#[test]
fn config_file_disables_rules() {
    let dir = TempDir::new().unwrap();
    let file = write_message(&dir);
    let config = dir.path().join("ilr.toml");
    fs::write(&config, "disabled_rules = [\"R59\"]\n").unwrap();
    let args = ValidateArgs {
        config: Some(config),
        disable: vec!["r108".to_string()],
        ..args(&file)
    };

    let report = run_validate(&args).unwrap();
    let counts = report.counts_by_rule();
    assert!(!counts.contains_key("R59"));
    assert!(!counts.contains_key("R108"));
    assert_eq!(report.error_count, 5);
}

#[test]
fn missing_lars_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let file = write_message(&dir);
    let args = ValidateArgs {
        lars: Some(dir.path().join("missing.csv")),
        ..args(&file)
    };

    let error = run_validate(&args).unwrap_err();
    assert!(format!("{error:#}").contains("load LARS"));
}

#[test]
fn unsupported_extension_is_an_error() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("message.txt");
    fs::write(&file, MESSAGE_JSON).unwrap();

    assert!(run_validate(&args(&file)).is_err());
}

#[test]
fn tables_list_rules_and_issues() {
    let dir = TempDir::new().unwrap();
    let file = write_message(&dir);
    let report = run_validate(&args(&file)).unwrap();

    let counts = rule_count_table(&report).to_string();
    assert!(counts.contains("R59"));
    assert!(counts.contains("TOTAL"));

    let issues = issue_table(&report);
    assert_eq!(issues.row_iter().count(), report.issues.len());
    assert!(issues.to_string().contains("LR03"));

    let registry = load_default_rules().unwrap();
    let catalogue = catalogue_table(&registry);
    assert_eq!(catalogue.row_iter().count(), registry.len());
}

#[test]
fn category_table_describes_each_category() {
    let registry = load_default_rules().unwrap();
    let table = category_table(&registry);
    let rendered = table.to_string();

    assert_eq!(table.row_iter().count(), 7);
    assert!(rendered.contains("Destination and progression records"));
    assert!(!rendered.contains("Uncategorized"));
}
