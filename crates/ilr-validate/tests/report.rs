//! End-to-end validation of a sample message.

use ilr_model::{Message, ValidationOptions};
use ilr_validate::{RuleEngine, ValidationContext, ValidationReport, load_default_rules};

const MESSAGE_JSON: &str = include_str!("data/message.json");

fn sample_message() -> Message {
    serde_json::from_str(MESSAGE_JSON).expect("parse sample message")
}

#[test]
fn validation_report_json() {
    let message = sample_message();
    let options = ValidationOptions::new();
    let ctx = ValidationContext::new(&message, &options);
    let violations = RuleEngine::with_default_rules().execute(&message, &ctx);
    let registry = load_default_rules().expect("load rules");

    let report = ValidationReport::new(&message, &ctx, violations, &registry);

    assert!(report.has_errors());
    insta::assert_json_snapshot!(report);
}

#[test]
fn disabled_rules_drop_out_of_report() {
    let message = sample_message();
    let options = ValidationOptions::new()
        .disable_rule("R59")
        .disable_rule("R108");
    let ctx = ValidationContext::new(&message, &options);
    let violations = RuleEngine::with_default_rules().execute(&message, &ctx);
    let registry = load_default_rules().expect("load rules");

    let report = ValidationReport::new(&message, &ctx, violations, &registry);
    let counts = report.counts_by_rule();

    assert!(!counts.contains_key("R59"));
    assert!(!counts.contains_key("R108"));
    assert_eq!(report.warning_count, 0);
    assert_eq!(report.error_count, 5);
}
