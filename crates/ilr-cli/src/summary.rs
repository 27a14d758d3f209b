use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use ilr_validate::{Category, ReportedIssue, RuleRegistry, Severity, ValidationReport};

pub fn print_summary(report: &ValidationReport, source: &Path) {
    println!("File: {}", source.display());
    if let Some(ukprn) = report.ukprn {
        println!("UKPRN: {ukprn}");
    }
    println!(
        "Reference date: {}  Academic year: {} to {}",
        report.reference_date, report.academic_year.start, report.academic_year.end
    );
    println!(
        "Learners: {} ({} with issues)",
        report.learner_count,
        report.learners_with_issues()
    );
    if report.is_clean() {
        println!("No issues found.");
        return;
    }
    println!("{}", rule_count_table(report));
    println!();
    println!("Issues:");
    println!("{}", issue_table(report));
}

/// One row per rule that fired, with a total.
pub fn rule_count_table(report: &ValidationReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rule"),
        header_cell("Severity"),
        header_cell("Category"),
        header_cell("Count"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    for (rule_name, count) in report.counts_by_rule() {
        let Some(issue) = report
            .issues
            .iter()
            .find(|issue| issue.rule_name == rule_name)
        else {
            continue;
        };
        table.add_row(vec![
            rule_cell(rule_name),
            severity_cell(issue.severity),
            Cell::new(issue.category.label()),
            Cell::new(count).fg(severity_color(issue.severity)),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        total_cell(report),
    ]);
    table
}

/// Every issue, most severe first.
pub fn issue_table(report: &ValidationReport) -> Table {
    let mut issues: Vec<&ReportedIssue> = report.issues.iter().collect();
    issues.sort_by_key(|issue| std::cmp::Reverse(severity_rank(issue.severity)));

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rule"),
        header_cell("Severity"),
        header_cell("Learner"),
        header_cell("Aim"),
        header_cell("Message"),
        header_cell("Parameters"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    for issue in issues {
        table.add_row(vec![
            rule_cell(&issue.rule_name),
            severity_cell(issue.severity),
            optional_cell(issue.learn_ref_number.clone()),
            optional_cell(issue.aim_sequence_number),
            Cell::new(&issue.message),
            parameters_cell(issue),
        ]);
    }
    table
}

/// The rule catalogue.
pub fn catalogue_table(registry: &RuleRegistry) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rule"),
        header_cell("Severity"),
        header_cell("Category"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for rule in registry.iter() {
        table.add_row(vec![
            rule_cell(&rule.name),
            severity_cell(rule.severity),
            Cell::new(rule.category.label()),
            Cell::new(&rule.message),
        ]);
    }
    table
}

/// Rule counts per category, in catalogue category order.
pub fn category_table(registry: &RuleRegistry) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Description"),
        header_cell("Rules"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for category in Category::all() {
        let count = registry
            .iter()
            .filter(|rule| rule.category == *category)
            .count();
        if count == 0 {
            continue;
        }
        table.add_row(vec![
            Cell::new(category.label())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(category.description()),
            Cell::new(count),
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if table.column_count() >= 4 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(6)),
            ColumnConstraint::UpperBoundary(Width::Fixed(9)),
            ColumnConstraint::UpperBoundary(Width::Fixed(13)),
            ColumnConstraint::UpperBoundary(Width::Percentage(70)),
        ]);
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 6 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(6)),
            ColumnConstraint::UpperBoundary(Width::Fixed(9)),
            ColumnConstraint::UpperBoundary(Width::Fixed(14)),
            ColumnConstraint::LowerBoundary(Width::Fixed(4)),
            ColumnConstraint::UpperBoundary(Width::Percentage(45)),
            ColumnConstraint::UpperBoundary(Width::Percentage(35)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn rule_cell(name: &str) -> Cell {
    Cell::new(name)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Fail => Cell::new("FAIL")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Severity::Error => Cell::new("ERROR").fg(Color::Red),
        Severity::Warning => Cell::new("WARN").fg(Color::Yellow),
    }
}

fn severity_rank(severity: Severity) -> u8 {
    match severity {
        Severity::Fail => 3,
        Severity::Error => 2,
        Severity::Warning => 1,
    }
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Fail | Severity::Error => Color::Red,
        Severity::Warning => Color::Yellow,
    }
}

fn total_cell(report: &ValidationReport) -> Cell {
    let total = report.issues.len();
    let color = if report.has_errors() {
        Color::Red
    } else {
        Color::Yellow
    };
    Cell::new(total).fg(color).add_attribute(Attribute::Bold)
}

fn optional_cell<T: ToString>(value: Option<T>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn parameters_cell(issue: &ReportedIssue) -> Cell {
    if issue.parameters.is_empty() {
        return dim_cell("-");
    }
    let rendered: Vec<String> = issue
        .parameters
        .iter()
        .map(|parameter| format!("{}={}", parameter.property_name, parameter.value))
        .collect();
    Cell::new(rendered.join("\n"))
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
