//! Validate a crawler JSON export against the seed document format.
//!
//! Usage: `validate-data <schools.json>`
//!
//! Prints a summary, writes `<input>_validation_report.json` next to the
//! input, and exits nonzero when errors are found so the check can gate a
//! data-import pipeline.

use std::process::ExitCode;

use unipath_db::validation::{self, Severity};

fn main() -> ExitCode {
    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: validate-data <schools.json>");
        return ExitCode::from(2);
    };

    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) => {
            eprintln!("cannot read {path}: {err}");
            return ExitCode::from(2);
        }
    };

    let data: serde_json::Value = match serde_json::from_str(&content) {
        Ok(data) => data,
        Err(err) => {
            eprintln!("{path} is not valid JSON: {err}");
            return ExitCode::from(2);
        }
    };

    let report = validation::validate(&data);

    println!("Schools:     {}", report.total_schools);
    println!("Departments: {}", report.total_departments);
    println!("Errors:      {}", report.summary.errors);
    println!("Warnings:    {}", report.summary.warnings);

    for issue in &report.issues {
        let tag = match issue.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN ",
            Severity::Info => "INFO ",
        };
        println!("  [{tag}] {}: {}", issue.path, issue.message);
    }

    let report_path = match path.strip_suffix(".json") {
        Some(stem) => format!("{stem}_validation_report.json"),
        None => format!("{path}_validation_report.json"),
    };

    let serialized = match serde_json::to_string_pretty(&report) {
        Ok(serialized) => serialized,
        Err(err) => {
            eprintln!("cannot serialize report: {err}");
            return ExitCode::from(2);
        }
    };
    if let Err(err) = std::fs::write(&report_path, serialized) {
        eprintln!("cannot write {report_path}: {err}");
        return ExitCode::from(2);
    }
    println!("Report written to {report_path}");

    if report.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
