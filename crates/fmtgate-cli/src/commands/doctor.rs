// Rust guideline compliant 2026-02-06

//! Implementation of the `fmtgate doctor` command.
//!
//! Reports availability of the configured tools without running the check.

use crate::terminal::print_status_line;
use anyhow::Result;
use fmtgate_core::{detect_tool, probe_formatter, Config, FormatterProbe, ToolStatus};
use serde_json::json;
use std::path::Path;
use tabled::{builder::Builder, settings::Style};
use termcolor::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    fn label(self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN",
            Severity::Info => "OK",
        }
    }
}

struct Finding {
    severity: Severity,
    tool: String,
    detail: String,
}

/// Executes the doctor command.
///
/// Checks the style checker, the formatter probe, and the build program, and
/// reports each result. Missing optional tools are warnings (the hook skips
/// the check for them); a missing build program is an error because the gate
/// cannot run at all without it.
///
/// # Arguments
///
/// * `json` - Whether to emit machine-readable JSON output
///
/// # Returns
///
/// Ok if no errors were found, Err otherwise.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration cannot be loaded
/// - The build program is missing
pub fn execute(json: bool) -> Result<()> {
    let config = Config::load(Path::new(".fmtgate"))?;
    let findings = collect_findings(&config);

    if json {
        let entries: Vec<_> = findings
            .iter()
            .map(|finding| {
                json!({
                    "tool": finding.tool,
                    "status": finding.severity.label(),
                    "detail": finding.detail,
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({ "findings": entries }))?
        );
    } else {
        report_findings(&findings);
    }

    if findings.iter().any(|f| f.severity == Severity::Error) {
        anyhow::bail!("doctor found errors");
    }

    Ok(())
}

fn collect_findings(config: &Config) -> Vec<Finding> {
    let mut findings = Vec::new();

    match detect_tool(&config.style_checker) {
        ToolStatus::Found(path) => findings.push(Finding {
            severity: Severity::Info,
            tool: config.style_checker.clone(),
            detail: format!("resolved to {}", path.display()),
        }),
        ToolStatus::Missing => findings.push(Finding {
            severity: Severity::Warning,
            tool: config.style_checker.clone(),
            detail: "not found in PATH; push checks will be skipped".to_string(),
        }),
    }

    match probe_formatter(&config.formatter, &config.formatter_probe_args) {
        FormatterProbe::Available(version) => findings.push(Finding {
            severity: Severity::Info,
            tool: config.formatter.clone(),
            detail: version,
        }),
        FormatterProbe::Unavailable(reason) => findings.push(Finding {
            severity: Severity::Warning,
            tool: config.formatter.clone(),
            detail: format!("{}; push checks will be skipped", reason),
        }),
    }

    match detect_tool(&config.make_program) {
        ToolStatus::Found(path) => findings.push(Finding {
            severity: Severity::Info,
            tool: config.make_program.clone(),
            detail: format!("resolved to {}", path.display()),
        }),
        ToolStatus::Missing => findings.push(Finding {
            severity: Severity::Error,
            tool: config.make_program.clone(),
            detail: "not found in PATH; the format check cannot run".to_string(),
        }),
    }

    findings
}

fn report_findings(findings: &[Finding]) {
    let mut builder = Builder::default();
    builder.push_record(["tool", "status", "detail"]);
    for finding in findings {
        builder.push_record([
            finding.tool.as_str(),
            finding.severity.label(),
            finding.detail.as_str(),
        ]);
    }
    let mut table = builder.build();
    table.with(Style::rounded());
    println!("{}", table);

    let errors = findings
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .count();
    let warnings = findings
        .iter()
        .filter(|f| f.severity == Severity::Warning)
        .count();

    if errors > 0 {
        print_status_line(
            &format!("doctor: {} error(s), {} warning(s)", errors, warnings),
            Color::Red,
        );
    } else if warnings > 0 {
        print_status_line(
            &format!("doctor: {} warning(s)", warnings),
            Color::Yellow,
        );
    } else {
        print_status_line("doctor: all tools available", Color::Green);
    }
}
