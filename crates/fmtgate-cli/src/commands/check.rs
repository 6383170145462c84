// Rust guideline compliant 2026-02-06

//! Implementation of the `fmtgate check` command.
//!
//! Runs the format check directly, outside of any Git hook.

use anyhow::Result;
use fmtgate_core::{run_format_check, Config};
use serde_json::json;
use std::path::Path;

/// Executes the check command.
///
/// # Arguments
///
/// * `json` - Whether to emit machine-readable JSON output
///
/// # Returns
///
/// Ok if the check ran and found no issues, Err otherwise.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration cannot be loaded
/// - The format-check process cannot be spawned
/// - The check reports formatting issues
pub fn execute(json: bool) -> Result<()> {
    let config = Config::load(Path::new(".fmtgate"))?;
    let report = run_format_check(&config, Path::new("."))?;

    if json {
        let payload = json!({
            "clean": report.is_clean(),
            "diagnostics": report.diagnostics,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else if report.is_clean() {
        println!("Format check passed.");
    } else {
        println!("{}", report.diagnostics);
    }

    if report.is_clean() {
        Ok(())
    } else {
        anyhow::bail!("format check found issues")
    }
}
