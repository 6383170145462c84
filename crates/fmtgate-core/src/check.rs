// Rust guideline compliant 2026-02-06

//! Format-check execution.
//!
//! Runs the configured build target that reports formatting violations and
//! captures its standard output. The gate decision is driven by the presence
//! of output, not by the target's exit status: a check target that prints
//! nothing is treated as clean.

use crate::{Config, Error, Result};
use std::path::Path;
use std::process::Command;

/// Banner printed above echoed diagnostics when a push is blocked.
pub const BLOCK_BANNER: &str = "===== formatting issues found; push aborted =====";

/// Banner printed below echoed diagnostics when a push is blocked.
pub const BLOCK_FOOTER: &str = "===== fix the formatting and commit before pushing =====";

/// Captured result of a format-check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Diagnostic text the check target printed on standard output.
    pub diagnostics: String,
}

impl CheckReport {
    /// Returns whether the check found no formatting violations.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.trim().is_empty()
    }
}

/// Runs the configured format-check target and captures its diagnostics.
///
/// # Arguments
///
/// * `config` - Configuration naming the build program and check target
/// * `workdir` - Directory to run the check in
///
/// # Returns
///
/// A `CheckReport` with the captured standard output.
///
/// # Errors
///
/// Returns `Error::CheckFailed` if the build program cannot be spawned.
pub fn run_format_check(config: &Config, workdir: &Path) -> Result<CheckReport> {
    let output = Command::new(&config.make_program)
        .arg(&config.check_target)
        .current_dir(workdir)
        .output()
        .map_err(|err| {
            Error::CheckFailed(format!(
                "could not run `{} {}`: {}",
                config.make_program, config.check_target, err
            ))
        })?;

    let diagnostics = String::from_utf8_lossy(&output.stdout)
        .trim_end()
        .to_string();

    Ok(CheckReport { diagnostics })
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("Failed to write script");
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
        path
    }

    fn config_with_make(make_program: &Path) -> Config {
        Config {
            make_program: make_program.to_str().unwrap().to_string(),
            ..Config::default()
        }
    }

    #[test]
    fn test_silent_target_is_clean() {
        let dir = TempDir::new().unwrap();
        let make = write_script(dir.path(), "fakemake", "exit 0");

        let report = run_format_check(&config_with_make(&make), dir.path()).unwrap();
        assert!(report.is_clean());
        assert_eq!(report.diagnostics, "");
    }

    #[test]
    fn test_diagnostics_are_captured() {
        let dir = TempDir::new().unwrap();
        let make = write_script(dir.path(), "fakemake", "echo 'src/main.c needs formatting'");

        let report = run_format_check(&config_with_make(&make), dir.path()).unwrap();
        assert!(!report.is_clean());
        assert_eq!(report.diagnostics, "src/main.c needs formatting");
    }

    #[test]
    fn test_whitespace_only_output_is_clean() {
        let dir = TempDir::new().unwrap();
        let make = write_script(dir.path(), "fakemake", "echo ''");

        let report = run_format_check(&config_with_make(&make), dir.path()).unwrap();
        assert!(report.is_clean());
    }

    #[test]
    fn test_nonzero_exit_with_silent_output_is_clean() {
        // The gate branches on output, not on the target's exit status.
        let dir = TempDir::new().unwrap();
        let make = write_script(dir.path(), "fakemake", "exit 2");

        let report = run_format_check(&config_with_make(&make), dir.path()).unwrap();
        assert!(report.is_clean());
    }

    #[test]
    fn test_missing_make_program_fails() {
        let dir = TempDir::new().unwrap();
        let config = config_with_make(&dir.path().join("no-such-make"));

        let result = run_format_check(&config, dir.path());
        assert!(matches!(result, Err(Error::CheckFailed(_))));
    }

    #[test]
    fn test_stderr_is_not_part_of_the_report() {
        let dir = TempDir::new().unwrap();
        let make = write_script(dir.path(), "fakemake", "echo 'progress noise' >&2");

        let report = run_format_check(&config_with_make(&make), dir.path()).unwrap();
        assert!(report.is_clean());
    }
}
