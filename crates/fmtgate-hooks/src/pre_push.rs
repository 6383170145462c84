// Rust guideline compliant 2026-02-06

//! Pre-push hook implementation.
//!
//! Gates a push on the repository's formatting state. Tool availability is
//! checked first; by default a missing tool only warns and allows the push,
//! so contributors without the full toolchain are not locked out. Only an
//! actual formatting discrepancy blocks the push.

use anyhow::Result;
use fmtgate_core::{
    check, detect_tool, probe_formatter, Config, FormatterProbe, ToolStatus,
};
use std::path::Path;

/// Decision produced by the pre-push hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushVerdict {
    /// Allow the push with no output.
    Allow,
    /// Allow the push after printing a warning.
    AllowWithWarning {
        /// Warning text to print.
        warning: String,
    },
    /// Block the push and echo the diagnostics between the fixed banners.
    Block {
        /// Diagnostic text from the format check.
        diagnostics: String,
    },
}

impl PushVerdict {
    /// Returns the process exit code git expects for this verdict.
    pub fn exit_code(&self) -> u8 {
        match self {
            PushVerdict::Allow | PushVerdict::AllowWithWarning { .. } => 0,
            PushVerdict::Block { .. } => 1,
        }
    }

    /// Returns whether the push proceeds.
    pub fn allows_push(&self) -> bool {
        self.exit_code() == 0
    }

    /// Renders the text this verdict prints, if any.
    pub fn render(&self) -> Option<String> {
        match self {
            PushVerdict::Allow => None,
            PushVerdict::AllowWithWarning { warning } => Some(warning.clone()),
            PushVerdict::Block { diagnostics } => Some(format!(
                "{}\n{}\n{}",
                check::BLOCK_BANNER,
                diagnostics,
                check::BLOCK_FOOTER
            )),
        }
    }

    /// Prints the verdict's output to standard output.
    pub fn report(&self) {
        if let Some(text) = self.render() {
            println!("{}", text);
        }
    }
}

/// Runs the pre-push hook.
///
/// The flow is sequential: presence-check the style checker, probe the
/// formatter's version subcommand, run the format-check target, and block
/// only when the check emitted diagnostics. git's ref-update lines on stdin
/// are never read.
///
/// # Arguments
///
/// * `repo_path` - Path to the Git repository
///
/// # Returns
///
/// The verdict to apply to the push.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration cannot be loaded
/// - The format-check process cannot be spawned
pub fn pre_push_hook(repo_path: &Path) -> Result<PushVerdict> {
    let config = Config::load(&repo_path.join(".fmtgate"))?;

    if let ToolStatus::Missing = detect_tool(&config.style_checker) {
        let warning = format!(
            "warning: style checker '{}' not found, skipping format check",
            config.style_checker
        );
        return Ok(missing_tool_verdict(&config, warning));
    }

    if let FormatterProbe::Unavailable(reason) =
        probe_formatter(&config.formatter, &config.formatter_probe_args)
    {
        let warning = format!(
            "warning: formatter '{}' unavailable ({}), skipping format check",
            config.formatter, reason
        );
        return Ok(missing_tool_verdict(&config, warning));
    }

    let report = check::run_format_check(&config, repo_path)?;
    if report.is_clean() {
        Ok(PushVerdict::Allow)
    } else {
        Ok(PushVerdict::Block {
            diagnostics: report.diagnostics,
        })
    }
}

fn missing_tool_verdict(config: &Config, message: String) -> PushVerdict {
    if config.block_on_missing_tools {
        PushVerdict::Block {
            diagnostics: message,
        }
    } else {
        PushVerdict::AllowWithWarning { warning: message }
    }
}
