// Rust guideline compliant 2026-02-06

//! Hook command wrappers for invoking the fmtgate Git hook from the CLI.

use anyhow::Result;

/// Runs the requested hook action.
///
/// The process exits with the verdict's code, so the installed hook script
/// can delegate straight to `fmtgate hooks pre-push`.
///
/// # Arguments
///
/// * `action` - Hook action to run
///
/// # Returns
///
/// Does not return on success; the process exits with the hook's code.
///
/// # Errors
///
/// Returns an error if the hook itself fails to run.
pub fn execute(action: HookAction) -> Result<()> {
    match action {
        HookAction::PrePush { .. } => {
            let repo_path = std::env::current_dir()?;
            let verdict = fmtgate_hooks::pre_push_hook(&repo_path)?;
            verdict.report();
            std::process::exit(i32::from(verdict.exit_code()));
        }
    }
}

/// Supported hook actions.
#[derive(Debug, Clone, PartialEq, Eq, clap::Subcommand)]
pub enum HookAction {
    /// Run the pre-push hook
    PrePush {
        /// Remote name supplied by git (does not alter behavior)
        remote: Option<String>,

        /// Remote URL supplied by git (does not alter behavior)
        url: Option<String>,
    },
}
