// Rust guideline compliant 2026-02-06

//! CLI entry point for the fmtgate pre-push hook.

use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    // git passes the remote name and URL as arguments and the ref updates on
    // stdin; neither changes the outcome, so both are left unread.
    let repo_path = std::env::current_dir()?;
    let verdict = fmtgate_hooks::pre_push_hook(&repo_path)?;
    verdict.report();
    Ok(ExitCode::from(verdict.exit_code()))
}
