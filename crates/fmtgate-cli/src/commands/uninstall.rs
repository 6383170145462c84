// Rust guideline compliant 2026-02-06

//! Implementation of the `fmtgate uninstall` command.
//!
//! Removes the pre-push hook, but only when fmtgate installed it.

use super::init::HOOK_MARKER;
use anyhow::Result;
use git2::Repository;
use std::fs;
use std::path::Path;

/// Removes the installed pre-push hook from the current repository.
///
/// # Returns
///
/// Ok if the hook was removed, Err otherwise.
///
/// # Errors
///
/// Returns an error if:
/// - The current directory is not inside a Git repository
/// - No pre-push hook is installed
/// - The installed hook was not written by fmtgate
pub fn execute() -> Result<()> {
    let repo = Repository::discover(".")
        .map_err(|_| anyhow::anyhow!("Not a git repository."))?;
    let hook_path = repo.path().join("hooks").join("pre-push");

    remove_hook_script(&hook_path)?;
    println!("✓ Removed {}", hook_path.display());

    Ok(())
}

/// Removes a hook script if and only if it carries the fmtgate marker.
///
/// # Arguments
///
/// * `hook_path` - Path of the hook script to remove
///
/// # Returns
///
/// Ok if the script was removed.
///
/// # Errors
///
/// Returns an error if the script is absent, unreadable, or foreign.
pub fn remove_hook_script(hook_path: &Path) -> Result<()> {
    if !hook_path.exists() {
        anyhow::bail!("No pre-push hook installed at {}", hook_path.display());
    }

    let content = fs::read_to_string(hook_path)?;
    if !content.contains(HOOK_MARKER) {
        anyhow::bail!(
            "The pre-push hook at {} was not installed by fmtgate; leaving it in place.",
            hook_path.display()
        );
    }

    fs::remove_file(hook_path)?;
    Ok(())
}
