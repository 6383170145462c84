// Rust guideline compliant 2026-02-06

//! Implementation of the `fmtgate init` command.
//!
//! Initializes fmtgate in a repository by creating the `.fmtgate` directory
//! with a default configuration and installing the Git pre-push hook.

use anyhow::Result;
use fmtgate_core::Config;
use git2::Repository;
use std::fs;
use std::path::{Path, PathBuf};

/// Marker line identifying hook scripts that fmtgate installed.
pub const HOOK_MARKER: &str = "# installed by fmtgate";

/// Initializes fmtgate in the current repository.
///
/// Creates the `.fmtgate` directory structure with default configuration and
/// installs the pre-push hook. Both steps are idempotent; an existing config
/// file is left untouched and fmtgate's own hook is rewritten in place.
///
/// # Returns
///
/// Ok if initialization was successful, Err otherwise.
///
/// # Errors
///
/// Returns an error if:
/// - The current directory is not inside a Git repository
/// - The `.fmtgate` directory or config file cannot be created
/// - A pre-push hook not managed by fmtgate is already installed
pub fn execute() -> Result<()> {
    let fmtgate_dir = Path::new(".fmtgate");

    // Create .fmtgate directory (ignore if already exists)
    if !fmtgate_dir.exists() {
        fs::create_dir(fmtgate_dir)?;
    }

    // Create default config.toml (only if it doesn't exist)
    let config_path = fmtgate_dir.join("config.toml");
    if !config_path.exists() {
        let config = Config::default();
        config.save(fmtgate_dir)?;
    }

    let repo = Repository::discover(".")
        .map_err(|_| anyhow::anyhow!("Not a git repository. Run 'git init' first."))?;
    let hooks_dir = repo.path().join("hooks");
    let hook_path = write_hook_script(&hooks_dir, "fmtgate hooks pre-push")?;

    println!("✓ fmtgate initialized");
    println!("  - Created .fmtgate/config.toml");
    println!("  - Installed {}", hook_path.display());

    Ok(())
}

/// Writes the pre-push hook script into a hooks directory.
///
/// An existing hook is only replaced when it carries the fmtgate marker
/// line; a foreign hook is never overwritten.
///
/// # Arguments
///
/// * `hooks_dir` - The repository's hooks directory
/// * `command` - Command the hook script runs
///
/// # Returns
///
/// The path of the installed hook script.
///
/// # Errors
///
/// Returns an error if a foreign pre-push hook exists or the script cannot
/// be written.
pub fn write_hook_script(hooks_dir: &Path, command: &str) -> Result<PathBuf> {
    fs::create_dir_all(hooks_dir)?;
    let hook_path = hooks_dir.join("pre-push");

    if hook_path.exists() {
        let existing = fs::read_to_string(&hook_path)?;
        if !existing.contains(HOOK_MARKER) {
            anyhow::bail!(
                "A pre-push hook not managed by fmtgate already exists at {}. Remove it first.",
                hook_path.display()
            );
        }
    }

    let hook_content = format!("#!/bin/sh\n{}\n{} \"$@\"\n", HOOK_MARKER, command);
    fs::write(&hook_path, hook_content)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&hook_path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&hook_path, perms)?;
    }

    Ok(hook_path)
}
