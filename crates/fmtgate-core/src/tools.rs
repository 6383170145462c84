// Rust guideline compliant 2026-02-06

//! Tool detection for fmtgate.
//!
//! Provides PATH lookup for the style checker and a version probe for the
//! formatter. Both are deliberately soft: a tool that cannot be found or
//! probed is reported as missing rather than raised as an error, because the
//! push gate must not block pushes on an incomplete toolchain.

use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Presence status of a PATH-resolved tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolStatus {
    /// The tool was found at the given path.
    Found(PathBuf),
    /// The tool could not be resolved.
    Missing,
}

/// Outcome of the formatter version probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatterProbe {
    /// The probe succeeded; carries the reported version line.
    Available(String),
    /// The probe failed; carries a short reason.
    Unavailable(String),
}

/// Resolves a tool on the search path.
///
/// # Arguments
///
/// * `name` - Tool binary name, or a path to check directly
///
/// # Returns
///
/// `ToolStatus::Found` with the resolved path, or `ToolStatus::Missing`.
pub fn detect_tool(name: &str) -> ToolStatus {
    match find_in_path(name) {
        Some(path) => ToolStatus::Found(path),
        None => ToolStatus::Missing,
    }
}

/// Looks up an executable on the `PATH` environment variable.
///
/// A name containing a path separator is checked directly instead of being
/// resolved against PATH, matching the behavior of `which`.
///
/// # Arguments
///
/// * `name` - Tool binary name or path
///
/// # Returns
///
/// The resolved executable path, or None if no executable candidate exists.
pub fn find_in_path(name: &str) -> Option<PathBuf> {
    find_in(name, env::var_os("PATH").as_deref())
}

fn find_in(name: &str, path: Option<&OsStr>) -> Option<PathBuf> {
    let candidate = Path::new(name);
    if candidate.components().count() > 1 {
        return if is_executable(candidate) {
            Some(candidate.to_path_buf())
        } else {
            None
        };
    }

    for dir in env::split_paths(path?) {
        if dir.as_os_str().is_empty() {
            continue;
        }
        let full = dir.join(name);
        if is_executable(&full) {
            return Some(full);
        }
    }
    None
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Probes the formatter by running its version subcommand.
///
/// # Arguments
///
/// * `command` - Formatter binary name or path
/// * `args` - Version subcommand arguments (for example `["fmt", "--version"]`)
///
/// # Returns
///
/// `FormatterProbe::Available` with the first reported version line when the
/// probe exits successfully, otherwise `FormatterProbe::Unavailable` with the
/// failure reason. Spawn failures (including a missing binary) are reported
/// as unavailable, never as a hard error.
pub fn probe_formatter(command: &str, args: &[String]) -> FormatterProbe {
    let output = match Command::new(command).args(args).output() {
        Ok(output) => output,
        Err(err) => return FormatterProbe::Unavailable(err.to_string()),
    };

    if !output.status.success() {
        return FormatterProbe::Unavailable(format!("probe exited with {}", output.status));
    }

    // Most formatters report their version on stdout; fall back to stderr.
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let version = stdout
        .lines()
        .chain(stderr.lines())
        .map(str::trim)
        .find(|line| !line.is_empty());

    match version {
        Some(line) => FormatterProbe::Available(line.to_string()),
        None => FormatterProbe::Unavailable("probe produced no output".to_string()),
    }
}
