// Rust guideline compliant 2026-02-06

//! Integration tests for CLI commands.

use fmtgate_cli::commands::init::{write_hook_script, HOOK_MARKER};
use fmtgate_cli::commands::uninstall::remove_hook_script;
use fmtgate_core::Config;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_init_config_structure() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let fmtgate_dir = temp_dir.path().join(".fmtgate");

    // Manually create the structure (simulating init)
    fs::create_dir(&fmtgate_dir).expect("Failed to create .fmtgate directory");
    let config = Config::default();
    config.save(&fmtgate_dir).expect("Failed to save config");

    assert!(fmtgate_dir.join("config.toml").exists());

    let content = fs::read_to_string(fmtgate_dir.join("config.toml"))
        .expect("Failed to read config.toml");
    assert!(
        content.contains("style_checker"),
        "config.toml should contain style_checker"
    );
    assert!(
        content.contains("check_target"),
        "config.toml should contain check_target"
    );
}

#[test]
fn test_write_hook_script_installs_pre_push() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let hooks_dir = temp_dir.path().join("hooks");

    let hook_path =
        write_hook_script(&hooks_dir, "fmtgate hooks pre-push").expect("Failed to install hook");

    let content = fs::read_to_string(&hook_path).expect("Failed to read hook");
    assert!(content.starts_with("#!/bin/sh\n"));
    assert!(content.contains(HOOK_MARKER));
    assert!(content.contains("fmtgate hooks pre-push \"$@\""));

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(&hook_path).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111, "hook should be executable");
    }
}

#[test]
fn test_write_hook_script_is_idempotent() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let hooks_dir = temp_dir.path().join("hooks");

    write_hook_script(&hooks_dir, "fmtgate hooks pre-push").expect("First install failed");
    write_hook_script(&hooks_dir, "fmtgate hooks pre-push").expect("Re-install failed");

    let content = fs::read_to_string(hooks_dir.join("pre-push")).unwrap();
    assert!(content.contains(HOOK_MARKER));
}

#[test]
fn test_write_hook_script_refuses_foreign_hook() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let hooks_dir = temp_dir.path().join("hooks");
    fs::create_dir_all(&hooks_dir).unwrap();
    fs::write(hooks_dir.join("pre-push"), "#!/bin/sh\nexit 0\n").unwrap();

    let result = write_hook_script(&hooks_dir, "fmtgate hooks pre-push");
    assert!(result.is_err(), "foreign hook must not be overwritten");

    let content = fs::read_to_string(hooks_dir.join("pre-push")).unwrap();
    assert_eq!(content, "#!/bin/sh\nexit 0\n");
}

#[test]
fn test_remove_hook_script_removes_own_hook() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let hooks_dir = temp_dir.path().join("hooks");

    let hook_path =
        write_hook_script(&hooks_dir, "fmtgate hooks pre-push").expect("Failed to install hook");
    remove_hook_script(&hook_path).expect("Failed to remove hook");

    assert!(!hook_path.exists());
}

#[test]
fn test_remove_hook_script_refuses_foreign_hook() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let hook_path = temp_dir.path().join("pre-push");
    fs::write(&hook_path, "#!/bin/sh\nexit 0\n").unwrap();

    let result = remove_hook_script(&hook_path);
    assert!(result.is_err(), "foreign hook must not be removed");
    assert!(hook_path.exists());
}

#[test]
fn test_remove_hook_script_errors_when_absent() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let hook_path = temp_dir.path().join("pre-push");

    let result = remove_hook_script(&hook_path);
    assert!(result.is_err());
}
