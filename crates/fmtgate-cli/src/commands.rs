// Rust guideline compliant 2026-02-06

//! Command implementations for the fmtgate CLI.

pub mod check;
pub mod doctor;
pub mod hooks;
pub mod init;
pub mod uninstall;
