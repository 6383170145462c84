// Rust guideline compliant 2026-02-06

//! Fmtgate CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod terminal;

pub use terminal::should_use_color;
