// Rust guideline compliant 2026-02-06

//! Fmtgate Core Library
//!
//! This crate provides the foundational components for the fmtgate push gate:
//! - Configuration (tool names, check target, strictness)
//! - Tool detection (PATH lookup, formatter version probe)
//! - Format-check execution (make target invocation and report capture)
//! - Error types and result handling

pub mod check;
pub mod config;
pub mod error;
pub mod tools;

pub use check::{run_format_check, CheckReport, BLOCK_BANNER, BLOCK_FOOTER};
pub use config::Config;
pub use error::{Error, Result};
pub use tools::{detect_tool, find_in_path, probe_formatter, FormatterProbe, ToolStatus};
