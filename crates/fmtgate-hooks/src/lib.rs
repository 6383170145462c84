// Rust guideline compliant 2026-02-06

//! Fmtgate Git Hooks
//!
//! This crate provides the Git hook implementation for fmtgate:
//! - Pre-push formatting gate

pub mod pre_push;

pub use pre_push::{pre_push_hook, PushVerdict};
