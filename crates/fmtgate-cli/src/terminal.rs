// Rust guideline compliant 2026-02-06

//! Terminal UI utilities for the fmtgate CLI.
//!
//! This module provides color support for status output.

use std::env;
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
///
/// # Returns
/// `true` if colored output should be used, `false` otherwise
pub fn should_use_color() -> bool {
    // Check NO_COLOR environment variable
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    atty::is(atty::Stream::Stdout)
}

/// Prints a bold colored status line to standard output.
///
/// Falls back to plain text when color is disabled or the stream rejects
/// color codes.
///
/// # Arguments
/// * `text` - The line to print
/// * `color` - The foreground color to use
pub fn print_status_line(text: &str, color: Color) {
    if !should_use_color() {
        println!("{}", text);
        return;
    }

    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(color)).set_bold(true);
    if stdout.set_color(&spec).is_err() {
        println!("{}", text);
        return;
    }
    let _ = writeln!(&mut stdout, "{}", text);
    let _ = stdout.reset();
}
