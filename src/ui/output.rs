//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Output is formatted consistently and respects the quiet flag.
//! When `--json` is enabled, output is machine-readable JSON.
//! Diagnostics go to stderr so stdout stays scriptable.

use std::fmt::Display;

use serde::Serialize;

use crate::core::types::{CheckoutResult, OperationResult};

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
}

impl Verbosity {
    /// Create verbosity from the quiet flag.
    ///
    /// `--debug` does not change what is printed here; it only raises the
    /// tracing filter.
    pub fn from_flags(quiet: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a value as pretty JSON on stdout.
pub fn json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Format a list of items.
pub fn format_list<T: Display>(items: &[T], prefix: &str) -> String {
    items
        .iter()
        .map(|item| format!("{}{}", prefix, item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format branch names, marking the current one with `* `.
pub fn format_branches(branches: &[String], current: Option<&str>) -> String {
    branches
        .iter()
        .map(|name| {
            if Some(name.as_str()) == current {
                format!("* {}", name)
            } else {
                format!("  {}", name)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Text shown for a successful result.
///
/// The captured output when there is any, otherwise `empty` if given, otherwise
/// the result message.
pub fn success_text(result: &OperationResult, empty: Option<&str>) -> String {
    match result.output().filter(|out| !out.trim().is_empty()) {
        Some(out) => out.to_string(),
        None => empty.unwrap_or(result.message()).to_string(),
    }
}

/// Print an operation result; returns whether it succeeded.
///
/// Failures are always shown on stderr: the message, then the captured
/// diagnostic.
pub fn report(result: &OperationResult, empty: Option<&str>, verbosity: Verbosity) -> bool {
    if result.success() {
        print(success_text(result, empty), verbosity);
        return true;
    }

    error(result.message());
    if let Some(detail) = result.error().filter(|e| !e.is_empty()) {
        eprintln!("{}", detail);
    }
    false
}

/// Print a checkout result; returns whether it succeeded.
pub fn report_checkout(result: &CheckoutResult, verbosity: Verbosity) -> bool {
    if result.success() {
        print(result.message(), verbosity);
    } else {
        error(result.message());
    }
    result.success()
}
