//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`prompts`] - Interactive checkout prompts
//! - [`output`] - Output formatting and display
//!
//! # Design
//!
//! All terminal output and prompts go through this module so quiet mode
//! and non-interactive mode are handled in one place.

pub mod output;
pub mod prompts;
