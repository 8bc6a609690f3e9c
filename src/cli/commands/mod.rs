//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Calls the operations facade
//! 3. Formats and displays the result
//!
//! Handlers return `Ok(false)` when the operation reported failure, so the
//! process can exit non-zero after the result has been shown. `Err` is kept
//! for problems outside the operation itself (bad config key, I/O on stdout).

mod checkout;
mod completion;
mod config_cmd;
mod info;
mod refs;
mod tools;

pub use checkout::checkout;
pub use completion::completion;
pub use config_cmd::{get as config_get, list as config_list, path as config_path, set as config_set};
pub use info::info;
pub use refs::{branches, tags};
pub use tools::{run_tool, tools};

use anyhow::Result;

use super::args::{Command, ConfigAction};
use super::Context;
use crate::ops::ToolId;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<bool> {
    match command {
        Command::Info => info::info(ctx),
        Command::Branches { verbose } => refs::branches(ctx, verbose),
        Command::Tags => refs::tags(ctx),
        Command::Checkout { target } => checkout::checkout(ctx, target.as_deref()),

        Command::Status => tools::run_tool(ctx, ToolId::Status),
        Command::Log { max_count } => tools::log(ctx, max_count),
        Command::Diff { staged } => tools::diff(ctx, staged),
        Command::Remotes => tools::run_tool(ctx, ToolId::Remotes),
        Command::Clean => tools::run_tool(ctx, ToolId::Clean),
        Command::Gc => tools::run_tool(ctx, ToolId::Gc),
        Command::Tools => tools::tools(ctx),

        Command::Config { action } => match action {
            ConfigAction::Get { key } => config_cmd::get(ctx, &key),
            ConfigAction::Set { key, value, local } => config_cmd::set(ctx, &key, &value, local),
            ConfigAction::List => config_cmd::list(ctx),
            ConfigAction::Path => config_cmd::path(ctx),
        },

        Command::Completion { shell } => {
            completion::completion(shell)?;
            Ok(true)
        }
    }
}
