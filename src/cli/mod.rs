//! cli
//!
//! Command-line interface layer for git-taz.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Install logging, load configuration, resolve the repository
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! [`crate::ops::Operations`]. Handlers only format results; every git
//! invocation goes through the facade.

pub mod args;
pub mod commands;

pub use args::{Cli, Command, ConfigAction, Shell};

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{bail, Context as _, Result};
use tracing_subscriber::EnvFilter;

use crate::core::config::Config;
use crate::core::resolve::resolve;
use crate::git::SystemGit;
use crate::ops::Operations;
use crate::ui::output::Verbosity;

/// Everything a command handler needs.
#[derive(Debug)]
pub struct Context {
    /// The facade bound to the resolved repository.
    pub ops: Operations<SystemGit>,
    /// Merged configuration.
    pub config: Config,
    /// Output verbosity.
    pub verbosity: Verbosity,
    /// Interactive mode enabled.
    pub interactive: bool,
    /// Print JSON instead of text.
    pub json: bool,
}

impl Context {
    /// Absolute path of the repository the context is bound to.
    pub fn repo_path(&self) -> &PathBuf {
        &self.ops.handle().absolute_path
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`. Returns `Ok(false)`
/// when a command ran but reported failure.
pub fn run() -> Result<bool> {
    let cli = Cli::parse_args();
    init_tracing(cli.debug);

    if let Command::Completion { shell } = cli.command {
        commands::completion(shell)?;
        return Ok(true);
    }

    let ctx = build_context(&cli)?;
    commands::dispatch(cli.command, &ctx)
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins; otherwise `--debug` enables this crate's debug events.
fn init_tracing(debug: bool) {
    let default = if debug { "git_taz=debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn build_context(cli: &Cli) -> Result<Context> {
    let handle = resolve(&cli.repo);
    if !handle.exists {
        bail!(
            "repository path does not exist: {}",
            handle.absolute_path.display()
        );
    }

    let repo_root = handle.is_repository.then_some(handle.absolute_path.as_path());
    let config = Config::load(repo_root).context("Failed to load config")?;

    let executor = SystemGit::new(config.git_binary());
    tracing::debug!(
        repo = %handle.absolute_path.display(),
        is_repository = handle.is_repository,
        git = %executor.binary().display(),
        "session ready"
    );

    Ok(Context {
        interactive: cli.interactive(config.interactive(), std::io::stdin().is_terminal()),
        verbosity: Verbosity::from_flags(cli.quiet),
        json: cli.json,
        ops: Operations::new(handle, executor),
        config,
    })
}
