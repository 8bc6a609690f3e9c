//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--repo <path>`: Repository to operate on (default `.`)
//! - `--debug`: Enable debug logging
//! - `--interactive` / `--no-interactive`: Control prompts
//! - `--quiet` / `-q`: Minimal output
//! - `--json`: Machine-readable output

use clap::{Parser, Subcommand};

/// git-taz - Everyday git operations behind one small interface
#[derive(Parser, Debug)]
#[command(name = "git-taz")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Repository to operate on
    #[arg(long, global = true, default_value = ".", value_name = "PATH")]
    pub repo: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output; implies --no-interactive
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable interactive prompts
    #[arg(
        long = "interactive",
        global = true,
        conflicts_with = "no_interactive"
    )]
    pub interactive_flag: bool,

    /// Disable interactive prompts
    #[arg(long, global = true)]
    pub no_interactive: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Determine if interactive mode is enabled.
    ///
    /// `--interactive` always wins. `--no-interactive`, `--quiet` and
    /// `--json` turn prompts off. Otherwise the configured default applies,
    /// and only when `stdin_is_tty`.
    pub fn interactive(&self, configured: bool, stdin_is_tty: bool) -> bool {
        if self.interactive_flag {
            true
        } else if self.no_interactive || self.quiet || self.json {
            false
        } else {
            configured && stdin_is_tty
        }
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show what git-taz knows about the repository path
    #[command(
        name = "info",
        long_about = "Show the resolved repository handle.\n\n\
            Prints the path as given, its absolute form, the directory name, whether \
            the path exists, whether it is a git working tree, and the current branch."
    )]
    Info,

    /// List local branches
    #[command(
        name = "branches",
        after_help = "\
EXAMPLES:
    # Sorted branch names, current one marked with *
    git-taz branches

    # git's own listing, including remote-tracking branches
    git-taz branches --verbose"
    )]
    Branches {
        /// Show all branches, including remote-tracking ones, as git prints them
        #[arg(short, long)]
        verbose: bool,
    },

    /// List tags
    #[command(name = "tags")]
    Tags,

    /// Check out a branch or tag
    #[command(
        name = "checkout",
        long_about = "Check out a branch or tag.\n\n\
            With TARGET, checks it out directly. Without TARGET, asks whether to \
            pick from branches or tags, lists them, and checks out the selection.",
        after_help = "\
EXAMPLES:
    # Direct checkout
    git-taz checkout feature/x

    # Pick from a list
    git-taz checkout"
    )]
    Checkout {
        /// Branch or tag to check out
        target: Option<String>,
    },

    /// Show working tree status
    #[command(name = "status")]
    Status,

    /// Show recent commits, one line each
    #[command(name = "log")]
    Log {
        /// Number of commits to show (at least 1)
        #[arg(
            short = 'n',
            long = "max-count",
            value_name = "N",
            value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
        )]
        max_count: Option<usize>,
    },

    /// Show unstaged (or staged) changes
    #[command(name = "diff")]
    Diff {
        /// Show staged changes instead
        #[arg(long, alias = "cached")]
        staged: bool,
    },

    /// List remotes with their URLs
    #[command(name = "remotes")]
    Remotes,

    /// Preview which untracked files clean would remove
    #[command(name = "clean")]
    Clean,

    /// Run garbage collection
    #[command(name = "gc")]
    Gc,

    /// List the available tools by category
    #[command(name = "tools")]
    Tools,

    /// Get, set, or list configuration values
    #[command(
        name = "config",
        after_help = "\
KEYS:
    git_binary      git executable to run (global only)
    interactive     prompt by default (global only)
    log_max_count   commits shown by log (global or --local)

EXAMPLES:
    git-taz config set log_max_count 30
    git-taz config set --local log_max_count 5
    git-taz config list"
    )]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
EXAMPLES:
    # Bash (add to ~/.bashrc)
    git-taz completion bash >> ~/.bashrc

    # Fish
    git-taz completion fish > ~/.config/fish/completions/git-taz.fish"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Value to set
        value: String,
        /// Write to the repository config instead of the global one
        #[arg(long)]
        local: bool,
    },
    /// List all configuration values
    List,
    /// Show where configuration is read from
    Path,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
