//! git
//!
//! Single doorway to Git.
//!
//! # Architecture
//!
//! Every interaction with a repository flows through this module. No other
//! module spawns git or imports `git2`.
//!
//! - [`probe`] opens a path with libgit2 to decide whether it is a working
//!   directory. It never mutates anything.
//! - [`exec`] is the process boundary: `(work_dir, argv) -> RawOutput`, with
//!   `Err` reserved for "could not start git".
//! - [`runner`] turns one invocation into an
//!   [`OperationResult`](crate::core::types::OperationResult) and guards
//!   against running anything on a path that is not a repository.
//! - [`mock`] is a scripted executor for tests.
//!
//! # Example
//!
//! ```no_run
//! use git_taz::core::resolve::resolve;
//! use git_taz::git::{CommandRunner, CommandSpec, SystemGit};
//!
//! let handle = resolve(".");
//! let runner = CommandRunner::new(SystemGit::default());
//! let result = runner.run(&handle, &CommandSpec::new("status", ["status", "--short"]));
//! println!("{}", result.message());
//! ```

pub mod exec;
pub mod mock;
pub mod probe;
pub mod runner;

pub use exec::{GitExecutor, RawOutput, SystemGit, ENV_GIT_BIN};
pub use runner::{CommandRunner, CommandSpec, NO_REPOSITORY};
