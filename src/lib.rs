//! git-taz - Everyday git operations behind one small interface
//!
//! git-taz binds a directory to a repository handle and offers a fixed set
//! of operations over it: listing branches and tags, checking one out, and a
//! small catalog of read and maintenance tools (status, log, diff, remotes,
//! clean preview, gc). Every front end, the bundled CLI included, goes
//! through the same facade.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to ops)
//! - [`ops`] - Operations facade, tool catalog, interactive checkout flow
//! - [`git`] - Repository probe and the single path to the git binary
//! - [`core`] - Domain types, path resolution, configuration
//! - [`ui`] - Output formatting and prompts
//!
//! # Invariants
//!
//! 1. Operation outcomes are values; nothing in [`ops`] returns `Err` or panics
//! 2. No git process is started for a path that is not a repository
//! 3. Every git invocation goes through [`git::GitExecutor`]
//!
//! # Example
//!
//! ```no_run
//! use git_taz::core::resolve::resolve;
//! use git_taz::git::SystemGit;
//! use git_taz::ops::Operations;
//!
//! let ops = Operations::new(resolve("."), SystemGit::default());
//! for branch in ops.list_branches() {
//!     println!("{branch}");
//! }
//! println!("{}", ops.checkout("main").message());
//! ```

pub mod cli;
pub mod core;
pub mod git;
pub mod ops;
pub mod ui;
