//! git::mock
//!
//! Scripted git executor for deterministic testing.
//!
//! # Design
//!
//! `MockGit` answers each invocation by looking up its git subcommand (the
//! first argument) in a table of scripted responses, and records every call
//! so tests can assert on what was (or was not) executed. Subcommands without
//! a script fail to launch, which surfaces unexpected calls loudly.
//!
//! # Example
//!
//! ```
//! use git_taz::git::mock::MockGit;
//! use git_taz::git::{GitExecutor, RawOutput};
//! use std::path::Path;
//!
//! let git = MockGit::new().on("status", RawOutput::success(" M README.md\n"));
//!
//! let out = git.execute(Path::new("/repo"), &["status".to_string()]).unwrap();
//! assert_eq!(out.stdout, " M README.md\n");
//! assert_eq!(git.call_count("status"), 1);
//! assert_eq!(git.call_count("checkout"), 0);
//! ```

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use super::exec::{GitExecutor, RawOutput};

/// Mock executor for testing.
///
/// Clones share state, so a test can keep one clone for assertions while the
/// code under test owns another.
#[derive(Debug, Clone, Default)]
pub struct MockGit {
    inner: Arc<Mutex<MockGitInner>>,
}

#[derive(Debug, Default)]
struct MockGitInner {
    scripts: HashMap<String, Scripted>,
    calls: Vec<MockCall>,
}

#[derive(Debug, Clone)]
enum Scripted {
    Output(RawOutput),
    LaunchError(io::ErrorKind, String),
}

/// One recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockCall {
    pub work_dir: PathBuf,
    pub args: Vec<String>,
}

impl MockGit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every `subcommand` invocation with `output`.
    pub fn on(self, subcommand: &str, output: RawOutput) -> Self {
        self.set(subcommand, Scripted::Output(output));
        self
    }

    /// Make every `subcommand` invocation fail to launch.
    pub fn fail_launch(self, subcommand: &str, kind: io::ErrorKind, message: &str) -> Self {
        self.set(subcommand, Scripted::LaunchError(kind, message.to_string()));
        self
    }

    /// Replace the script for `subcommand` on a shared clone.
    pub fn respond(&self, subcommand: &str, output: RawOutput) {
        self.set(subcommand, Scripted::Output(output));
    }

    /// All recorded calls, oldest first.
    pub fn calls(&self) -> Vec<MockCall> {
        self.lock().calls.clone()
    }

    /// Number of calls whose first argument is `subcommand`.
    pub fn call_count(&self, subcommand: &str) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|c| c.args.first().map(String::as_str) == Some(subcommand))
            .count()
    }

    /// Total number of invocations.
    pub fn total_calls(&self) -> usize {
        self.lock().calls.len()
    }

    fn set(&self, subcommand: &str, scripted: Scripted) {
        self.lock()
            .scripts
            .insert(subcommand.to_string(), scripted);
    }

    fn lock(&self) -> MutexGuard<'_, MockGitInner> {
        // A poisoned lock only means another test thread panicked mid-call.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl GitExecutor for MockGit {
    fn execute(&self, work_dir: &Path, args: &[String]) -> io::Result<RawOutput> {
        let mut inner = self.lock();
        inner.calls.push(MockCall {
            work_dir: work_dir.to_path_buf(),
            args: args.to_vec(),
        });

        let subcommand = args.first().map(String::as_str).unwrap_or_default();
        match inner.scripts.get(subcommand) {
            Some(Scripted::Output(out)) => Ok(out.clone()),
            Some(Scripted::LaunchError(kind, message)) => Err(io::Error::new(*kind, message.clone())),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no scripted response for git {}", subcommand),
            )),
        }
    }
}
