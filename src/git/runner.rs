//! git::runner
//!
//! Normalizes one git invocation into an [`OperationResult`].
//!
//! # Failure classes
//!
//! | Situation | `message` | `error` |
//! |---|---|---|
//! | handle is not a repository | `No repository loaded` | explanation |
//! | git exited non-zero | `git <name> failed (exit code <n>)` | stderr, or a synthesized line |
//! | git killed by a signal | `git <name> failed (terminated by signal)` | stderr, or a synthesized line |
//! | git could not be started | `Failed to execute git <name>` | OS error text |
//!
//! None of these panic or escape as `Err`. The repository guard runs before
//! anything else, so no process is ever spawned against an unvalidated path.

use crate::core::types::{OperationResult, RepositoryHandle};

use super::exec::{GitExecutor, RawOutput};

/// Message for every operation attempted without a valid repository.
pub const NO_REPOSITORY: &str = "No repository loaded";

/// One git invocation: a short name for messages and the argv to pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    name: &'static str,
    args: Vec<String>,
}

impl CommandSpec {
    /// Build a spec from its name and arguments (subcommand first).
    pub fn new<I, S>(name: &'static str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name,
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

/// Runs [`CommandSpec`]s against a handle through a [`GitExecutor`].
#[derive(Debug, Clone)]
pub struct CommandRunner<E> {
    executor: E,
}

impl<E: GitExecutor> CommandRunner<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    /// Execute `spec` in the handle's working directory.
    ///
    /// On success `output` holds stdout with trailing whitespace trimmed; it
    /// may be empty. Rendering "no changes" for empty output is the caller's
    /// business.
    pub fn run(&self, handle: &RepositoryHandle, spec: &CommandSpec) -> OperationResult {
        if !handle.is_repository {
            tracing::debug!(command = spec.name, path = %handle.path, "skipped: no repository");
            return OperationResult::failed(
                NO_REPOSITORY,
                format!("{} is not a git working directory", handle.absolute_path.display()),
            );
        }

        tracing::debug!(command = spec.name, args = ?spec.args, "running git");

        match self.executor.execute(&handle.absolute_path, &spec.args) {
            Ok(raw) => normalize(spec.name, raw),
            Err(e) => {
                tracing::warn!(command = spec.name, error = %e, "failed to launch git");
                OperationResult::failed(format!("Failed to execute git {}", spec.name), e.to_string())
            }
        }
    }
}

fn normalize(name: &str, raw: RawOutput) -> OperationResult {
    let stdout = raw.stdout.trim_end();
    let stderr = raw.stderr.trim_end();

    match raw.exit_code {
        Some(0) => {
            tracing::debug!(command = name, exit_code = 0, "git completed");
            OperationResult::ok(format!("git {} completed", name), stdout)
        }
        Some(code) => {
            tracing::warn!(command = name, exit_code = code, "git failed");
            let error = if stderr.is_empty() {
                format!("git {} exited with code {} without diagnostic output", name, code)
            } else {
                stderr.to_string()
            };
            OperationResult::failed(format!("git {} failed (exit code {})", name, code), error)
        }
        None => {
            tracing::warn!(command = name, "git terminated by signal");
            let error = if stderr.is_empty() {
                format!("git {} was terminated by a signal", name)
            } else {
                stderr.to_string()
            };
            OperationResult::failed(format!("git {} failed (terminated by signal)", name), error)
        }
    }
}
