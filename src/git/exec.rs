//! git::exec
//!
//! The process boundary: one synchronous invocation of the git binary.
//!
//! Implementations return `Err` only when the process could not be started
//! (missing binary, unusable working directory, permission denied). A git
//! command that runs and fails is a successful invocation with a non-zero
//! exit code.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Environment variable that overrides the git binary.
pub const ENV_GIT_BIN: &str = "GIT_TAZ_GIT_BIN";

/// Captured outcome of one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawOutput {
    /// Process exit code; `None` when terminated by a signal
    pub exit_code: Option<i32>,
    /// Captured standard output, lossily decoded
    pub stdout: String,
    /// Captured standard error, lossily decoded
    pub stderr: String,
}

impl RawOutput {
    /// A zero-exit output with the given stdout.
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            exit_code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// A non-zero exit with the given stderr.
    pub fn failure(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self {
            exit_code: Some(exit_code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs git with `args` inside `work_dir`.
pub trait GitExecutor: Send + Sync {
    fn execute(&self, work_dir: &Path, args: &[String]) -> io::Result<RawOutput>;
}

/// Spawns the real git binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemGit {
    binary: PathBuf,
}

impl SystemGit {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }
}

impl Default for SystemGit {
    fn default() -> Self {
        Self::new("git")
    }
}

impl GitExecutor for SystemGit {
    fn execute(&self, work_dir: &Path, args: &[String]) -> io::Result<RawOutput> {
        let output = Command::new(&self.binary)
            .args(args)
            .current_dir(work_dir)
            // Never block on a credential or editor prompt.
            .env("GIT_TERMINAL_PROMPT", "0")
            .env("GIT_EDITOR", "true")
            .output()?;

        Ok(RawOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
