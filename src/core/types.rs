//! core::types
//!
//! Value types shared by every front end.
//!
//! # Types
//!
//! - [`RepositoryHandle`] - Snapshot of a path's validity as a working directory
//! - [`OperationResult`] - Uniform outcome of a read or maintenance operation
//! - [`CheckoutResult`] - Outcome of a checkout
//! - [`TargetKind`] - Branch or tag
//! - [`TargetName`] - Validated checkout target
//!
//! # Invariants
//!
//! The result types can only be built through constructors that enforce
//! their field pairings: a successful [`OperationResult`] carries output and
//! no error, a failed one carries an error and no output, and a
//! [`CheckoutResult`] has a target exactly when it succeeded.
//!
//! # Examples
//!
//! ```
//! use git_taz::core::types::{CheckoutResult, OperationResult, TargetName};
//!
//! let ok = OperationResult::ok("Status retrieved", "");
//! assert!(ok.success());
//! assert_eq!(ok.output(), Some(""));
//!
//! let done = CheckoutResult::succeeded("main");
//! assert_eq!(done.target(), Some("main"));
//!
//! assert!(TargetName::new("-f").is_err());
//! ```

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid target name: {0}")]
    InvalidTargetName(String),
}

/// A working directory at a point in time.
///
/// Built once by [`crate::core::resolve::resolve`] and never mutated. To
/// observe a change on disk, build a new handle with [`RepositoryHandle::refresh`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryHandle {
    /// The path exactly as the caller supplied it
    pub path: String,
    /// Absolute form of `path` (not required to exist)
    pub absolute_path: PathBuf,
    /// Last segment of the absolute path
    pub name: String,
    /// Whether the path exists on disk
    pub exists: bool,
    /// Whether the path opened as a non-bare repository
    pub is_repository: bool,
}

impl RepositoryHandle {
    /// Resolve the same `path` again.
    pub fn refresh(&self) -> RepositoryHandle {
        crate::core::resolve::resolve(&self.path)
    }
}

/// Outcome of a read or maintenance operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationResult {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl OperationResult {
    /// A successful result. Empty `output` is valid and means "nothing to show".
    pub fn ok(message: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            output: Some(output.into()),
            error: None,
        }
    }

    /// A failed result carrying the raw diagnostic text.
    pub fn failed(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            output: None,
            error: Some(error.into()),
        }
    }

    /// Replace the message, keeping success/output/error as they are.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Outcome of a checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutResult {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<String>,
}

impl CheckoutResult {
    /// A successful checkout of `target`.
    pub fn succeeded(target: impl Into<String>) -> Self {
        let target = target.into();
        Self {
            success: true,
            message: format!("Successfully checked out {}", target),
            target: Some(target),
        }
    }

    /// A failed checkout. Never carries a target.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            target: None,
        }
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }
}

/// The kind of ref a checkout target is chosen from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Branch,
    Tag,
}

impl TargetKind {
    /// Plural noun used in listings and messages ("branches", "tags").
    pub fn plural(&self) -> &'static str {
        match self {
            TargetKind::Branch => "branches",
            TargetKind::Tag => "tags",
        }
    }
}

impl std::fmt::Display for TargetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetKind::Branch => write!(f, "branch"),
            TargetKind::Tag => write!(f, "tag"),
        }
    }
}

/// A checkout target that is safe to hand to the git binary.
///
/// This is deliberately looser than git's refname rules: git itself is the
/// judge of whether a target exists. The checks here only keep the argument
/// from being read as something other than a revision:
/// - Cannot be empty
/// - Cannot start with `-`
/// - Cannot contain whitespace or ASCII control characters
///
/// # Example
///
/// ```
/// use git_taz::core::types::TargetName;
///
/// assert_eq!(TargetName::new("feature/x").unwrap().as_str(), "feature/x");
/// assert!(TargetName::new("").is_err());
/// assert!(TargetName::new("--orphan").is_err());
/// assert!(TargetName::new("two words").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetName(String);

impl TargetName {
    /// Create a new validated target name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidTargetName` describing the first rule broken.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    fn validate(name: &str) -> Result<(), TypeError> {
        if name.is_empty() {
            return Err(TypeError::InvalidTargetName(
                "target name cannot be empty".into(),
            ));
        }
        if name.starts_with('-') {
            return Err(TypeError::InvalidTargetName(
                "target name cannot start with '-'".into(),
            ));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(TypeError::InvalidTargetName(
                "target name cannot contain whitespace".into(),
            ));
        }
        if name.chars().any(|c| c.is_ascii_control()) {
            return Err(TypeError::InvalidTargetName(
                "target name cannot contain control characters".into(),
            ));
        }
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TargetName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TargetName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
