//! git::probe
//!
//! Low-level repository probe using git2.
//!
//! This is the only place in the crate that links against libgit2. It opens
//! the path exactly as given (no upward discovery) so that a handle for a
//! subdirectory of a repository is not mistaken for the repository itself.

use std::path::Path;

/// Check whether `path` opens as a repository with a working directory.
///
/// Returns `false` for any failure: missing path, permission denied,
/// corrupt or partial `.git` metadata, or a bare repository.
pub fn is_work_tree(path: &Path) -> bool {
    match git2::Repository::open(path) {
        Ok(repo) if repo.is_bare() => {
            tracing::debug!(path = %path.display(), "bare repository rejected");
            false
        }
        Ok(_) => true,
        Err(e) => {
            tracing::debug!(
                path = %path.display(),
                code = ?e.code(),
                "repository probe failed: {}",
                e.message()
            );
            false
        }
    }
}
