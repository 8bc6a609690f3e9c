//! core::resolve
//!
//! Turns a raw path string into a [`RepositoryHandle`].
//!
//! Resolution never fails. Every problem with the path (missing, unreadable,
//! not a repository, bare, corrupt metadata) is encoded in the handle's
//! `exists` / `is_repository` flags.

use std::path::{Component, Path, PathBuf};

use crate::core::types::RepositoryHandle;
use crate::git::probe;

/// Resolve `path` into a handle.
///
/// The path does not need to exist. An empty string resolves to the current
/// directory.
///
/// # Example
///
/// ```
/// use git_taz::core::resolve::resolve;
///
/// let handle = resolve("/definitely/not/here");
/// assert!(!handle.exists);
/// assert!(!handle.is_repository);
/// assert_eq!(handle.name, "here");
/// ```
pub fn resolve(path: &str) -> RepositoryHandle {
    let absolute_path = absolutize(path);
    let exists = absolute_path.exists();
    let is_repository = exists && probe::is_work_tree(&absolute_path);

    tracing::debug!(
        path,
        absolute = %absolute_path.display(),
        exists,
        is_repository,
        "resolved repository path"
    );

    RepositoryHandle {
        path: path.to_string(),
        name: last_segment(&absolute_path),
        absolute_path,
        exists,
        is_repository,
    }
}

/// Make `path` absolute without touching the filesystem beyond the cwd lookup.
fn absolutize(path: &str) -> PathBuf {
    let cwd = || std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    if path.is_empty() {
        return cwd();
    }

    std::path::absolute(path).unwrap_or_else(|_| cwd().join(path))
}

fn last_segment(path: &Path) -> String {
    match path.components().next_back() {
        Some(Component::Normal(segment)) => segment.to_string_lossy().into_owned(),
        Some(other) => other.as_os_str().to_string_lossy().into_owned(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_path_neither_exists_nor_is_repository() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");

        let handle = resolve(missing.to_str().unwrap());

        assert!(!handle.exists);
        assert!(!handle.is_repository);
        assert_eq!(handle.name, "nope");
        assert!(handle.absolute_path.is_absolute());
    }

    #[test]
    fn plain_directory_exists_but_is_not_repository() {
        let temp = TempDir::new().unwrap();

        let handle = resolve(temp.path().to_str().unwrap());

        assert!(handle.exists);
        assert!(!handle.is_repository);
    }

    #[test]
    fn empty_dot_git_is_not_a_repository() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join(".git")).unwrap();

        let handle = resolve(temp.path().to_str().unwrap());

        assert!(handle.exists);
        assert!(!handle.is_repository);
    }

    #[test]
    fn file_path_is_not_a_repository() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("notes.txt");
        std::fs::write(&file, "hello").unwrap();

        let handle = resolve(file.to_str().unwrap());

        assert!(handle.exists);
        assert!(!handle.is_repository);
        assert_eq!(handle.name, "notes.txt");
    }

    #[test]
    fn keeps_caller_path_verbatim() {
        let handle = resolve("relative/child");
        assert_eq!(handle.path, "relative/child");
        assert!(handle.absolute_path.is_absolute());
        assert!(handle.absolute_path.ends_with("relative/child"));
    }

    #[test]
    fn empty_path_resolves_to_cwd() {
        let handle = resolve("");
        assert_eq!(handle.absolute_path, std::env::current_dir().unwrap());
        assert!(handle.exists);
    }

    #[test]
    fn refresh_rebuilds_from_caller_path() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("later");
        let before = resolve(target.to_str().unwrap());
        assert!(!before.exists);

        std::fs::create_dir(&target).unwrap();
        let after = before.refresh();

        assert!(!before.exists);
        assert!(after.exists);
        assert_eq!(after.path, before.path);
    }

    #[test]
    fn root_has_a_name() {
        assert!(!last_segment(Path::new("/")).is_empty());
    }
}
