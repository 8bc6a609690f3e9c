//! ops::facade
//!
//! The operations every front end is built on.
//!
//! # Concurrency
//!
//! [`Operations`] holds no locks. The working directory is a single mutable
//! resource as far as git is concerned, so callers must not have more than
//! one call in flight per handle; in particular a `checkout` must not overlap
//! any other call. Front ends that dispatch work to background threads must
//! funnel all calls for a handle through one worker.
//!
//! There are no timeouts either: a hung git process hangs the call.

use chrono::DateTime;

use crate::core::types::{CheckoutResult, OperationResult, RepositoryHandle, TargetKind, TargetName};
use crate::git::{CommandRunner, CommandSpec, GitExecutor, SystemGit, NO_REPOSITORY};

use super::tools::{ToolDescriptor, ToolId, ToolRegistry};

/// Default number of commits shown by [`Operations::log`].
pub const DEFAULT_LOG_COUNT: usize = 15;

/// Width the author column is clipped and padded to.
pub const AUTHOR_WIDTH: usize = 22;

/// Maximum length of the commit subject in a log line.
pub const SUBJECT_WIDTH: usize = 80;

const FIELD_SEP: char = '\u{1f}';
const RECORD_SEP: char = '\u{1e}';

/// Repository operations over one handle.
#[derive(Debug, Clone)]
pub struct Operations<E = SystemGit> {
    handle: RepositoryHandle,
    tools: ToolRegistry,
    runner: CommandRunner<E>,
}

impl<E: GitExecutor> Operations<E> {
    pub fn new(handle: RepositoryHandle, executor: E) -> Self {
        Self {
            handle,
            tools: ToolRegistry::new(),
            runner: CommandRunner::new(executor),
        }
    }

    pub fn handle(&self) -> &RepositoryHandle {
        &self.handle
    }

    pub fn all_tools(&self) -> &'static [ToolDescriptor] {
        self.tools.all_tools()
    }

    pub fn by_category(&self) -> Vec<(&'static str, Vec<&'static ToolDescriptor>)> {
        self.tools.by_category()
    }

    // =========================================================================
    // Ref listing
    // =========================================================================

    /// Local branch names, sorted and deduplicated.
    ///
    /// Empty when there is no repository or the listing fails.
    pub fn list_branches(&self) -> Vec<String> {
        self.list_refs(TargetKind::Branch)
    }

    /// Tag names, sorted and deduplicated.
    ///
    /// Empty when there is no repository or the listing fails.
    pub fn list_tags(&self) -> Vec<String> {
        self.list_refs(TargetKind::Tag)
    }

    /// Candidates of the given kind.
    pub fn list_targets(&self, kind: TargetKind) -> Vec<String> {
        self.list_refs(kind)
    }

    fn list_refs(&self, kind: TargetKind) -> Vec<String> {
        if !self.handle.is_repository {
            return Vec::new();
        }

        let prefix = match kind {
            TargetKind::Branch => "refs/heads/",
            TargetKind::Tag => "refs/tags/",
        };
        let spec = CommandSpec::new(
            "for-each-ref",
            ["for-each-ref", "--format=%(refname)", prefix],
        );
        let result = self.runner.run(&self.handle, &spec);
        if !result.success() {
            tracing::warn!(
                kind = %kind,
                error = result.error().unwrap_or_default(),
                "ref listing failed; treating as empty"
            );
            return Vec::new();
        }

        let mut names: Vec<String> = result
            .output()
            .unwrap_or_default()
            .lines()
            .filter_map(|line| line.trim().strip_prefix(prefix))
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// The checked-out branch.
    ///
    /// `None` without a repository and on a detached HEAD. Neither is an error.
    pub fn current_branch(&self) -> Option<String> {
        if !self.handle.is_repository {
            return None;
        }

        let spec = CommandSpec::new(
            "symbolic-ref",
            ["symbolic-ref", "--quiet", "--short", "HEAD"],
        );
        let result = self.runner.run(&self.handle, &spec);
        if !result.success() {
            return None;
        }

        result
            .output()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from)
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Check out a branch or tag.
    ///
    /// Every failure (unknown ref, conflicting local changes, ambiguous name,
    /// git missing) is reported the same way: `Checkout failed: <diagnostic>`
    /// with git's own text passed through untouched.
    pub fn checkout(&self, target: &str) -> CheckoutResult {
        if !self.handle.is_repository {
            return CheckoutResult::failed(NO_REPOSITORY);
        }

        let target = match TargetName::new(target) {
            Ok(t) => t,
            Err(e) => return CheckoutResult::failed(format!("Checkout failed: {}", e)),
        };

        // The trailing "--" pins the argument to a revision, never a path.
        let spec = CommandSpec::new("checkout", ["checkout", target.as_str(), "--"]);
        let result = self.runner.run(&self.handle, &spec);

        if result.success() {
            tracing::debug!(target = %target, "checked out");
            CheckoutResult::succeeded(target.as_str())
        } else {
            let diagnostic = result.error().unwrap_or_else(|| result.message());
            CheckoutResult::failed(format!("Checkout failed: {}", diagnostic))
        }
    }

    // =========================================================================
    // Tools
    // =========================================================================

    /// Working tree status in short format.
    pub fn status(&self) -> OperationResult {
        let spec = CommandSpec::new("status", ["status", "--short", "--branch"]);
        relabel(self.runner.run(&self.handle, &spec), "Status retrieved")
    }

    /// The last `max_count` commits reachable from HEAD, newest first.
    ///
    /// Each line reads `{date} {author} {short id} {subject}` with the author
    /// clipped and padded to [`AUTHOR_WIDTH`] and the subject clipped to
    /// [`SUBJECT_WIDTH`].
    pub fn log(&self, max_count: usize) -> OperationResult {
        let format = format!("--format=%cI{0}%an{0}%h{0}%B{1}", FIELD_SEP, RECORD_SEP);
        let spec = CommandSpec::new(
            "log",
            vec!["log".to_string(), format!("--max-count={}", max_count), format],
        );
        let result = self.runner.run(&self.handle, &spec);
        if !result.success() {
            return result;
        }

        let rendered = render_log(result.output().unwrap_or_default(), max_count);
        OperationResult::ok("Log retrieved", rendered)
    }

    /// Unstaged changes, or staged ones when `staged` is set.
    pub fn diff(&self, staged: bool) -> OperationResult {
        let spec = if staged {
            CommandSpec::new("diff", ["diff", "--cached"])
        } else {
            CommandSpec::new("diff", ["diff"])
        };
        relabel(self.runner.run(&self.handle, &spec), "Diff retrieved")
    }

    /// Local and remote-tracking branches with the current one starred.
    pub fn branches_verbose(&self) -> OperationResult {
        let spec = CommandSpec::new("branch", ["branch", "--all"]);
        relabel(self.runner.run(&self.handle, &spec), "Branches retrieved")
    }

    /// Configured remotes with their URLs.
    pub fn remotes(&self) -> OperationResult {
        let spec = CommandSpec::new("remote", ["remote", "--verbose"]);
        relabel(self.runner.run(&self.handle, &spec), "Remotes retrieved")
    }

    /// What `git clean` would remove. Nothing is deleted.
    pub fn clean_preview(&self) -> OperationResult {
        let spec = CommandSpec::new("clean", ["clean", "--dry-run", "-d"]);
        relabel(self.runner.run(&self.handle, &spec), "Clean preview retrieved")
    }

    /// Housekeeping: pack refs and prune unreachable objects.
    pub fn gc(&self) -> OperationResult {
        let spec = CommandSpec::new("gc", ["gc", "--quiet"]);
        relabel(self.runner.run(&self.handle, &spec), "Garbage collection completed")
    }

    /// Run a catalog tool with its default parameters.
    pub fn run_tool(&self, id: ToolId) -> OperationResult {
        if let Some(tool) = self.tools.find(id) {
            tracing::debug!(tool = tool.name, category = tool.category, "running tool");
        }
        match id {
            ToolId::Status => self.status(),
            ToolId::Log => self.log(DEFAULT_LOG_COUNT),
            ToolId::Branches => self.branches_verbose(),
            ToolId::Remotes => self.remotes(),
            ToolId::Diff => self.diff(false),
            ToolId::Clean => self.clean_preview(),
            ToolId::Gc => self.gc(),
        }
    }
}

fn relabel(result: OperationResult, message: &str) -> OperationResult {
    if result.success() {
        result.with_message(message)
    } else {
        result
    }
}

/// Render raw `git log` records into display lines.
fn render_log(raw: &str, max_count: usize) -> String {
    raw.split(RECORD_SEP)
        .map(|record| record.trim_start_matches(['\n', '\r']))
        .filter(|record| !record.trim().is_empty())
        .take(max_count)
        .map(render_log_record)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_log_record(record: &str) -> String {
    let mut fields = record.splitn(4, FIELD_SEP);
    let (Some(date), Some(author), Some(id), Some(message)) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return record.trim_end().to_string();
    };

    format_log_line(date, author, id, message)
}

/// Format one commit as a log line.
///
/// `date` is strict ISO 8601 (git's `%cI`); anything unparseable is shown
/// as-is. `message` may be the whole commit message; only its first
/// non-empty line is used.
pub fn format_log_line(date: &str, author: &str, id: &str, message: &str) -> String {
    let date = DateTime::parse_from_rfc3339(date.trim())
        .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| date.trim().to_string());

    let author = author.trim();
    let author = if author.is_empty() { "Unknown" } else { author };
    let author = clip(author, AUTHOR_WIDTH);

    let subject = message
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default();

    format!(
        "{} {:<width$} {} {}",
        date,
        author,
        id.trim(),
        clip(subject, SUBJECT_WIDTH),
        width = AUTHOR_WIDTH
    )
    .trim_end()
    .to_string()
}

/// First `max` characters of `s`.
fn clip(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::mock::MockGit;
    use crate::git::RawOutput;
    use std::path::PathBuf;

    fn handle(is_repository: bool) -> RepositoryHandle {
        RepositoryHandle {
            path: "/work/repo".into(),
            absolute_path: PathBuf::from("/work/repo"),
            name: "repo".into(),
            exists: true,
            is_repository,
        }
    }

    fn ops(git: &MockGit) -> Operations<MockGit> {
        Operations::new(handle(true), git.clone())
    }

    fn no_repo_ops(git: &MockGit) -> Operations<MockGit> {
        Operations::new(handle(false), git.clone())
    }

    mod listing {
        use super::*;

        #[test]
        fn branches_sorted_with_prefix_stripped() {
            let git = MockGit::new().on(
                "for-each-ref",
                RawOutput::success("refs/heads/main\nrefs/heads/feature/x\nrefs/heads/develop\n"),
            );

            assert_eq!(
                ops(&git).list_branches(),
                vec!["develop", "feature/x", "main"]
            );
        }

        #[test]
        fn listing_asks_for_the_right_namespace() {
            let git = MockGit::new().on("for-each-ref", RawOutput::success(""));
            let ops = ops(&git);

            ops.list_branches();
            ops.list_tags();

            let calls = git.calls();
            assert_eq!(calls[0].args.last().unwrap(), "refs/heads/");
            assert_eq!(calls[1].args.last().unwrap(), "refs/tags/");
        }

        #[test]
        fn tags_sorted() {
            let git = MockGit::new().on(
                "for-each-ref",
                RawOutput::success("refs/tags/v2.0.0\nrefs/tags/v1.0.0\n"),
            );

            assert_eq!(ops(&git).list_tags(), vec!["v1.0.0", "v2.0.0"]);
        }

        #[test]
        fn listing_is_idempotent() {
            let git = MockGit::new().on(
                "for-each-ref",
                RawOutput::success("refs/heads/b\nrefs/heads/a\n"),
            );
            let ops = ops(&git);

            assert_eq!(ops.list_branches(), ops.list_branches());
        }

        #[test]
        fn empty_without_repository_and_without_calls() {
            let git = MockGit::new();
            let ops = no_repo_ops(&git);

            assert!(ops.list_branches().is_empty());
            assert!(ops.list_tags().is_empty());
            assert_eq!(git.total_calls(), 0);
        }

        #[test]
        fn failure_degrades_to_empty() {
            let git = MockGit::new().on("for-each-ref", RawOutput::failure(128, "fatal"));
            assert!(ops(&git).list_branches().is_empty());
        }
    }

    mod current_branch {
        use super::*;

        #[test]
        fn on_branch() {
            let git = MockGit::new().on("symbolic-ref", RawOutput::success("main\n"));
            assert_eq!(ops(&git).current_branch(), Some("main".to_string()));
        }

        #[test]
        fn detached_head_is_none() {
            let git = MockGit::new().on("symbolic-ref", RawOutput::failure(1, ""));
            assert_eq!(ops(&git).current_branch(), None);
        }

        #[test]
        fn no_repository_is_none() {
            let git = MockGit::new();
            assert_eq!(no_repo_ops(&git).current_branch(), None);
            assert_eq!(git.total_calls(), 0);
        }
    }

    mod checkout {
        use super::*;

        #[test]
        fn success_reports_target() {
            let git = MockGit::new().on("checkout", RawOutput::success(""));

            let result = ops(&git).checkout("v1.0.0");

            assert!(result.success());
            assert_eq!(result.message(), "Successfully checked out v1.0.0");
            assert_eq!(result.target(), Some("v1.0.0"));
            assert_eq!(git.calls()[0].args, vec!["checkout", "v1.0.0", "--"]);
        }

        #[test]
        fn failure_passes_diagnostic_verbatim() {
            let stderr = "error: pathspec 'nope' did not match any file(s) known to git";
            let git = MockGit::new().on("checkout", RawOutput::failure(1, stderr));

            let result = ops(&git).checkout("nope");

            assert!(!result.success());
            assert_eq!(result.message(), format!("Checkout failed: {}", stderr));
            assert!(result.target().is_none());
        }

        #[test]
        fn dirty_tree_is_just_another_failure() {
            let stderr = "error: Your local changes to the following files would be overwritten by checkout:\n\tREADME.md";
            let git = MockGit::new().on("checkout", RawOutput::failure(1, stderr));

            let result = ops(&git).checkout("develop");

            assert!(result.message().starts_with("Checkout failed: error: Your local changes"));
        }

        #[test]
        fn launch_failure_is_checkout_failure() {
            let git = MockGit::new().fail_launch(
                "checkout",
                std::io::ErrorKind::NotFound,
                "No such file or directory",
            );

            let result = ops(&git).checkout("main");

            assert_eq!(result.message(), "Checkout failed: No such file or directory");
        }

        #[test]
        fn no_repository() {
            let git = MockGit::new();

            let result = no_repo_ops(&git).checkout("main");

            assert_eq!(result.message(), "No repository loaded");
            assert!(result.target().is_none());
            assert_eq!(git.total_calls(), 0);
        }

        #[test]
        fn invalid_target_never_reaches_git() {
            let git = MockGit::new();
            let ops = ops(&git);

            for target in ["", "--force", "a b"] {
                let result = ops.checkout(target);
                assert!(!result.success());
                assert!(result.message().starts_with("Checkout failed: invalid target name"));
            }
            assert_eq!(git.total_calls(), 0);
        }
    }

    mod tools {
        use super::*;

        #[test]
        fn status_success_is_relabelled() {
            let git = MockGit::new().on("status", RawOutput::success("## main\n"));

            let result = ops(&git).status();

            assert_eq!(result.message(), "Status retrieved");
            assert_eq!(result.output(), Some("## main"));
        }

        #[test]
        fn failure_message_keeps_exit_code() {
            let git = MockGit::new().on("status", RawOutput::failure(128, "fatal: oops"));

            let result = ops(&git).status();

            assert!(result.message().contains("128"));
            assert_eq!(result.error(), Some("fatal: oops"));
        }

        #[test]
        fn diff_staged_uses_cached() {
            let git = MockGit::new().on("diff", RawOutput::success(""));
            let ops = ops(&git);

            ops.diff(false);
            ops.diff(true);

            let calls = git.calls();
            assert_eq!(calls[0].args, vec!["diff"]);
            assert_eq!(calls[1].args, vec!["diff", "--cached"]);
        }

        #[test]
        fn every_tool_without_repository_fails_fast() {
            let git = MockGit::new();
            let ops = no_repo_ops(&git);

            for tool in ops.all_tools() {
                let result = ops.run_tool(tool.id);
                assert!(!result.success());
                assert_eq!(result.message(), "No repository loaded");
            }
            assert_eq!(git.total_calls(), 0);
        }

        #[test]
        fn run_tool_dispatches_to_matching_command() {
            let git = MockGit::new()
                .on("remote", RawOutput::success("origin\thttps://example.com (fetch)"))
                .on("clean", RawOutput::success("Would remove scratch.txt"))
                .on("gc", RawOutput::success(""));
            let ops = ops(&git);

            assert_eq!(ops.run_tool(ToolId::Remotes).message(), "Remotes retrieved");
            assert_eq!(
                ops.run_tool(ToolId::Clean).output(),
                Some("Would remove scratch.txt")
            );
            assert_eq!(
                ops.run_tool(ToolId::Gc).message(),
                "Garbage collection completed"
            );
            assert_eq!(git.calls()[1].args, vec!["clean", "--dry-run", "-d"]);
        }
    }

    mod log {
        use super::*;

        fn record(date: &str, author: &str, id: &str, message: &str) -> String {
            format!(
                "{date}{FIELD_SEP}{author}{FIELD_SEP}{id}{FIELD_SEP}{message}{RECORD_SEP}\n"
            )
        }

        #[test]
        fn renders_one_line_per_commit() {
            let raw = [
                record("2024-03-01T10:15:00+01:00", "Ada", "abc1234", "Second\n\nbody\n"),
                record("2024-02-28T09:00:00+00:00", "Grace", "def5678", "First\n"),
            ]
            .concat();
            let git = MockGit::new().on("log", RawOutput::success(raw));

            let result = ops(&git).log(15);

            assert_eq!(result.message(), "Log retrieved");
            let lines: Vec<_> = result.output().unwrap().lines().collect();
            assert_eq!(lines.len(), 2);
            assert_eq!(
                lines[0],
                format!("2024-03-01 10:15 {:<22} abc1234 Second", "Ada")
            );
            assert!(lines[1].ends_with("def5678 First"));
        }

        #[test]
        fn passes_max_count_to_git_and_truncates() {
            let raw = (0..5)
                .map(|i| record("2024-01-01T00:00:00Z", "A", &format!("id{i}"), "m"))
                .collect::<String>();
            let git = MockGit::new().on("log", RawOutput::success(raw));

            let result = ops(&git).log(3);

            assert_eq!(result.output().unwrap().lines().count(), 3);
            assert!(git.calls()[0].args.contains(&"--max-count=3".to_string()));
        }

        #[test]
        fn log_failure_passes_through() {
            let git = MockGit::new().on(
                "log",
                RawOutput::failure(128, "fatal: your current branch 'main' does not have any commits yet"),
            );

            let result = ops(&git).log(15);

            assert!(!result.success());
            assert!(result.error().unwrap().contains("does not have any commits"));
        }

        #[test]
        fn empty_history_renders_empty() {
            let git = MockGit::new().on("log", RawOutput::success(""));
            assert_eq!(ops(&git).log(15).output(), Some(""));
        }

        #[test]
        fn clips_author_and_subject() {
            let author = "A".repeat(40);
            let subject = "s".repeat(120);

            let line = format_log_line("2024-01-01T00:00:00Z", &author, "abc1234", &subject);

            assert_eq!(
                line,
                format!("2024-01-01 00:00 {} abc1234 {}", "A".repeat(22), "s".repeat(80))
            );
        }

        #[test]
        fn empty_author_is_unknown() {
            let line = format_log_line("2024-01-01T00:00:00Z", "", "abc1234", "msg");
            assert!(line.contains("Unknown"));
        }

        #[test]
        fn unparseable_date_kept() {
            let line = format_log_line("yesterday", "A", "abc1234", "msg");
            assert!(line.starts_with("yesterday A"));
        }

        #[test]
        fn clip_respects_char_boundaries() {
            assert_eq!(clip("héllo", 2), "hé");
            assert_eq!(clip("hi", 10), "hi");
        }
    }
}
