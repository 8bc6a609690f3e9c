//! branches and tags commands - List checkout targets

use anyhow::Result;
use serde::Serialize;

use crate::cli::Context;
use crate::git::NO_REPOSITORY;
use crate::ui::output;

#[derive(Serialize)]
struct BranchesView<'a> {
    branches: &'a [String],
    current: Option<&'a str>,
}

#[derive(Serialize)]
struct TagsView<'a> {
    tags: &'a [String],
}

/// Listing without a repository is reported, not shown as empty.
fn require_repository(ctx: &Context) -> bool {
    if ctx.ops.handle().is_repository {
        return true;
    }
    output::error(NO_REPOSITORY);
    false
}

/// List local branches, or git's own `branch --all` listing with `verbose`.
pub fn branches(ctx: &Context, verbose: bool) -> Result<bool> {
    if verbose {
        let result = ctx.ops.branches_verbose();
        if ctx.json {
            output::json(&result)?;
            return Ok(result.success());
        }
        return Ok(output::report(&result, None, ctx.verbosity));
    }

    if !require_repository(ctx) {
        return Ok(false);
    }

    let branches = ctx.ops.list_branches();
    let current = ctx.ops.current_branch();

    if ctx.json {
        output::json(&BranchesView {
            branches: &branches,
            current: current.as_deref(),
        })?;
    } else if branches.is_empty() {
        output::print("No branches found", ctx.verbosity);
    } else {
        output::print(
            output::format_branches(&branches, current.as_deref()),
            ctx.verbosity,
        );
    }
    Ok(true)
}

/// List tags.
pub fn tags(ctx: &Context) -> Result<bool> {
    if !require_repository(ctx) {
        return Ok(false);
    }

    let tags = ctx.ops.list_tags();

    if ctx.json {
        output::json(&TagsView { tags: &tags })?;
    } else if tags.is_empty() {
        output::print("No tags found", ctx.verbosity);
    } else {
        output::print(output::format_list(&tags, ""), ctx.verbosity);
    }
    Ok(true)
}
