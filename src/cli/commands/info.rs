//! info command - Show the resolved repository handle

use anyhow::Result;
use serde::Serialize;

use crate::cli::Context;
use crate::core::types::RepositoryHandle;
use crate::ui::output;

#[derive(Serialize)]
struct InfoView<'a> {
    #[serde(flatten)]
    handle: &'a RepositoryHandle,
    current_branch: Option<String>,
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Show what the path resolved to.
///
/// Describing a directory that is not a repository is not a failure.
pub fn info(ctx: &Context) -> Result<bool> {
    let handle = ctx.ops.handle();
    let current_branch = ctx.ops.current_branch();

    if ctx.json {
        output::json(&InfoView {
            handle,
            current_branch,
        })?;
        return Ok(true);
    }

    let branch = match (&current_branch, handle.is_repository) {
        (Some(name), _) => name.as_str(),
        (None, true) => "(detached or unborn)",
        (None, false) => "-",
    };

    let lines = [
        format!("Path:        {}", handle.path),
        format!("Absolute:    {}", handle.absolute_path.display()),
        format!("Name:        {}", handle.name),
        format!("Exists:      {}", yes_no(handle.exists)),
        format!("Repository:  {}", yes_no(handle.is_repository)),
        format!("Branch:      {}", branch),
    ];
    output::print(lines.join("\n"), ctx.verbosity);
    Ok(true)
}
