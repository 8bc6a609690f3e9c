//! tool commands - status, log, diff, remotes, clean, gc, and the catalog

use anyhow::Result;
use serde::Serialize;

use crate::cli::Context;
use crate::core::types::OperationResult;
use crate::ops::{ToolDescriptor, ToolId};
use crate::ui::output;

/// Shown instead of a blank line when a tool had nothing to report.
fn empty_text(id: ToolId) -> Option<&'static str> {
    match id {
        ToolId::Status => Some("No changes"),
        ToolId::Log => Some("No commits"),
        ToolId::Branches => Some("No branches found"),
        ToolId::Remotes => Some("No remotes configured"),
        ToolId::Diff => Some("No differences"),
        ToolId::Clean => Some("Nothing to clean"),
        ToolId::Gc => None,
    }
}

fn show(ctx: &Context, id: ToolId, result: &OperationResult) -> Result<bool> {
    if ctx.json {
        output::json(result)?;
        return Ok(result.success());
    }
    Ok(output::report(result, empty_text(id), ctx.verbosity))
}

/// Run a catalog tool with its default parameters.
pub fn run_tool(ctx: &Context, id: ToolId) -> Result<bool> {
    let result = ctx.ops.run_tool(id);
    show(ctx, id, &result)
}

/// Show recent commits; without `-n` the count comes from configuration.
pub fn log(ctx: &Context, max_count: Option<usize>) -> Result<bool> {
    let count = max_count.unwrap_or_else(|| ctx.config.log_max_count());
    let result = ctx.ops.log(count);
    show(ctx, ToolId::Log, &result)
}

/// Show unstaged or staged changes.
pub fn diff(ctx: &Context, staged: bool) -> Result<bool> {
    let result = ctx.ops.diff(staged);
    show(ctx, ToolId::Diff, &result)
}

#[derive(Serialize)]
struct CategoryView<'a> {
    category: &'static str,
    tools: Vec<&'a ToolDescriptor>,
}

/// List the tool catalog grouped by category.
pub fn tools(ctx: &Context) -> Result<bool> {
    let groups = ctx.ops.by_category();

    if ctx.json {
        let view: Vec<CategoryView<'_>> = groups
            .into_iter()
            .map(|(category, tools)| CategoryView { category, tools })
            .collect();
        output::json(&view)?;
        return Ok(true);
    }

    let mut lines = Vec::new();
    for (category, tools) in groups {
        lines.push(format!("{}:", category));
        for tool in tools.iter().filter(|t| t.enabled) {
            lines.push(format!("  {:<20} {}", tool.name, tool.description));
        }
    }
    output::print(lines.join("\n"), ctx.verbosity);
    Ok(true)
}
