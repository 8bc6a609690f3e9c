//! ops::tools
//!
//! Static catalog of the operations a front end can offer in a menu.
//!
//! The catalog carries no execution logic. Each [`ToolId`] has exactly one
//! arm in [`Operations::run_tool`](crate::ops::Operations::run_tool); adding
//! a tool means adding a descriptor here and an arm there, and the
//! exhaustive match makes forgetting the second half a compile error.

use serde::Serialize;

/// Identifies a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolId {
    Status,
    Log,
    Branches,
    Remotes,
    Diff,
    Clean,
    Gc,
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolDescriptor {
    pub id: ToolId,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub enabled: bool,
}

pub const CATEGORY_INFORMATION: &str = "Information";
pub const CATEGORY_ANALYSIS: &str = "Analysis";
pub const CATEGORY_MAINTENANCE: &str = "Maintenance";

static TOOLS: [ToolDescriptor; 7] = [
    ToolDescriptor {
        id: ToolId::Status,
        name: "Git Status",
        description: "Show the working tree status",
        category: CATEGORY_INFORMATION,
        enabled: true,
    },
    ToolDescriptor {
        id: ToolId::Log,
        name: "Git Log",
        description: "Show commit logs",
        category: CATEGORY_INFORMATION,
        enabled: true,
    },
    ToolDescriptor {
        id: ToolId::Branches,
        name: "List Branches",
        description: "List all branches",
        category: CATEGORY_INFORMATION,
        enabled: true,
    },
    ToolDescriptor {
        id: ToolId::Remotes,
        name: "List Remotes",
        description: "List configured remotes",
        category: CATEGORY_INFORMATION,
        enabled: true,
    },
    ToolDescriptor {
        id: ToolId::Diff,
        name: "Git Diff",
        description: "Show changes between commits",
        category: CATEGORY_ANALYSIS,
        enabled: true,
    },
    ToolDescriptor {
        id: ToolId::Clean,
        name: "Git Clean (dry run)",
        description: "Preview untracked files that clean would remove",
        category: CATEGORY_MAINTENANCE,
        enabled: true,
    },
    ToolDescriptor {
        id: ToolId::Gc,
        name: "Git GC",
        description: "Clean up unnecessary files and optimize the repository",
        category: CATEGORY_MAINTENANCE,
        enabled: true,
    },
];

/// Read-only view over the catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolRegistry;

impl ToolRegistry {
    pub fn new() -> Self {
        Self
    }

    /// Every tool in catalog order.
    pub fn all_tools(&self) -> &'static [ToolDescriptor] {
        &TOOLS
    }

    /// Tools grouped by category.
    ///
    /// Categories appear in first-seen order; tools keep catalog order
    /// inside their category.
    pub fn by_category(&self) -> Vec<(&'static str, Vec<&'static ToolDescriptor>)> {
        group_by_category(self.all_tools())
    }

    pub fn find(&self, id: ToolId) -> Option<&'static ToolDescriptor> {
        TOOLS.iter().find(|t| t.id == id)
    }
}

/// Group `tools` by category, preserving first-seen category order.
pub fn group_by_category<'a>(
    tools: &'a [ToolDescriptor],
) -> Vec<(&'static str, Vec<&'a ToolDescriptor>)> {
    let mut groups: Vec<(&'static str, Vec<&'a ToolDescriptor>)> = Vec::new();
    for tool in tools {
        match groups.iter_mut().find(|(category, _)| *category == tool.category) {
            Some((_, members)) => members.push(tool),
            None => groups.push((tool.category, vec![tool])),
        }
    }
    groups
}
