//! # Command Path Resolver
//!
//! Assigns every describable command a canonical path: the names from the
//! root's child down to the leaf, joined by single spaces. The root's own name
//! never appears. A tool without subcommands has exactly one command, named
//! [`ROOT_COMMAND_NAME`].
//!
//! Hidden commands are pruned here together with their whole subtree. A group
//! left with no visible children is described as a leaf under its own path.

use crate::adapter::CommandNode;
use crate::error::SchemaConsistencyError;
use std::collections::HashSet;

/// Path of the only command of a single-command tool
pub const ROOT_COMMAND_NAME: &str = "_root";

/// A leaf command together with its resolved path
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCommand<'a> {
    pub path: String,
    pub node: &'a CommandNode,
}

/// Resolve all leaf commands in tree pre-order
///
/// # Errors
///
/// Returns [`SchemaConsistencyError::DuplicatePath`] when two leaves resolve to
/// the same path, which can only happen with names containing spaces.
pub fn resolve_leaves(
    root: &CommandNode,
) -> Result<Vec<ResolvedCommand<'_>>, SchemaConsistencyError> {
    let mut resolved = Vec::new();
    collect_leaves(root, None, &mut resolved);
    ensure_unique(&resolved)?;

    tracing::debug!(count = resolved.len(), "resolved command paths");
    Ok(resolved)
}

fn collect_leaves<'a>(
    node: &'a CommandNode,
    path: Option<String>,
    resolved: &mut Vec<ResolvedCommand<'a>>,
) {
    let mut visible = node
        .children
        .iter()
        .filter(|child| !child.hidden)
        .peekable();

    if visible.peek().is_none() {
        let path = path.unwrap_or_else(|| ROOT_COMMAND_NAME.to_string());
        tracing::trace!(%path, "leaf command");
        resolved.push(ResolvedCommand { path, node });
        return;
    }

    for child in visible {
        let child_path = match &path {
            Some(parent) => format!("{parent} {}", child.name),
            None => child.name.clone(),
        };
        collect_leaves(child, Some(child_path), resolved);
    }
}

fn ensure_unique(resolved: &[ResolvedCommand<'_>]) -> Result<(), SchemaConsistencyError> {
    let mut seen = HashSet::new();
    for command in resolved {
        if !seen.insert(command.path.as_str()) {
            return Err(SchemaConsistencyError::DuplicatePath {
                path: command.path.clone(),
            });
        }
    }
    Ok(())
}
