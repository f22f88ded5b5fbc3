//! # Schema Assembler
//!
//! Walks the resolved leaves, drops everything that must not reach an agent
//! (hidden parameters, the framework's own help and version switches, the
//! describe trigger itself) and builds the final [`ToolSchema`].

use crate::adapter::{CommandNode, ParameterNode};
use crate::error::SchemaConsistencyError;
use crate::merge::{first_line, merge_command};
use crate::paths::resolve_leaves;
use crate::types::{DescribeOptions, ToolSchema, MTP_SPEC_VERSION};
use indexmap::IndexMap;

/// Id of the `--mtp-describe` trigger argument
pub const DESCRIBE_ARG_ID: &str = "mtp_describe";

/// Parameter ids never emitted in a document
pub const RESERVED_PARAMETER_IDS: &[&str] = &["help", "version", DESCRIBE_ARG_ID];

/// Whether a parameter belongs in the document
pub fn is_describable(param: &ParameterNode) -> bool {
    !param.hidden && !param.reserved && !RESERVED_PARAMETER_IDS.contains(&param.id.as_str())
}

/// The parameters of a command that appear in its document entry
///
/// Positionals come first, then options, each in declaration order.
pub fn describable_parameters(node: &CommandNode) -> Vec<&ParameterNode> {
    let (positionals, options): (Vec<&ParameterNode>, Vec<&ParameterNode>) = node
        .parameters
        .iter()
        .filter(|param| is_describable(param))
        .partition(|param| param.is_positional());

    positionals.into_iter().chain(options).collect()
}

/// Build the document for a normalized command tree
///
/// # Errors
///
/// Returns [`SchemaConsistencyError::DuplicatePath`] when two leaves share a
/// path.
pub fn assemble(
    root: &CommandNode,
    options: &DescribeOptions,
) -> Result<ToolSchema, SchemaConsistencyError> {
    let mut commands = IndexMap::new();

    for resolved in resolve_leaves(root)? {
        let annotation = options.annotation(&resolved.path);
        let descriptor = merge_command(&resolved, annotation);
        if commands.insert(resolved.path.clone(), descriptor).is_some() {
            return Err(SchemaConsistencyError::DuplicatePath {
                path: resolved.path,
            });
        }
    }

    for path in options.commands.keys() {
        if !commands.contains_key(path) {
            tracing::warn!(command = %path, "annotation for unknown command path; ignoring it");
        }
    }

    Ok(ToolSchema {
        name: root.name.clone(),
        version: options.version.clone(),
        description: first_line(root.description.as_deref())
            .unwrap_or_default()
            .to_string(),
        spec_version: MTP_SPEC_VERSION.to_string(),
        auth: options.auth.clone(),
        commands,
    })
}
