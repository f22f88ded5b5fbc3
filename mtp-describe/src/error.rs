//! Error types for command tree introspection and schema generation

use thiserror::Error;

/// Raised when a command tree does not expose the surface the adapter needs
///
/// These are construction-time mistakes in the tool being described, never
/// runtime conditions, so callers should report them and stop.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AdapterError {
    /// A command below `parent` has an empty name and cannot be addressed
    #[error("Command under '{parent}' has an empty name")]
    EmptyCommandName { parent: String },

    /// A parameter on `command` has an empty identifier
    #[error("Parameter on command '{command}' has an empty id")]
    EmptyParameterId { command: String },

    /// The framework declared an action the adapter does not know how to describe
    #[error("Parameter '{parameter}' on command '{command}' uses unsupported action {action}")]
    UnsupportedAction {
        command: String,
        parameter: String,
        action: String,
    },
}

/// Raised when the assembled document would violate its own invariants
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaConsistencyError {
    /// Two leaf commands resolved to the same path
    #[error("Command path '{path}' is produced by more than one command")]
    DuplicatePath { path: String },
}

/// Umbrella error for the public entry points
#[derive(Debug, Error)]
pub enum DescribeError {
    /// The command tree could not be read
    #[error("Command tree adapter error: {0}")]
    Adapter(#[from] AdapterError),

    /// The generated schema is internally inconsistent
    #[error("Schema consistency error: {0}")]
    Consistency(#[from] SchemaConsistencyError),

    /// The document could not be serialized
    #[error("Failed to serialize schema: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The document could not be written
    #[error("Failed to write schema: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, DescribeError>;
