//! # Command Tree Adapter
//!
//! Reads a framework-owned command tree and produces a uniform, read-only
//! [`CommandNode`] tree. Everything downstream (type inference, path
//! resolution, annotation merging, assembly) works on this representation
//! only and never touches framework internals.
//!
//! ## Key Components
//!
//! - [`CommandTreeAdapter`]: the narrow interface implemented once per CLI framework
//! - [`CommandNode`] / [`ParameterNode`]: the normalized tree
//! - [`clap_command`]: the adapter for `clap::Command`
//!
//! Hidden commands and parameters are kept in the tree. Filtering is the
//! assembler's job, so that every node keeps a well-defined position.
//!
//! ## Hand-built trees
//!
//! `CommandNode` implements [`CommandTreeAdapter`] itself, so trees from other
//! frameworks can be built directly:
//!
//! ```rust
//! use mtp_describe::adapter::{CommandNode, ParameterNode, ValueMarker};
//! use mtp_describe::{describe, DescribeOptions};
//!
//! let tree = CommandNode::new("tool").with_child(
//!     CommandNode::new("serve").with_parameter(
//!         ParameterNode::option("port", "--port").with_value(ValueMarker::Integer),
//!     ),
//! );
//! let schema = describe(&tree, &DescribeOptions::default()).unwrap();
//! assert!(schema.command("serve").is_some());
//! ```

pub mod clap_command;

use crate::error::AdapterError;

/// Whether a parameter is positional or a named option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKind {
    Positional,
    Option,
}

/// The value type a framework declared for a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValueMarker {
    /// Untyped textual input
    #[default]
    Text,
    /// Integer, including bounded integer ranges
    Integer,
    /// Floating point, including bounded float ranges
    Float,
    /// A value parsed as a boolean (distinct from a presence flag)
    Boolean,
    /// A filesystem path
    Path,
}

/// How many times, and in what shape, a parameter may occur
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Occurrence {
    /// One value
    #[default]
    Single,
    /// A pure presence switch taking no value
    Flag,
    /// Counts occurrences (`-vvv`)
    Count,
    /// Repeated or variadic, zero or more values
    Multiple,
}

/// A normalized parameter declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterNode {
    /// Framework name of the parameter; annotation maps are keyed by it
    pub id: String,

    /// Name shown in the document: `--long`, `-s` or the positional name
    pub display_name: String,

    pub kind: ParameterKind,

    /// Framework help text
    pub help: Option<String>,

    pub value: ValueMarker,

    pub occurrence: Occurrence,

    /// Closed set of allowed literals, in declaration order
    pub choices: Option<Vec<String>>,

    pub hidden: bool,

    /// Required-ness as the framework declared it. The document additionally
    /// treats a positional without defaults as required.
    pub required: bool,

    /// Declared default literals
    pub defaults: Vec<String>,

    /// The framework's own help or version switch
    pub reserved: bool,
}

impl ParameterNode {
    fn new(id: impl Into<String>, display_name: impl Into<String>, kind: ParameterKind) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            kind,
            help: None,
            value: ValueMarker::Text,
            occurrence: Occurrence::Single,
            choices: None,
            hidden: false,
            required: false,
            defaults: Vec::new(),
            reserved: false,
        }
    }

    /// A positional argument; its display name is its id
    pub fn positional(id: impl Into<String>) -> Self {
        let id = id.into();
        Self::new(id.clone(), id, ParameterKind::Positional)
    }

    /// A named option shown as `display_name` (e.g. `--format`)
    pub fn option(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self::new(id, display_name, ParameterKind::Option)
    }

    /// A boolean presence switch
    pub fn flag(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self::option(id, display_name).with_occurrence(Occurrence::Flag)
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn with_value(mut self, value: ValueMarker) -> Self {
        self.value = value;
        self
    }

    pub fn with_occurrence(mut self, occurrence: Occurrence) -> Self {
        self.occurrence = occurrence;
        self
    }

    /// Restrict the parameter to a closed set of literals
    pub fn with_choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.choices = Some(choices.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.defaults.push(default.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Mark as the framework's own help/version switch
    pub fn reserved(mut self) -> Self {
        self.reserved = true;
        self
    }

    pub fn is_positional(&self) -> bool {
        self.kind == ParameterKind::Positional
    }
}

/// A normalized command: either a leaf or a group of child commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandNode {
    pub name: String,

    /// Framework help text for the command
    pub description: Option<String>,

    pub hidden: bool,

    /// Ignored for schema purposes when the node has visible children
    pub parameters: Vec<ParameterNode>,

    pub children: Vec<CommandNode>,
}

impl CommandNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            hidden: false,
            parameters: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_parameter(mut self, parameter: ParameterNode) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_child(mut self, child: CommandNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }

    /// Check that every node and parameter is addressable
    fn validate(&self) -> Result<(), AdapterError> {
        for parameter in &self.parameters {
            if parameter.id.is_empty() {
                return Err(AdapterError::EmptyParameterId {
                    command: self.name.clone(),
                });
            }
        }
        for child in &self.children {
            if child.name.is_empty() {
                return Err(AdapterError::EmptyCommandName {
                    parent: self.name.clone(),
                });
            }
            child.validate()?;
        }
        Ok(())
    }
}

/// Read-only introspection surface over a framework's command tree
///
/// Implement this once per CLI framework. The returned tree must have the
/// same topology as the framework tree and keep hidden nodes.
pub trait CommandTreeAdapter {
    /// Produce the normalized tree rooted at this command
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError`] when the tree lacks something the schema needs,
    /// such as a name or a describable parameter action.
    fn to_command_tree(&self) -> Result<CommandNode, AdapterError>;
}

impl CommandTreeAdapter for CommandNode {
    fn to_command_tree(&self) -> Result<CommandNode, AdapterError> {
        self.validate()?;
        Ok(self.clone())
    }
}

impl<T: CommandTreeAdapter + ?Sized> CommandTreeAdapter for &T {
    fn to_command_tree(&self) -> Result<CommandNode, AdapterError> {
        (**self).to_command_tree()
    }
}
