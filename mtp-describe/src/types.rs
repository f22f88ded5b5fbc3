//! Document and annotation types
//!
//! [`ToolSchema`] is the emitted document. [`DescribeOptions`] and
//! [`CommandAnnotation`] carry the human-supplied data that the command tree
//! cannot express (stream descriptors, examples, auth metadata).
//!
//! Every field has exactly one key spelling, used for both input and output.
//! Stream descriptors use `contentType`; annotation maps use `arg_types` and
//! `arg_descriptions`. Unknown keys in either are rejected so that a
//! misspelled annotation fails loudly instead of vanishing.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Protocol revision stamped into every document as `specVersion`
pub const MTP_SPEC_VERSION: &str = "2026-02-07";

/// Semantic type of a command-line argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgType {
    String,
    Integer,
    Number,
    Boolean,
    Enum,
    Array,
    Path,
}

impl ArgType {
    /// The wire spelling of this type
    pub fn as_str(self) -> &'static str {
        match self {
            ArgType::String => "string",
            ArgType::Integer => "integer",
            ArgType::Number => "number",
            ArgType::Boolean => "boolean",
            ArgType::Enum => "enum",
            ArgType::Array => "array",
            ArgType::Path => "path",
        }
    }
}

impl fmt::Display for ArgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Describes what a command reads from stdin or writes to stdout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct IODescriptor {
    /// MIME type of the stream content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// JSON-Schema shape of the payload, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
}

impl IODescriptor {
    /// Create a descriptor for the given content type
    pub fn new(content_type: impl Into<String>) -> Self {
        Self {
            content_type: Some(content_type.into()),
            ..Default::default()
        }
    }

    /// Set the human description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach a JSON-Schema payload descriptor
    pub fn with_schema(mut self, schema: Value) -> Self {
        self.schema = Some(schema);
        self
    }
}

/// A literal invocation of the tool with an explanation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub description: String,
    pub command: String,

    /// Sample output of the invocation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl Example {
    /// Create an example without sample output
    pub fn new(description: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            command: command.into(),
            output: None,
        }
    }

    /// Attach sample output
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }
}

/// Authentication metadata, passed through to the document unchanged
///
/// Keys in `extra` are flattened into the emitted auth object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(rename = "type")]
    pub auth_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl AuthConfig {
    /// Create an auth block of the given type
    pub fn new(auth_type: impl Into<String>) -> Self {
        Self {
            auth_type: auth_type.into(),
            description: None,
            extra: BTreeMap::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a provider-specific field
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// Human-supplied data for one command path
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommandAnnotation {
    /// Per-parameter type overrides, keyed by parameter name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub arg_types: BTreeMap<String, ArgType>,

    /// Per-parameter descriptions, keyed by parameter name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub arg_descriptions: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stdin: Option<IODescriptor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stdout: Option<IODescriptor>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Example>,
}

impl CommandAnnotation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the inferred type of a parameter
    pub fn with_arg_type(mut self, name: impl Into<String>, arg_type: ArgType) -> Self {
        self.arg_types.insert(name.into(), arg_type);
        self
    }

    /// Describe a parameter
    pub fn with_arg_description(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.arg_descriptions.insert(name.into(), description.into());
        self
    }

    pub fn with_stdin(mut self, stdin: IODescriptor) -> Self {
        self.stdin = Some(stdin);
        self
    }

    pub fn with_stdout(mut self, stdout: IODescriptor) -> Self {
        self.stdout = Some(stdout);
        self
    }

    /// Append an example; order is preserved in the document
    pub fn with_example(mut self, example: Example) -> Self {
        self.examples.push(example);
        self
    }
}

/// Everything the caller supplies besides the command tree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescribeOptions {
    /// Tool version reported in the document
    #[serde(default)]
    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<AuthConfig>,

    /// Annotations keyed by command path
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub commands: BTreeMap<String, CommandAnnotation>,
}

impl DescribeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_auth(mut self, auth: AuthConfig) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Annotate the command at `path`, replacing any earlier annotation for it
    pub fn with_command(mut self, path: impl Into<String>, annotation: CommandAnnotation) -> Self {
        self.commands.insert(path.into(), annotation);
        self
    }

    /// Look up the annotation for an exact command path
    pub fn annotation(&self, path: &str) -> Option<&CommandAnnotation> {
        self.commands.get(path)
    }
}

/// One argument entry in the document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgDescriptor {
    /// `--long`/`-s` for options, the argument name for positionals
    pub name: String,

    #[serde(rename = "type")]
    pub arg_type: ArgType,

    pub description: String,

    pub required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    /// Allowed literals when `arg_type` is [`ArgType::Enum`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

/// The resolved description of one leaf command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandDescriptor {
    pub description: String,

    pub args: Vec<ArgDescriptor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stdin: Option<IODescriptor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stdout: Option<IODescriptor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<Example>>,
}

/// The emitted self-description of a tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolSchema {
    pub name: String,
    pub version: String,
    pub description: String,
    pub spec_version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<AuthConfig>,

    /// Leaf commands keyed by path, in command tree pre-order
    pub commands: IndexMap<String, CommandDescriptor>,
}

impl ToolSchema {
    /// Look up a command by its path
    pub fn command(&self, path: &str) -> Option<&CommandDescriptor> {
        self.commands.get(path)
    }

    /// All command paths in document order
    pub fn command_paths(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }
}
