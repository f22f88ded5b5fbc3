//! # mtp-describe
//!
//! Turns an existing command-line program into a self-describing tool. The
//! command tree the program already declares is read through a
//! [`CommandTreeAdapter`], argument types are inferred from the framework's
//! own declarations, optional human annotations are merged on top, and the
//! result is emitted as a single JSON document in the MTP format.
//!
//! ## Pipeline
//!
//! 1. [`adapter`]: framework tree to normalized [`adapter::CommandNode`]s
//! 2. [`inference`]: semantic type per parameter
//! 3. [`paths`]: canonical space-joined paths for leaf commands
//! 4. [`merge`]: inferred data plus [`CommandAnnotation`]s
//! 5. [`assembler`]: filtering, ordering and the final [`ToolSchema`]
//! 6. [`emit`]: `describe`, JSON encoding and the `--mtp-describe` switch
//!
//! ## Usage
//!
//! ```rust
//! use clap::{Arg, ArgAction, Command};
//! use mtp_describe::{describe_command, CommandAnnotation, DescribeOptions, IODescriptor};
//!
//! let cli = Command::new("filetool").subcommand(
//!     Command::new("validate")
//!         .about("Validate a file")
//!         .arg(Arg::new("input").required(true))
//!         .arg(Arg::new("strict").long("strict").action(ArgAction::SetTrue)),
//! );
//!
//! let options = DescribeOptions::new().with_version("1.2.0").with_command(
//!     "validate",
//!     CommandAnnotation::new()
//!         .with_arg_description("input", "File to validate")
//!         .with_stdout(IODescriptor::new("application/json")),
//! );
//!
//! let schema = describe_command(&cli, &options).unwrap();
//! let validate = schema.command("validate").unwrap();
//! assert_eq!(validate.args[0].description, "File to validate");
//! assert_eq!(validate.args[1].name, "--strict");
//! ```

pub mod adapter;
pub mod assembler;
pub mod emit;
pub mod error;
pub mod inference;
pub mod merge;
pub mod paths;
pub mod types;

pub use adapter::{CommandNode, CommandTreeAdapter, ParameterNode};
pub use assembler::DESCRIBE_ARG_ID;
pub use emit::{
    describe, describe_arg, describe_command, is_describe_requested, to_json, to_json_pretty,
    with_describe, write_describe_if_requested, DescribeExt, DESCRIBE_FLAG, EXIT_ERROR,
    EXIT_SUCCESS,
};
pub use error::{AdapterError, DescribeError, Result, SchemaConsistencyError};
pub use paths::ROOT_COMMAND_NAME;
pub use types::{
    ArgDescriptor, ArgType, AuthConfig, CommandAnnotation, CommandDescriptor, DescribeOptions,
    Example, IODescriptor, ToolSchema, MTP_SPEC_VERSION,
};
