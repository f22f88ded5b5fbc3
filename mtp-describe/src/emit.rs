//! # Emission Entry Points
//!
//! The public surface of the crate. [`describe`] is the pure core; the rest
//! wires the document into a clap program through the `--mtp-describe`
//! switch.
//!
//! ```rust,no_run
//! use clap::{Arg, Command};
//! use mtp_describe::{DescribeExt, DescribeOptions};
//!
//! let matches = Command::new("greet")
//!     .arg(Arg::new("name").required(true))
//!     .with_describe(DescribeOptions::new().with_version("0.1.0"))
//!     .get_matches();
//! ```

use crate::adapter::CommandTreeAdapter;
use crate::assembler::{assemble, DESCRIBE_ARG_ID};
use crate::error::Result;
use crate::types::{DescribeOptions, ToolSchema};
use clap::{Arg, ArgAction, Command};
use std::ffi::OsStr;
use std::io::Write;

/// Process exit code after a successful describe
pub const EXIT_SUCCESS: i32 = 0;

/// Process exit code when the document could not be produced
pub const EXIT_ERROR: i32 = 1;

/// The command-line switch that requests the document
pub const DESCRIBE_FLAG: &str = "--mtp-describe";

/// Generate the document for any adaptable command tree
///
/// Pure: reads the tree and the options, touches no process state.
///
/// # Errors
///
/// Returns [`crate::DescribeError::Adapter`] when the tree cannot be read and
/// [`crate::DescribeError::Consistency`] when two commands share a path.
pub fn describe<A>(root: &A, options: &DescribeOptions) -> Result<ToolSchema>
where
    A: CommandTreeAdapter + ?Sized,
{
    let tree = root.to_command_tree()?;
    let schema = assemble(&tree, options)?;
    tracing::debug!(
        tool = %schema.name,
        commands = schema.commands.len(),
        "generated tool schema"
    );
    Ok(schema)
}

/// [`describe`] for a clap command
pub fn describe_command(root: &Command, options: &DescribeOptions) -> Result<ToolSchema> {
    describe(root, options)
}

/// Compact JSON, no insignificant whitespace
pub fn to_json(schema: &ToolSchema) -> Result<String> {
    Ok(serde_json::to_string(schema)?)
}

/// Indented JSON for humans
pub fn to_json_pretty(schema: &ToolSchema) -> Result<String> {
    Ok(serde_json::to_string_pretty(schema)?)
}

/// The `--mtp-describe` argument, available on every subcommand
pub fn describe_arg() -> Arg {
    Arg::new(DESCRIBE_ARG_ID)
        .long("mtp-describe")
        .action(ArgAction::SetTrue)
        .global(true)
        .help("Output machine-readable MTP JSON schema")
}

/// Add [`describe_arg`] unless the command already defines it
pub fn ensure_describe_arg(root: Command) -> Command {
    let present = root
        .get_arguments()
        .any(|arg| arg.get_id().as_str() == DESCRIBE_ARG_ID);
    if present {
        root
    } else {
        root.arg(describe_arg())
    }
}

/// Whether the argument vector asks for the document
///
/// The first element is the program name. Anything after a `--` terminator is
/// a literal value and never triggers.
pub fn is_describe_requested<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    args.into_iter()
        .skip(1)
        .take_while(|arg| arg.as_ref() != OsStr::new("--"))
        .any(|arg| arg.as_ref() == OsStr::new(DESCRIBE_FLAG))
}

/// Write the compact document and a newline when `args` request it
///
/// # Returns
///
/// `true` when the document was written, `false` when it was not requested.
///
/// # Errors
///
/// Fails when the document cannot be generated or written.
pub fn write_describe_if_requested<A, I, S, W>(
    root: &A,
    options: &DescribeOptions,
    args: I,
    writer: &mut W,
) -> Result<bool>
where
    A: CommandTreeAdapter + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
    W: Write,
{
    if !is_describe_requested(args) {
        return Ok(false);
    }

    let json = to_json(&describe(root, options)?)?;
    writeln!(writer, "{json}")?;
    writer.flush()?;
    Ok(true)
}

/// Make a clap program self-describing
///
/// Adds the `--mtp-describe` switch. When the process arguments contain it,
/// the document is printed to stdout and the process exits with
/// [`EXIT_SUCCESS`] before the caller parses anything; on failure the error
/// goes to stderr and the process exits with [`EXIT_ERROR`]. Otherwise the
/// returned command is the input plus one optional flag.
pub fn with_describe(root: Command, options: DescribeOptions) -> Command {
    let root = ensure_describe_arg(root);

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    match write_describe_if_requested(&root, &options, std::env::args_os(), &mut handle) {
        Ok(false) => root,
        Ok(true) => std::process::exit(EXIT_SUCCESS),
        Err(err) => {
            tracing::error!(error = %err, "failed to describe command tree");
            eprintln!("Error: {err}");
            std::process::exit(EXIT_ERROR)
        }
    }
}

/// Chaining form of the entry points for `clap::Command`
pub trait DescribeExt {
    /// See [`with_describe`]
    fn with_describe(self, options: DescribeOptions) -> Command;

    /// See [`describe_command`]
    fn describe_schema(&self, options: &DescribeOptions) -> Result<ToolSchema>;
}

impl DescribeExt for Command {
    fn with_describe(self, options: DescribeOptions) -> Command {
        with_describe(self, options)
    }

    fn describe_schema(&self, options: &DescribeOptions) -> Result<ToolSchema> {
        describe_command(self, options)
    }
}
