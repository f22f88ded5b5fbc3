//! # filetool
//!
//! A small file conversion tool that describes itself. Running
//! `filetool --mtp-describe` prints the MTP document for every subcommand;
//! without the switch the tool behaves as usual.
//!
//! Annotations are declared in [`describe_options`] and can be extended or
//! overridden by `.mtp/describe.*` files and `MTP_DESCRIBE_*` variables.

pub mod cli;
pub mod commands;
pub mod logging;

pub use cli::{Cli, Commands};

use clap::{Command, CommandFactory};
use mtp_describe::{CommandAnnotation, DescribeOptions, Example, IODescriptor};

/// Tool version reported in the document
pub const VERSION: &str = "1.2.0";

/// The clap command tree for `filetool`
pub fn build_command() -> Command {
    Cli::command()
}

/// Annotations compiled into the binary
pub fn describe_options() -> DescribeOptions {
    DescribeOptions::new()
        .with_version(VERSION)
        .with_command(
            "convert",
            CommandAnnotation::new()
                .with_arg_description("input", "Input file path")
                .with_stdin(
                    IODescriptor::new("text/plain")
                        .with_description("Raw input data (alternative to file path)"),
                )
                .with_stdout(
                    IODescriptor::new("application/json").with_description("Converted output"),
                )
                .with_example(Example::new(
                    "Convert a CSV file to JSON",
                    "filetool convert data.csv --format json --pretty",
                ))
                .with_example(Example::new(
                    "Pipe from stdin",
                    "cat data.csv | filetool convert - --format yaml",
                )),
        )
        .with_command(
            "validate",
            CommandAnnotation::new()
                .with_arg_description("input", "File to validate")
                .with_example(
                    Example::new("Validate a JSON file", "filetool validate config.json")
                        .with_output(r#"{"valid": true, "errors": []}"#),
                ),
        )
}

/// Compiled-in annotations layered with annotation files and environment
///
/// A broken annotation source is reported and the compiled-in annotations
/// are used alone.
pub fn load_describe_options() -> DescribeOptions {
    match mtp_describe_config::load_options(describe_options()) {
        Ok(options) => options,
        Err(err) => {
            tracing::warn!(error = %err, "ignoring annotation sources");
            describe_options()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mtp_describe::{describe_command, ArgType};

    #[test]
    fn test_cli_definition_is_valid() {
        build_command().debug_assert();
    }

    #[test]
    fn test_filetool_schema() {
        let schema = describe_command(&build_command(), &describe_options()).unwrap();
        assert_eq!(schema.name, "filetool");
        assert_eq!(schema.version, VERSION);
        assert_eq!(
            schema.description,
            "Convert and validate files between formats"
        );
        assert_eq!(
            schema.command_paths().collect::<Vec<_>>(),
            vec!["convert", "validate"]
        );

        let convert = schema.command("convert").unwrap();
        assert_eq!(
            convert.description,
            "Convert a file from one format to another"
        );
        let names: Vec<&str> = convert.args.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["input", "--format", "--pretty"]);
        assert_eq!(convert.args[0].description, "Input file path");
        assert!(convert.args[0].required);
        assert_eq!(convert.args[1].arg_type, ArgType::String);
        assert_eq!(convert.args[1].default, Some(serde_json::json!("json")));
        assert_eq!(convert.args[2].arg_type, ArgType::Boolean);
        assert_eq!(convert.examples.as_ref().map(Vec::len), Some(2));

        let validate = schema.command("validate").unwrap();
        assert_eq!(
            validate.args[1].description,
            "Enable strict validation mode"
        );
        assert!(validate.stdin.is_none());
    }
}
