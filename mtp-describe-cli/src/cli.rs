//! CLI definition for `filetool`.

use clap::{Parser, Subcommand};

/// Convert and validate files between formats
#[derive(Parser, Debug)]
#[command(name = "filetool")]
#[command(about = "Convert and validate files between formats")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a file from one format to another
    Convert {
        input: String,

        /// Output format
        #[arg(long = "format", default_value = "json")]
        fmt: String,

        /// Pretty-print output
        #[arg(long)]
        pretty: bool,
    },
    /// Check if a file is well-formed and valid
    Validate {
        input: String,

        /// Enable strict validation mode
        #[arg(long)]
        strict: bool,
    },
}
