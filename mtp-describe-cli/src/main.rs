//! filetool - convert and validate files.
//!
//! Commands:
//! - `filetool convert <input> [--format <fmt>] [--pretty]`
//! - `filetool validate <input> [--strict]`
//! - `filetool --mtp-describe`: print the MTP JSON document and exit
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error
//! - 2: Usage error

use clap::FromArgMatches;
use mtp_describe::{DescribeExt, EXIT_ERROR, EXIT_SUCCESS};
use mtp_describe_cli::{build_command, commands, load_describe_options, logging, Cli};

fn main() {
    logging::init_tracing();

    let matches = build_command()
        .with_describe(load_describe_options())
        .get_matches();

    let exit_code = match Cli::from_arg_matches(&matches) {
        Ok(cli) => {
            let mut stdout = std::io::stdout().lock();
            result_to_exit(commands::run(&cli.command, &mut stdout))
        }
        Err(err) => err.exit(),
    };
    std::process::exit(exit_code);
}

fn result_to_exit(result: anyhow::Result<()>) -> i32 {
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            eprintln!("Error: {err:#}");
            EXIT_ERROR
        }
    }
}
