//! Command handlers. Output goes to the given writer so tests can capture it.

use crate::cli::Commands;
use std::io::Write;

/// Run a parsed subcommand
pub fn run(command: &Commands, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Commands::Convert { input, fmt, pretty } => convert(input, fmt, *pretty, out),
        Commands::Validate { input, strict } => validate(input, *strict, out),
    }
}

fn convert(input: &str, fmt: &str, pretty: bool, out: &mut impl Write) -> anyhow::Result<()> {
    tracing::debug!(input, format = fmt, pretty, "convert");
    writeln!(out, "Converting {input} to {fmt}")?;
    if pretty {
        writeln!(out, "(pretty-printed)")?;
    }
    Ok(())
}

fn validate(input: &str, strict: bool, out: &mut impl Write) -> anyhow::Result<()> {
    tracing::debug!(input, strict, "validate");
    let mode = if strict { " (strict)" } else { "" };
    writeln!(out, "Validating {input}{mode}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(command: Commands) -> String {
        let mut out = Vec::new();
        run(&command, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_convert_output() {
        let text = output(Commands::Convert {
            input: "data.csv".to_string(),
            fmt: "yaml".to_string(),
            pretty: true,
        });
        assert_eq!(text, "Converting data.csv to yaml\n(pretty-printed)\n");
    }

    #[test]
    fn test_validate_output() {
        let text = output(Commands::Validate {
            input: "config.json".to_string(),
            strict: true,
        });
        assert_eq!(text, "Validating config.json (strict)\n");
    }
}
