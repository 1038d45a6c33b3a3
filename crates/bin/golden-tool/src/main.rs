//! Command-line entry point for the golden-repo example tool.
//!
//! Loads the tool configuration, runs the tool over the supplied JSON document
//! (or a built-in example), and prints the result to stdout.

mod config;
mod logging;

use std::io::{self, Write};
use std::process::ExitCode;

use golden_core::{ExampleTool, OutputFormat, RunOutcome};
use tracing::debug;

use crate::config::CliConfig;

fn main() -> ExitCode {
    let config = CliConfig::from_args();
    logging::init(config.verbose);

    let tool = ExampleTool::from_config_path(config.config_path.as_deref());

    let input = match config.input_document() {
        Ok(input) => input,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let outcome = tool.run(&input);
    debug!(status = ?outcome.status(), "run finished");

    let format = tool.config().settings.output_format;
    if let Err(err) = write_outcome(io::stdout().lock(), &outcome, format) {
        eprintln!("Error: failed to write result: {err}");
        return ExitCode::FAILURE;
    }

    if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Writes `outcome` followed by a newline. Closed pipes surface as errors.
fn write_outcome<W: Write>(
    mut out: W,
    outcome: &RunOutcome,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => serde_json::to_writer_pretty(&mut out, outcome)?,
        OutputFormat::Compact => serde_json::to_writer(&mut out, outcome)?,
    }
    writeln!(out)?;
    out.flush()
}
