//! splitpack CLI - build one variant of a library in every module format.
//!
//! This is the main entry point. It handles command-line argument parsing,
//! logging initialization, and maps the build verdict to the exit status.

use clap::Parser;
use miette::Result;
use splitpack::ProcessOutcome;
use splitpack_cli::{cli, commands, error, logger, ui};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Parse command-line arguments
    let args = cli::Cli::parse();

    // Initialize logging and colors based on global flags
    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);
    ui::set_quiet(args.quiet);

    let result = if args.build.print_schema {
        commands::schema_execute().map(|()| ProcessOutcome::Success)
    } else {
        commands::build_execute(args.variant.as_deref(), args.build).await
    };

    // Convert CLI errors to miette diagnostics for beautiful error reporting
    let outcome = result.map_err(error::cli_error_to_miette)?;

    // The only place a failed build turns into a non-zero exit status
    Ok(ExitCode::from(outcome.exit_code()))
}
