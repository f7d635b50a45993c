//! Command-line interface definition for splitpack.
//!
//! This module defines the complete CLI structure using clap v4's derive macros.
//! The variant selector is deliberately optional at the clap level: a missing
//! value is reported by [`splitpack::variant::validate`] with its own
//! diagnostic instead of a usage error.
//!
//! # Usage
//!
//! - `splitpack node` - Build the node variant in every module format
//! - `splitpack browser --dry-run` - Print the job plan without building
//! - `splitpack --print-schema` - Print the configuration JSON schema

mod commands;
pub mod enums;
mod validation;

use clap::Parser;

pub use commands::BuildArgs;
pub use enums::*;
pub use validation::{parse_external, parse_max_parallel};

/// splitpack - build a library for one deployment variant in every module format
#[derive(Parser, Debug)]
#[command(
    name = "splitpack",
    version,
    about = "Build a library for one deployment variant in every module format",
    long_about = "splitpack bundles {srcDir}/<variant>/index.ts once per module format\n\
                  (CommonJS and ES modules) into {outDir}/<variant>/, running every\n\
                  format concurrently. The build fails if any format fails."
)]
pub struct Cli {
    /// Deployment variant to build (browser or node)
    ///
    /// Selects both the source folder and the esbuild platform.
    #[arg(value_name = "VARIANT")]
    pub variant: Option<String>,

    /// Build options
    #[command(flatten)]
    pub build: BuildArgs,

    /// Enable verbose logging (debug level)
    ///
    /// Shows every job dispatch, the esbuild command line, and per-job timings.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    ///
    /// Only critical errors will be displayed. Useful for CI/CD environments
    /// or when piping output to other tools.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    ///
    /// Outputs plain text without ANSI color codes. Useful for logging to
    /// files or systems that don't support colored terminal output.
    #[arg(long, global = true)]
    pub no_color: bool,
}
