//! splitpack CLI - build one variant of a library in every module format.
//!
//! This crate provides the `splitpack` binary on top of the `splitpack`
//! core crate.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`config`] - `splitpack.config.json` / environment / CLI layering
//! - [`commands`] - Build and schema commands
//! - [`error`] - Error types with actionable messages
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Status messages, spinner, and build summary
//!
//! # Example
//!
//! ```rust,no_run
//! use splitpack_cli::{cli::BuildArgs, commands};
//!
//! # #[tokio::main]
//! # async fn main() -> splitpack_cli::Result<()> {
//! let outcome = commands::build_execute(Some("node"), BuildArgs::default()).await?;
//! std::process::exit(outcome.exit_code().into());
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

// Re-export commonly used types
pub use error::{BuildError, CliError, ConfigError, Result, ResultExt};
