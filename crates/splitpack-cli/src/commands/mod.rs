//! Command implementations for the splitpack CLI.
//!
//! - [`build`] - Validate the variant, derive the jobs, and run them
//! - [`schema`] - Print the configuration JSON schema
//!
//! Each command provides an `execute` function that takes the parsed
//! arguments and returns a Result.

pub mod build;
pub mod schema;
pub(crate) mod utils;

// Re-export execute functions for convenience
pub use build::execute as build_execute;
pub use schema::execute as schema_execute;
