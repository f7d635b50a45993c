//! Error handling for the splitpack CLI.
//!
//! This module provides a hierarchical error type system using `thiserror` for
//! structured error handling. Each error variant is designed to be actionable
//! and provide context to help users resolve issues.
//!
//! # Architecture
//!
//! - **Top-level errors** (`CliError`) represent broad categories of failures
//! - **Domain-specific errors** (`ConfigError`, `BuildError`) provide detailed context
//! - **Selector errors** from the core crate pass through unchanged so their
//!   diagnostic code and help text reach the terminal
//! - **Context helpers** allow attaching additional information to errors
//!
//! Per-job bundling failures are not errors at this level: they are recorded
//! in the build report and only decide the exit status.
//!
//! # Example
//!
//! ```rust,no_run
//! use splitpack_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_entry(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path)
//!         .with_path(path)
//!         .context("Failed to read entry point")
//! }
//! ```

mod miette;

pub use self::miette::{build_error_to_miette, cli_error_to_miette};

use splitpack::SelectorError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level CLI error type.
///
/// This is the primary error type returned by CLI commands. It automatically
/// converts from domain-specific errors via `From` implementations.
#[derive(Debug, Error)]
pub enum CliError {
    /// Missing or unsupported variant selector
    #[error(transparent)]
    Selector(#[from] SelectorError),

    /// Configuration-related errors (file not found, invalid values, etc.)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Errors preparing the build (output cleanup, etc.)
    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Another error with a message prefix (see [`ResultExt::context`])
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
///
/// These errors occur during config file loading, layering, and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file doesn't exist at the expected location
    #[error("Config file not found: {}\n\nHint: Create a splitpack.config.json file or fix the --config path", .0.display())]
    NotFound(PathBuf),

    /// Missing required configuration field
    #[error("Missing required field: {field}\n\nHint: {hint}")]
    MissingField {
        /// Name of the missing field
        field: String,
        /// Helpful hint for providing the field
        hint: String,
    },

    /// Invalid value for a configuration option
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The invalid value
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },

    /// I/O error while reading config
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while preparing a build, before any job is dispatched.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The directory to clean is not inside the project root
    #[error("Refusing to clean {}: it is not inside the project root {}\n\nHint: Point outDir at a directory inside the project", .path.display(), .root.display())]
    UnsafeClean {
        /// Directory that would have been removed
        path: PathBuf,
        /// Project root
        root: PathBuf,
    },

    /// Output directory could not be cleaned or created
    #[error("Output directory is not writable: {}\n\nHint: Check directory permissions or specify a different --out-dir", .0.display())]
    OutputNotWritable(PathBuf),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Add a file path to the error context.
    ///
    /// A `NotFound` I/O error becomes [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Prefix the error with a message.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            match err {
                CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                    CliError::FileNotFound(path.as_ref().to_path_buf())
                }
                other => other,
            }
        })
    }

    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_not_found() {
        let err = ConfigError::NotFound(PathBuf::from("splitpack.config.json"));
        let msg = err.to_string();
        assert!(msg.contains("Config file not found"));
        assert!(msg.contains("splitpack.config.json"));
        assert!(msg.contains("Hint:"));
    }

    #[test]
    fn test_config_error_invalid_value() {
        let err = ConfigError::InvalidValue {
            field: "maxParallel".to_string(),
            value: "0".to_string(),
            hint: "Must be at least 1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Invalid value for 'maxParallel'"));
        assert!(msg.contains("Must be at least 1"));
    }

    #[test]
    fn test_config_error_missing_field() {
        let err = ConfigError::MissingField {
            field: "outDir".to_string(),
            hint: "Set an output directory".to_string(),
        };
        assert!(err.to_string().contains("Missing required field: outDir"));
    }

    #[test]
    fn test_build_error_unsafe_clean() {
        let err = BuildError::UnsafeClean {
            path: PathBuf::from("/etc/node"),
            root: PathBuf::from("/project"),
        };
        let msg = err.to_string();
        assert!(msg.contains("Refusing to clean /etc/node"));
        assert!(msg.contains("/project"));
    }

    #[test]
    fn test_selector_error_is_transparent() {
        let err: CliError = SelectorError::Unsupported("deno".to_string()).into();
        assert!(matches!(err, CliError::Selector(_)));
        assert_eq!(
            err.to_string(),
            SelectorError::Unsupported("deno".to_string()).to_string()
        );
    }

    #[test]
    fn test_cli_error_from_config_error() {
        let cli_err: CliError = ConfigError::NotFound(PathBuf::from("test.json")).into();
        assert!(matches!(cli_err, CliError::Config(_)));
    }

    #[test]
    fn test_cli_error_from_build_error() {
        let cli_err: CliError = BuildError::OutputNotWritable(PathBuf::from("dist")).into();
        assert!(matches!(cli_err, CliError::Build(_)));
    }

    #[test]
    fn test_result_ext_with_path() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));

        let err = result.with_path("/test/path.txt").unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn test_result_ext_with_path_keeps_other_errors() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));

        let err = result.with_path("/test/path.txt").unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }

    #[test]
    fn test_result_ext_context() {
        let result: std::result::Result<(), ConfigError> =
            Err(ConfigError::NotFound(PathBuf::from("test.json")));

        let err = result.context("Failed to load").unwrap_err();
        assert!(err.to_string().starts_with("Failed to load: "));
    }
}
