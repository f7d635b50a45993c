//! Miette diagnostic conversion for CLI errors.
//!
//! This module provides conversion from CLI errors to miette diagnostics
//! for error reporting in `main`.

use crate::error::{BuildError, CliError};
use miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        // Keep the diagnostic code and help text of selector errors
        CliError::Selector(e) => Report::new(e),
        CliError::Build(e) => build_error_to_miette(e),
        _ => miette::miette!("{}", err),
    }
}

/// Convert BuildError to miette Report
pub fn build_error_to_miette(err: BuildError) -> Report {
    match err {
        BuildError::UnsafeClean { path, root } => miette::miette!(
            help = "Point outDir at a directory inside the project",
            "Refusing to clean {}: it is not inside the project root {}",
            path.display(),
            root.display()
        ),
        _ => miette::miette!("Build error: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use splitpack::SelectorError;
    use std::path::PathBuf;

    #[test]
    fn test_selector_report_keeps_code() {
        let report = cli_error_to_miette(SelectorError::Missing.into());
        let code = report.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("splitpack::selector::missing"));
        assert!(report.help().is_some());
    }

    #[test]
    fn test_unsafe_clean_report_has_help() {
        let report = build_error_to_miette(BuildError::UnsafeClean {
            path: PathBuf::from("/tmp/node"),
            root: PathBuf::from("/project"),
        });
        assert!(report.to_string().contains("Refusing to clean"));
        assert!(report.help().is_some());
    }
}
