//! Boundary to the bundling engine.
//!
//! The engine is opaque: it receives one [`JobConfig`] and either writes an
//! artifact or fails. [`BundlerAdapter`] is the only caller of the engine and
//! turns every failure into a [`JobOutcome::Failure`] value, so one job's
//! error can never abort or hide its siblings.

pub mod esbuild;

pub use esbuild::EsbuildBundler;

use crate::config::JobConfig;
use crate::outcome::{BundleArtifact, JobOutcome};
use async_trait::async_trait;
use miette::Diagnostic;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error};

/// A bundling engine.
///
/// Implementations must be safe to call concurrently: the orchestrator runs
/// every job of a build at once against the same instance.
///
/// # Example
///
/// ```rust,ignore
/// use async_trait::async_trait;
/// use splitpack::{BundleArtifact, BundleError, Bundler, JobConfig};
///
/// #[derive(Debug)]
/// struct Noop;
///
/// #[async_trait]
/// impl Bundler for Noop {
///     async fn bundle(&self, job: &JobConfig) -> Result<BundleArtifact, BundleError> {
///         Ok(BundleArtifact {
///             output_path: job.outfile().to_path_buf(),
///             output_size: 0,
///             source_map: None,
///         })
///     }
/// }
/// ```
#[async_trait]
pub trait Bundler: Send + Sync + std::fmt::Debug {
    /// Transform the job's entry point into its output file.
    async fn bundle(&self, job: &JobConfig) -> Result<BundleArtifact, BundleError>;
}

/// Errors reported by a bundling engine.
#[derive(Debug, Error, Diagnostic)]
pub enum BundleError {
    /// Engine executable could not be found
    #[error("Bundler executable not found: {}", .program.display())]
    #[diagnostic(
        code(splitpack::bundler::not_found),
        help("Install esbuild (npm install -D esbuild) or pass --esbuild <path>")
    )]
    NotFound { program: PathBuf },

    /// Engine process could not be started
    #[error("Failed to spawn {}: {source}", .program.display())]
    #[diagnostic(code(splitpack::bundler::spawn_failed))]
    SpawnFailed {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Engine exited with a non-zero status
    #[error("{} exited with {status}", .program.display())]
    #[diagnostic(code(splitpack::bundler::exit_status))]
    ExitStatus {
        program: PathBuf,
        status: String,
        #[help]
        stderr: Option<String>,
    },

    /// Engine reported success without producing the artifact
    #[error("Bundler finished but did not write {}", .0.display())]
    #[diagnostic(code(splitpack::bundler::missing_output))]
    MissingOutput(PathBuf),

    /// Filesystem error around the engine call
    #[error("I/O error on {}: {source}", .path.display())]
    #[diagnostic(code(splitpack::bundler::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BundleError {
    /// Flatten the error into the opaque diagnostic carried by a failed job.
    pub fn diagnostic(&self) -> String {
        match self {
            BundleError::ExitStatus {
                stderr: Some(stderr),
                ..
            } => format!("{self}\n{stderr}"),
            _ => self.to_string(),
        }
    }
}

/// Runs jobs through a [`Bundler`] and never lets an error escape.
#[derive(Debug, Clone)]
pub struct BundlerAdapter {
    bundler: Arc<dyn Bundler>,
}

impl BundlerAdapter {
    pub fn new(bundler: Arc<dyn Bundler>) -> Self {
        Self { bundler }
    }

    /// Run one job. No retries: a failure is reported as-is.
    pub async fn run(&self, job: &JobConfig) -> JobOutcome {
        let label = job.label();
        debug!(job = %label, entry = %job.entry().display(), "dispatching job");

        match self.bundler.bundle(job).await {
            Ok(artifact) => {
                debug!(
                    job = %label,
                    output = %artifact.output_path.display(),
                    size = artifact.output_size,
                    "job finished"
                );
                JobOutcome::Success { artifact }
            }
            Err(err) => {
                error!(job = %label, error = %err, "job failed");
                JobOutcome::Failure {
                    diagnostic: err.diagnostic(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::derive;
    use crate::variant::Variant;

    #[derive(Debug)]
    struct Fixed(bool);

    #[async_trait]
    impl Bundler for Fixed {
        async fn bundle(&self, job: &JobConfig) -> Result<BundleArtifact, BundleError> {
            if self.0 {
                Ok(BundleArtifact {
                    output_path: job.outfile().to_path_buf(),
                    output_size: 7,
                    source_map: job.sourcemap_path(),
                })
            } else {
                Err(BundleError::ExitStatus {
                    program: PathBuf::from("esbuild"),
                    status: "exit status: 1".to_string(),
                    stderr: Some("✘ [ERROR] Could not resolve \"./missing\"".to_string()),
                })
            }
        }
    }

    #[tokio::test]
    async fn test_adapter_success() {
        let adapter = BundlerAdapter::new(Arc::new(Fixed(true)));
        let jobs = derive(Variant::Node);

        let outcome = adapter.run(&jobs[1]).await;
        let artifact = outcome.artifact().expect("success");
        assert_eq!(artifact.output_path, PathBuf::from("dist/node/index.mjs"));
        assert_eq!(
            artifact.source_map,
            Some(PathBuf::from("dist/node/index.mjs.map"))
        );
    }

    #[tokio::test]
    async fn test_adapter_converts_error_into_failure() {
        let adapter = BundlerAdapter::new(Arc::new(Fixed(false)));
        let jobs = derive(Variant::Browser);

        let outcome = adapter.run(&jobs[0]).await;
        let diagnostic = outcome.diagnostic().expect("failure");
        assert!(diagnostic.contains("exited with exit status: 1"));
        assert!(diagnostic.contains("Could not resolve"));
    }

    #[test]
    fn test_diagnostic_without_stderr() {
        let err = BundleError::MissingOutput(PathBuf::from("dist/node/index.cjs"));
        assert_eq!(
            err.diagnostic(),
            "Bundler finished but did not write dist/node/index.cjs"
        );

        let err = BundleError::ExitStatus {
            program: PathBuf::from("esbuild"),
            status: "exit status: 2".to_string(),
            stderr: None,
        };
        assert_eq!(err.diagnostic(), "esbuild exited with exit status: 2");
        assert!(err.help().is_none());
    }

    #[test]
    fn test_exit_status_stderr_is_help() {
        let err = BundleError::ExitStatus {
            program: PathBuf::from("esbuild"),
            status: "exit status: 1".to_string(),
            stderr: Some("✘ [ERROR] Expected \";\"".to_string()),
        };
        let help = err.help().map(|h| h.to_string());
        assert_eq!(help.as_deref(), Some("✘ [ERROR] Expected \";\""));
    }
}
