//! # splitpack
//!
//! Builds one library into every module format for a single deployment
//! variant. A build is a fixed, small job set:
//!
//! 1. [`variant::validate`] turns the raw target name into a [`Variant`]
//! 2. [`BaseConfig::derive`] expands it into one [`JobConfig`] per [`OutputFormat`]
//! 3. [`Orchestrator::run_all`] dispatches every job to a [`Bundler`] concurrently
//!    and folds the results into a [`ProcessOutcome`]
//!
//! ## Quick Start
//!
//! ```no_run
//! use splitpack::{BaseConfig, EsbuildBundler, Orchestrator, variant};
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let variant = variant::validate(Some("node"))?;
//! let jobs = BaseConfig::default().sourcemap(true).derive(variant);
//!
//! let bundler = EsbuildBundler::locate(".", None);
//! let report = Orchestrator::new(Arc::new(bundler)).run_all(jobs).await;
//!
//! std::process::exit(report.outcome.exit_code().into());
//! # }
//! ```
//!
//! The bundling engine itself is opaque: anything implementing [`Bundler`]
//! can be plugged in. [`EsbuildBundler`] drives the `esbuild` executable.

pub mod bundler;
pub mod config;
pub mod format;
pub mod orchestrator;
pub mod outcome;
pub mod target;
pub mod variant;

pub use bundler::{BundleError, Bundler, BundlerAdapter, EsbuildBundler};
pub use config::{BaseConfig, JobConfig, derive};
pub use format::OutputFormat;
pub use orchestrator::Orchestrator;
pub use outcome::{BuildReport, BundleArtifact, JobOutcome, JobReport, ProcessOutcome};
pub use target::EsTarget;
pub use variant::{SelectorError, Variant};
