//! Shared base configuration and per-job derivation.
//!
//! A [`BaseConfig`] holds everything the jobs of one invocation have in
//! common. [`BaseConfig::derive`] expands it into one [`JobConfig`] per
//! [`OutputFormat`]; the base is never mutated.

use crate::format::OutputFormat;
use crate::target::EsTarget;
use crate::variant::Variant;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File stem of every entry point and artifact.
pub const INDEX_STEM: &str = "index";

/// Source-language suffix of the entry point.
pub const ENTRY_EXTENSION: &str = "ts";

/// Attributes common to all jobs of a build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseConfig {
    /// Directory containing one source folder per variant (default: project root).
    pub src_dir: PathBuf,

    /// Output directory (default: `dist`).
    pub out_dir: PathBuf,

    /// Bundle dependencies into the output (default: true).
    pub bundle: bool,

    /// Emit an external `.map` file next to each artifact (default: true).
    pub sourcemap: bool,

    /// Minimum language level of the output (default: ES2015).
    pub target: EsTarget,

    /// Minify the output (default: false).
    pub minify: bool,

    /// Packages left out of the bundle.
    pub external: Vec<String>,
}

impl Default for BaseConfig {
    fn default() -> Self {
        Self {
            src_dir: PathBuf::new(),
            out_dir: PathBuf::from("dist"),
            bundle: true,
            sourcemap: true,
            target: EsTarget::default(),
            minify: false,
            external: Vec::new(),
        }
    }
}

impl BaseConfig {
    /// Create a base configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn src_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.src_dir = dir.into();
        self
    }

    pub fn out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = dir.into();
        self
    }

    pub fn bundle(mut self, enabled: bool) -> Self {
        self.bundle = enabled;
        self
    }

    pub fn sourcemap(mut self, enabled: bool) -> Self {
        self.sourcemap = enabled;
        self
    }

    pub fn target(mut self, target: EsTarget) -> Self {
        self.target = target;
        self
    }

    pub fn minify(mut self, enabled: bool) -> Self {
        self.minify = enabled;
        self
    }

    pub fn external<I, S>(mut self, packages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.external = packages.into_iter().map(Into::into).collect();
        self
    }

    /// Entry point of a variant: `{src_dir}/{variant}/index.ts`.
    pub fn entry_for(&self, variant: Variant) -> PathBuf {
        self.src_dir
            .join(variant.as_str())
            .join(format!("{INDEX_STEM}.{ENTRY_EXTENSION}"))
    }

    /// Directory holding every artifact of a variant: `{out_dir}/{variant}`.
    pub fn variant_out_dir(&self, variant: Variant) -> PathBuf {
        self.out_dir.join(variant.as_str())
    }

    /// Artifact path of one job: `{out_dir}/{variant}/index.{ext}`.
    pub fn outfile_for(&self, variant: Variant, format: OutputFormat) -> PathBuf {
        self.variant_out_dir(variant)
            .join(format!("{INDEX_STEM}.{}", format.extension()))
    }

    /// Build the job for one (variant, format) pair.
    pub fn job(&self, variant: Variant, format: OutputFormat) -> JobConfig {
        JobConfig {
            format,
            platform: variant,
            entry: self.entry_for(variant),
            outfile: self.outfile_for(variant, format),
            bundle: self.bundle,
            sourcemap: self.sourcemap,
            target: self.target,
            minify: self.minify,
            external: self.external.clone(),
        }
    }

    /// Derive one job per supported output format, in [`OutputFormat::ALL`] order.
    ///
    /// Pure: the same base and variant always yield value-equal jobs, and the
    /// returned output paths are pairwise distinct.
    pub fn derive(&self, variant: Variant) -> Vec<JobConfig> {
        OutputFormat::ALL
            .iter()
            .map(|&format| self.job(variant, format))
            .collect()
    }
}

/// Derive the jobs of a variant from the default [`BaseConfig`].
pub fn derive(variant: Variant) -> Vec<JobConfig> {
    BaseConfig::default().derive(variant)
}

/// Fully resolved configuration of one bundling job.
///
/// Only [`BaseConfig`] constructs jobs; fields are read through accessors so a
/// derived job cannot be altered afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobConfig {
    format: OutputFormat,
    platform: Variant,
    entry: PathBuf,
    outfile: PathBuf,
    bundle: bool,
    sourcemap: bool,
    target: EsTarget,
    minify: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    external: Vec<String>,
}

impl JobConfig {
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Platform hint for the engine; always the variant that produced the job.
    pub fn platform(&self) -> Variant {
        self.platform
    }

    pub fn entry(&self) -> &Path {
        &self.entry
    }

    pub fn outfile(&self) -> &Path {
        &self.outfile
    }

    pub fn bundle(&self) -> bool {
        self.bundle
    }

    pub fn sourcemap(&self) -> bool {
        self.sourcemap
    }

    pub fn target(&self) -> EsTarget {
        self.target
    }

    pub fn minify(&self) -> bool {
        self.minify
    }

    pub fn external(&self) -> &[String] {
        &self.external
    }

    /// Path of the source map esbuild writes next to the artifact.
    pub fn sourcemap_path(&self) -> Option<PathBuf> {
        self.sourcemap.then(|| {
            let mut name = self.outfile.clone().into_os_string();
            name.push(".map");
            PathBuf::from(name)
        })
    }

    /// Short name for logs and summaries, e.g. `node/esm`.
    pub fn label(&self) -> String {
        format!("{}/{}", self.platform, self.format)
    }
}
