// esbuild integration - one esbuild process per job

use super::{BundleError, Bundler};
use crate::config::JobConfig;
use crate::outcome::BundleArtifact;
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::debug;
use which::which;

/// Name of the executable searched for when no explicit path is given.
pub const ESBUILD: &str = "esbuild";

/// esbuild bundler driving the esbuild CLI
///
/// Paths in a [`JobConfig`] are relative to the project root; the process is
/// started with that root as its working directory.
#[derive(Debug, Clone)]
pub struct EsbuildBundler {
    /// Path to the esbuild executable
    program: PathBuf,

    /// Project root
    cwd: PathBuf,
}

impl EsbuildBundler {
    /// Create a bundler with a specific esbuild path
    pub fn with_program(program: impl Into<PathBuf>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            cwd: cwd.into(),
        }
    }

    /// Locate esbuild for a project.
    ///
    /// Lookup order:
    /// 1. `explicit`, resolved against `cwd` when relative
    /// 2. `node_modules/.bin/esbuild` under `cwd`
    /// 3. `esbuild` on `PATH`
    ///
    /// Falls back to the bare name when nothing is found, so a missing
    /// executable surfaces as a [`BundleError::NotFound`] per job instead of
    /// aborting before dispatch.
    pub fn locate(cwd: impl Into<PathBuf>, explicit: Option<&Path>) -> Self {
        let cwd = cwd.into();

        let program = match explicit {
            Some(path) if path.is_absolute() => path.to_path_buf(),
            Some(path) if path.components().count() > 1 => cwd.join(path),
            Some(name) => which(name).unwrap_or_else(|_| name.to_path_buf()),
            None => local_install(&cwd)
                .or_else(|| which(ESBUILD).ok())
                .unwrap_or_else(|| PathBuf::from(ESBUILD)),
        };

        debug!(program = %program.display(), "using esbuild");
        Self { program, cwd }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Command-line arguments for one job.
    pub fn args(&self, job: &JobConfig) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![job.entry().as_os_str().to_owned()];

        if job.bundle() {
            args.push("--bundle".into());
        }

        let mut outfile = OsString::from("--outfile=");
        outfile.push(job.outfile());
        args.push(outfile);

        args.push(format!("--format={}", job.format().as_str()).into());
        args.push(format!("--platform={}", job.platform().as_str()).into());
        args.push(format!("--target={}", job.target().as_str()).into());

        if job.sourcemap() {
            args.push("--sourcemap".into());
        }

        if job.minify() {
            args.push("--minify".into());
        }

        for package in job.external() {
            args.push(format!("--external:{package}").into());
        }

        args
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }
}

fn local_install(cwd: &Path) -> Option<PathBuf> {
    let bin = cwd.join("node_modules").join(".bin");
    let candidates: &[&str] = if cfg!(windows) {
        &["esbuild.cmd", "esbuild.exe"]
    } else {
        &[ESBUILD]
    };

    candidates
        .iter()
        .map(|name| bin.join(name))
        .find(|path| path.is_file())
}

#[async_trait]
impl Bundler for EsbuildBundler {
    async fn bundle(&self, job: &JobConfig) -> Result<BundleArtifact, BundleError> {
        let outfile = self.resolve(job.outfile());

        // Ensure output directory exists
        if let Some(parent) = outfile.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| BundleError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        let output = Command::new(&self.program)
            .args(self.args(job))
            .current_dir(&self.cwd)
            .output()
            .await
            .map_err(|source| {
                if source.kind() == std::io::ErrorKind::NotFound {
                    BundleError::NotFound {
                        program: self.program.clone(),
                    }
                } else {
                    BundleError::SpawnFailed {
                        program: self.program.clone(),
                        source,
                    }
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(BundleError::ExitStatus {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: (!stderr.is_empty()).then_some(stderr),
            });
        }

        let output_size = tokio::fs::metadata(&outfile)
            .await
            .map_err(|_| BundleError::MissingOutput(job.outfile().to_path_buf()))?
            .len();

        // esbuild only writes the map when it has mappings to record
        let source_map = match job.sourcemap_path() {
            Some(map) if tokio::fs::try_exists(self.resolve(&map)).await.unwrap_or(false) => {
                Some(map)
            }
            _ => None,
        };

        Ok(BundleArtifact {
            output_path: job.outfile().to_path_buf(),
            output_size,
            source_map,
        })
    }
}
