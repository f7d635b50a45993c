//! Shared utilities for command implementations.
//!
//! - Path resolution against the project root
//! - Project root selection
//! - Variant output cleaning
//! - Entry point checks

use crate::error::{BuildError, CliError, Result, ResultExt};
use splitpack::JobConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolve a path relative to a working directory.
///
/// If the path is absolute, returns it unchanged. Otherwise, joins it with
/// the working directory.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Get the current working directory.
///
/// # Errors
///
/// Returns I/O error if current directory cannot be determined.
pub fn get_cwd() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| {
        CliError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to get current directory: {}", e),
        ))
    })
}

/// Resolve the project root.
///
/// An explicit `--cwd` is resolved against the current directory and must
/// name an existing directory. Without it, the current directory is the root.
///
/// # Errors
///
/// Returns `InvalidArgument` if the explicit directory is missing or not a
/// directory.
pub fn resolve_project_root(explicit_cwd: Option<&Path>) -> Result<PathBuf> {
    let current_dir = get_cwd()?;

    let Some(cwd_path) = explicit_cwd else {
        return Ok(current_dir);
    };

    let absolute = resolve_path(cwd_path, &current_dir);

    if !absolute.exists() {
        return Err(CliError::InvalidArgument(format!(
            "Specified --cwd directory does not exist: {}",
            absolute.display()
        )));
    }

    if !absolute.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "Specified --cwd is not a directory: {}",
            absolute.display()
        )));
    }

    debug!(root = %absolute.display(), "using project root from --cwd");
    Ok(absolute)
}

/// Remove a variant's output directory before a build.
///
/// A missing directory is not an error. The directory must lie strictly
/// inside `root`, so a misconfigured `outDir` can never wipe the project
/// itself or anything outside it.
///
/// # Errors
///
/// - `BuildError::UnsafeClean` if `dir` is not inside `root`
/// - `CliError::FileNotFound` if `root` does not exist
/// - `BuildError::OutputNotWritable` if removal fails
pub fn clean_variant_dir(dir: &Path, root: &Path) -> Result<()> {
    if !dir.exists() {
        debug!(dir = %dir.display(), "nothing to clean");
        return Ok(());
    }

    if !dir.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "Output path exists but is not a directory: {}",
            dir.display()
        )));
    }

    let canonical_dir = dir.canonicalize().with_path(dir)?;
    let canonical_root = root.canonicalize().with_path(root)?;

    if canonical_dir == canonical_root || !canonical_dir.starts_with(&canonical_root) {
        return Err(BuildError::UnsafeClean {
            path: canonical_dir,
            root: canonical_root,
        }
        .into());
    }

    fs::remove_dir_all(&canonical_dir)
        .map_err(|_| BuildError::OutputNotWritable(dir.to_path_buf()))?;

    debug!(dir = %canonical_dir.display(), "cleaned variant output");
    Ok(())
}

/// Entry points of `jobs` that do not exist under `root`, deduplicated.
///
/// Every job of a variant shares one entry, so this is at most one path.
pub fn missing_entries(jobs: &[JobConfig], root: &Path) -> Vec<PathBuf> {
    let mut missing: Vec<PathBuf> = Vec::new();

    for job in jobs {
        let entry = resolve_path(job.entry(), root);
        if !entry.is_file() && !missing.contains(&entry) {
            missing.push(entry);
        }
    }

    missing
}
