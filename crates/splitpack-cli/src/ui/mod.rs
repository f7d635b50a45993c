//! Terminal UI utilities for status messages, progress, and the build summary.
//!
//! Handles environment detection (CI, TTY, quiet mode) and degrades to plain
//! output when terminal features aren't available.
//!
//! # Examples
//!
//! ```no_run
//! use splitpack_cli::ui;
//!
//! ui::init_colors(false);
//! ui::set_quiet(false);
//!
//! ui::info("Building node (2 formats)");
//! ui::success("Build successful");
//! ui::error("Failed to read configuration file");
//! ```

mod format;
mod messages;
mod progress;

use std::sync::atomic::{AtomicBool, Ordering};

pub use format::{format_duration, format_size, job_summary, print_build_summary};
pub use messages::{error, info, success, warning};
pub use progress::JobProgress;

static QUIET: AtomicBool = AtomicBool::new(false);

/// Suppress everything but errors (`--quiet`).
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

/// Whether `--quiet` is in effect.
pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Check if running in a CI environment.
///
/// Detects common CI environment variables from GitHub Actions, GitLab CI,
/// CircleCI, and Travis CI.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
}

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR environment variables, falls back to
/// terminal capability detection.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::user_attended_stderr()
}

/// Initialize color support based on environment.
///
/// Turns off `console` styling (used by the progress spinners) when colors
/// are disabled by `--no-color` or the environment. Call early in `main`.
pub fn init_colors(no_color: bool) {
    if no_color || !should_use_color() {
        console::set_colors_enabled_stderr(false);
    }
}
