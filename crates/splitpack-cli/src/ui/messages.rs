//! Status message functions for terminal output.
//!
//! Everything goes to stderr so stdout stays free for `--dry-run` and
//! `--print-schema` output. Only [`error`] is printed in quiet mode.

use owo_colors::OwoColorize;

use super::is_quiet;

/// Print a success message to stderr.
///
/// # Examples
///
/// ```no_run
/// use splitpack_cli::ui::success;
///
/// success("Build completed successfully");
/// ```
pub fn success(message: &str) {
    if !is_quiet() {
        eprintln!("{} {}", "✓".green().bold(), message);
    }
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    if !is_quiet() {
        eprintln!("{} {}", "ℹ".blue().bold(), message);
    }
}

/// Print a warning message to stderr.
///
/// # Examples
///
/// ```no_run
/// use splitpack_cli::ui::warning;
///
/// warning("Entry point not found: node/index.ts");
/// ```
pub fn warning(message: &str) {
    if !is_quiet() {
        eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
    }
}

/// Print an error message to stderr, even in quiet mode.
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}
