//! Formatting utilities for sizes, durations, and build summaries.

use console::Term;
use owo_colors::OwoColorize;
use splitpack::{BuildReport, JobOutcome, JobReport};
use std::time::Duration;

use super::{error, is_quiet};

/// Format file size in human-readable format.
///
/// Converts bytes to the most appropriate unit (B, KB, MB, GB).
///
/// # Examples
///
/// ```
/// use splitpack_cli::ui::format_size;
///
/// assert_eq!(format_size(0), "0 B");
/// assert_eq!(format_size(500), "500 B");
/// assert_eq!(format_size(1024), "1.00 KB");
/// assert_eq!(format_size(1_048_576), "1.00 MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    if unit_idx == 0 {
        format!("{} {}", size as u64, UNITS[unit_idx])
    } else {
        format!("{:.2} {}", size, UNITS[unit_idx])
    }
}

/// Format duration in human-readable format.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use splitpack_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{}ms", total_ms)
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// Plain one-line description of a finished job, e.g.
/// `esm  dist/node/index.mjs  1.20 KB  (35ms)`.
pub fn job_summary(report: &JobReport) -> String {
    let duration = format_duration(report.duration);

    match &report.outcome {
        JobOutcome::Success { artifact } => format!(
            "{:<4} {}  {}  ({})",
            report.job.format(),
            artifact.output_path.display(),
            format_size(artifact.output_size),
            duration
        ),
        JobOutcome::Failure { diagnostic } => format!(
            "{:<4} {}  failed ({}): {}",
            report.job.format(),
            report.job.outfile().display(),
            duration,
            diagnostic
        ),
    }
}

/// Print the build summary table to stderr.
///
/// One line per job in derivation order, then a total. Failed jobs are
/// always printed with their diagnostic, even in quiet mode.
pub fn print_build_summary(report: &BuildReport, elapsed: Duration) {
    for failed in report.failed() {
        error(&job_summary(failed));
    }

    if is_quiet() {
        return;
    }

    let term = Term::stderr();
    let width = term.size().1 as usize;

    eprintln!("\n{}", "Build Summary".bold().underline());
    eprintln!("{}", "─".repeat(width.clamp(20, 80)));

    for job in &report.jobs {
        let marker = if job.outcome.is_success() {
            format!("{}", "▸".blue())
        } else {
            format!("{}", "✗".red())
        };
        eprintln!("  {} {}", marker, job_summary(job));
    }

    eprintln!("{}", "─".repeat(width.clamp(20, 80)));

    let total_size: u64 = report
        .succeeded()
        .filter_map(|r| r.outcome.artifact())
        .map(|a| a.output_size)
        .sum();
    let failed = report.failed().count();

    eprintln!(
        "  {} {} written, {} failed, {} in {}",
        "Total:".bold(),
        report.jobs.len() - failed,
        failed,
        format_size(total_size).green(),
        format_duration(elapsed).green()
    );
}
