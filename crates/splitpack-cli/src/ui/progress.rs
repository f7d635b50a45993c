//! Per-job progress spinners.

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use owo_colors::OwoColorize;
use splitpack::{JobConfig, JobReport};
use std::time::Duration;

use super::format_duration;

/// One spinner per job, finished as each job's report arrives.
///
/// Spinners are indexed like the job list they were created from, matching
/// the indices reported by
/// [`Orchestrator::run_all_with_progress`](splitpack::Orchestrator::run_all_with_progress).
///
/// # Examples
///
/// ```no_run
/// use splitpack::{Variant, derive};
/// use splitpack_cli::ui::JobProgress;
///
/// let jobs = derive(Variant::Node);
/// let progress = JobProgress::new(&jobs);
/// // ... run the jobs, calling progress.finish_job(index, &report) ...
/// progress.finish();
/// ```
pub struct JobProgress {
    multi: MultiProgress,
    bars: Vec<ProgressBar>,
}

impl JobProgress {
    /// Create a spinner for every job, drawn to stderr.
    pub fn new(jobs: &[JobConfig]) -> Self {
        Self::with_draw_target(jobs, ProgressDrawTarget::stderr())
    }

    /// Create spinners that draw nothing, for quiet mode and non-TTY output.
    pub fn hidden(jobs: &[JobConfig]) -> Self {
        Self::with_draw_target(jobs, ProgressDrawTarget::hidden())
    }

    /// Visible spinners when [`JobProgress::should_show`] allows, hidden otherwise.
    pub fn for_terminal(jobs: &[JobConfig]) -> Self {
        if Self::should_show() {
            Self::new(jobs)
        } else {
            Self::hidden(jobs)
        }
    }

    fn with_draw_target(jobs: &[JobConfig], target: ProgressDrawTarget) -> Self {
        let multi = MultiProgress::with_draw_target(target);
        let style = ProgressStyle::default_spinner()
            .template("  {spinner:.blue} {msg}")
            .expect("valid template")
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", " "]);

        let bars = jobs
            .iter()
            .map(|job| {
                let pb = multi.add(ProgressBar::new_spinner());
                pb.set_style(style.clone());
                pb.set_message(format!(
                    "{} {}",
                    job.label(),
                    job.outfile().display().dimmed()
                ));
                pb.enable_steady_tick(Duration::from_millis(80));
                pb
            })
            .collect();

        Self { multi, bars }
    }

    /// Number of spinners.
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Mark job `index` as finished with a check mark or a cross.
    ///
    /// Unknown indices are ignored.
    pub fn finish_job(&self, index: usize, report: &JobReport) {
        let Some(pb) = self.bars.get(index) else {
            return;
        };

        let took = format_duration(report.duration);
        let message = if report.outcome.is_success() {
            format!("{} {} {}", "✓".green(), report.job.label(), took.dimmed())
        } else {
            format!("{} {} {}", "✗".red(), report.job.label(), "failed".red())
        };
        pb.finish_with_message(message);
    }

    /// Clear every spinner, finished or not.
    pub fn finish(self) {
        for bar in &self.bars {
            bar.finish_and_clear();
        }
        let _ = self.multi.clear();
    }

    /// Check if spinners should be shown.
    ///
    /// Returns `false` in quiet mode, in CI environments, or when stderr is
    /// not a TTY.
    pub fn should_show() -> bool {
        !super::is_quiet() && console::user_attended_stderr() && !super::is_ci()
    }
}

impl Drop for JobProgress {
    // Leave the terminal clean if the build is interrupted
    fn drop(&mut self) {
        for bar in &self.bars {
            if !bar.is_finished() {
                bar.finish_and_clear();
            }
        }
    }
}
