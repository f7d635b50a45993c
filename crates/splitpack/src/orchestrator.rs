//! Concurrent dispatch of build jobs.
//!
//! Every job is spawned onto a `JoinSet` at once (optionally throttled by a
//! semaphore) and the orchestrator waits for all of them before deciding the
//! verdict. A failing job never cancels its siblings, so every artifact that
//! can be produced is written before the process exits.

use crate::bundler::{Bundler, BundlerAdapter};
use crate::config::{BaseConfig, JobConfig};
use crate::outcome::{BuildReport, JobOutcome, JobReport};
use crate::variant::Variant;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Dispatches jobs to a bundler and aggregates their outcomes.
#[derive(Debug, Clone)]
pub struct Orchestrator {
    adapter: BundlerAdapter,
    max_parallel: Option<usize>,
}

impl Orchestrator {
    pub fn new(bundler: Arc<dyn Bundler>) -> Self {
        Self {
            adapter: BundlerAdapter::new(bundler),
            max_parallel: None,
        }
    }

    /// Limit how many jobs run at once (default: all of them).
    pub fn max_parallel(mut self, max: usize) -> Self {
        self.max_parallel = Some(max.max(1));
        self
    }

    /// Derive the jobs of `variant` from `base` and run them.
    pub async fn run_variant(&self, base: &BaseConfig, variant: Variant) -> BuildReport {
        self.run_all(base.derive(variant)).await
    }

    /// Run every job to completion and aggregate the outcomes.
    ///
    /// Reports come back in the order of `jobs`, regardless of completion
    /// order. A job whose task panics is reported as a failure.
    pub async fn run_all(&self, jobs: Vec<JobConfig>) -> BuildReport {
        self.run_all_with_progress(jobs, |_, _| {}).await
    }

    /// Like [`Orchestrator::run_all`], calling `on_finished` with the job's
    /// index and report as each job completes.
    ///
    /// The callback runs on the awaiting task in completion order; panicked
    /// jobs are not reported through it.
    pub async fn run_all_with_progress<F>(&self, jobs: Vec<JobConfig>, on_finished: F) -> BuildReport
    where
        F: Fn(usize, &JobReport),
    {
        let permits = self.max_parallel.unwrap_or(jobs.len()).max(1);
        info!(jobs = jobs.len(), max_parallel = permits, "dispatching build jobs");

        let semaphore = Arc::new(Semaphore::new(permits));
        let mut join_set = JoinSet::new();

        for (index, job) in jobs.iter().cloned().enumerate() {
            let adapter = self.adapter.clone();
            let semaphore = Arc::clone(&semaphore);

            join_set.spawn(async move {
                // The semaphore is never closed; a failed acquire just runs unthrottled
                let _permit = semaphore.acquire_owned().await.ok();
                let started = Instant::now();
                let outcome = adapter.run(&job).await;
                (
                    index,
                    JobReport {
                        job,
                        outcome,
                        duration: started.elapsed(),
                    },
                )
            });
        }

        let mut slots: Vec<Option<JobReport>> = vec![None; jobs.len()];
        let mut panics = Vec::new();

        while let Some(res) = join_set.join_next().await {
            match res {
                Ok((index, report)) => {
                    debug!(job = %report.job.label(), success = report.outcome.is_success(), "job joined");
                    on_finished(index, &report);
                    slots[index] = Some(report);
                }
                Err(join_err) => {
                    warn!(error = %join_err, "build task panicked");
                    panics.push(join_err.to_string());
                }
            }
        }

        let reports = jobs
            .into_iter()
            .zip(slots)
            .map(|(job, slot)| {
                slot.unwrap_or_else(|| JobReport {
                    outcome: JobOutcome::Failure {
                        diagnostic: panic_diagnostic(&job, &panics),
                    },
                    job,
                    duration: Duration::ZERO,
                })
            })
            .collect();

        BuildReport::new(reports)
    }
}

fn panic_diagnostic(job: &JobConfig, panics: &[String]) -> String {
    if panics.is_empty() {
        format!("{}: missing result", job.label())
    } else {
        format!("{}: build task panicked ({})", job.label(), panics.join("; "))
    }
}
