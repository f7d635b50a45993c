//! Job and process outcomes.

use crate::config::JobConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Artifact written by a successful job. Informational only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleArtifact {
    /// Path to the bundled file
    pub output_path: PathBuf,

    /// Bundled output size in bytes
    pub output_size: u64,

    /// Source map written next to the bundle, if any
    pub source_map: Option<PathBuf>,
}

/// Result of running one job through the bundler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    Success { artifact: BundleArtifact },
    Failure { diagnostic: String },
}

impl JobOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, JobOutcome::Success { .. })
    }

    pub fn artifact(&self) -> Option<&BundleArtifact> {
        match self {
            JobOutcome::Success { artifact } => Some(artifact),
            JobOutcome::Failure { .. } => None,
        }
    }

    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            JobOutcome::Success { .. } => None,
            JobOutcome::Failure { diagnostic } => Some(diagnostic),
        }
    }
}

/// A job together with how it ended.
#[derive(Debug, Clone)]
pub struct JobReport {
    pub job: JobConfig,
    pub outcome: JobOutcome,
    pub duration: Duration,
}

/// Pass/fail verdict of a whole invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOutcome {
    Success,
    Failure,
}

impl ProcessOutcome {
    /// `Success` iff every outcome is a success.
    pub fn from_outcomes<'a, I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = &'a JobOutcome>,
    {
        if outcomes.into_iter().all(JobOutcome::is_success) {
            ProcessOutcome::Success
        } else {
            ProcessOutcome::Failure
        }
    }

    pub fn is_success(self) -> bool {
        self == ProcessOutcome::Success
    }

    /// Process exit status: 0 on success, 1 on failure.
    pub fn exit_code(self) -> u8 {
        match self {
            ProcessOutcome::Success => 0,
            ProcessOutcome::Failure => 1,
        }
    }
}

/// Every job report of a run, in derivation order, plus the verdict.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub jobs: Vec<JobReport>,
    pub outcome: ProcessOutcome,
}

impl BuildReport {
    pub fn new(jobs: Vec<JobReport>) -> Self {
        let outcome = ProcessOutcome::from_outcomes(jobs.iter().map(|r| &r.outcome));
        Self { jobs, outcome }
    }

    pub fn succeeded(&self) -> impl Iterator<Item = &JobReport> {
        self.jobs.iter().filter(|r| r.outcome.is_success())
    }

    pub fn failed(&self) -> impl Iterator<Item = &JobReport> {
        self.jobs.iter().filter(|r| !r.outcome.is_success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn success() -> JobOutcome {
        JobOutcome::Success {
            artifact: BundleArtifact {
                output_path: PathBuf::from("dist/node/index.mjs"),
                output_size: 42,
                source_map: None,
            },
        }
    }

    fn failure() -> JobOutcome {
        JobOutcome::Failure {
            diagnostic: "boom".to_string(),
        }
    }

    #[test]
    fn test_all_success() {
        let outcomes = [success(), success()];
        let outcome = ProcessOutcome::from_outcomes(&outcomes);
        assert_eq!(outcome, ProcessOutcome::Success);
        assert_eq!(outcome.exit_code(), 0);
    }

    #[test]
    fn test_any_failure() {
        for outcomes in [
            vec![failure(), success()],
            vec![success(), failure()],
            vec![failure(), failure()],
        ] {
            let outcome = ProcessOutcome::from_outcomes(&outcomes);
            assert_eq!(outcome, ProcessOutcome::Failure);
            assert_eq!(outcome.exit_code(), 1);
        }
    }

    #[test]
    fn test_outcome_accessors() {
        assert_eq!(success().artifact().map(|a| a.output_size), Some(42));
        assert_eq!(success().diagnostic(), None);
        assert_eq!(failure().diagnostic(), Some("boom"));
        assert!(failure().artifact().is_none());
    }
}
