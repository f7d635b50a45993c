//! Build command implementation.
//!
//! Builds one variant in every module format using the `splitpack` core
//! library and the esbuild executable.

use crate::cli::BuildArgs;
use crate::commands::utils;
use crate::config::SplitpackConfig;
use crate::error::{Result, ResultExt};
use crate::ui;
use serde::Serialize;
use splitpack::{
    BaseConfig, EsbuildBundler, JobConfig, Orchestrator, ProcessOutcome, Variant, variant,
};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Job plan printed by `--dry-run`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildPlan<'a> {
    pub variant: Variant,
    pub root: &'a Path,
    pub jobs: &'a [JobConfig],
}

/// Execute the build command.
///
/// # Build Process
///
/// 1. Validate the variant selector (nothing else happens if it is invalid)
/// 2. Load and validate configuration (CLI > Env > File > Defaults)
/// 3. Derive one job per module format
/// 4. Print the plan and stop if `--dry-run`
/// 5. Clean the variant's output directory if requested
/// 6. Run every job concurrently with per-job progress
/// 7. Display build summary
///
/// Returns the aggregated verdict; a failed job is not an `Err`, it only
/// makes the outcome [`ProcessOutcome::Failure`].
///
/// # Errors
///
/// Returns errors for:
/// - Missing or unsupported variant
/// - Invalid configuration
/// - Unsafe or failed output cleaning
pub async fn execute(raw_variant: Option<&str>, args: BuildArgs) -> Result<ProcessOutcome> {
    let start_time = Instant::now();

    // Step 1: Validate the selector before touching the filesystem
    let variant = variant::validate(raw_variant)?;

    // Step 2: Load configuration
    let root = utils::resolve_project_root(args.cwd.as_deref())?;
    let config = SplitpackConfig::load(&args, &root)?;
    debug!(?config, root = %root.display(), "configuration loaded");

    // Step 3: Derive jobs
    let base = BaseConfig::from(&config);
    let jobs = base.derive(variant);

    // Step 4: Dry run
    if args.dry_run {
        let plan = BuildPlan {
            variant,
            root: &root,
            jobs: &jobs,
        };
        let json = serde_json::to_string_pretty(&plan).context("Failed to render build plan")?;
        println!("{}", json);
        return Ok(ProcessOutcome::Success);
    }

    for entry in utils::missing_entries(&jobs, &root) {
        ui::warning(&format!("Entry point not found: {}", entry.display()));
    }

    // Step 5: Clean
    if config.clean {
        let out_dir = utils::resolve_path(&base.variant_out_dir(variant), &root);
        ui::info(&format!("Cleaning output directory: {}", out_dir.display()));
        utils::clean_variant_dir(&out_dir, &root)?;
    }

    // Step 6: Run
    let report = run(&config, &root, variant, jobs).await;

    // Step 7: Summary
    let elapsed = start_time.elapsed();
    ui::print_build_summary(&report, elapsed);

    if report.outcome.is_success() {
        ui::success(&format!(
            "Built {} in {}",
            variant,
            ui::format_duration(elapsed)
        ));
    } else {
        ui::error(&format!(
            "Build of {} failed: {} of {} formats failed",
            variant,
            report.failed().count(),
            report.jobs.len()
        ));
    }

    Ok(report.outcome)
}

/// Dispatch `jobs` to esbuild and wait for all of them.
async fn run(
    config: &SplitpackConfig,
    root: &Path,
    variant: Variant,
    jobs: Vec<JobConfig>,
) -> splitpack::BuildReport {
    let bundler = EsbuildBundler::locate(root, config.esbuild.as_deref());
    info!(esbuild = %bundler.program().display(), "bundler located");

    let mut orchestrator = Orchestrator::new(Arc::new(bundler));
    if let Some(max) = config.max_parallel {
        orchestrator = orchestrator.max_parallel(max);
    }

    ui::info(&format!(
        "Building {} ({} formats) into {}",
        variant,
        jobs.len(),
        config.out_dir.join(variant.as_str()).display()
    ));

    let progress = ui::JobProgress::for_terminal(&jobs);
    let report = orchestrator
        .run_all_with_progress(jobs, |index, job_report| {
            progress.finish_job(index, job_report)
        })
        .await;
    progress.finish();

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use splitpack::SelectorError;

    #[tokio::test]
    async fn test_missing_variant_fails_before_config() {
        // --cwd points nowhere: the selector must be checked first
        let args = BuildArgs {
            cwd: Some("/definitely/not/here".into()),
            ..BuildArgs::default()
        };

        let err = execute(None, args).await.unwrap_err();
        assert!(matches!(err, CliError::Selector(SelectorError::Missing)));
    }

    #[tokio::test]
    async fn test_unsupported_variant() {
        let err = execute(Some("deno"), BuildArgs::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CliError::Selector(SelectorError::Unsupported(ref raw)) if raw == "deno"
        ));
    }

    #[tokio::test]
    async fn test_dry_run_succeeds_without_esbuild() {
        let temp = tempfile::TempDir::new().unwrap();
        let args = BuildArgs {
            cwd: Some(temp.path().to_path_buf()),
            dry_run: true,
            esbuild: Some("/definitely/not/esbuild".into()),
            ..BuildArgs::default()
        };

        let outcome = execute(Some("node"), args).await.unwrap();
        assert_eq!(outcome, ProcessOutcome::Success);
        assert!(!temp.path().join("dist").exists());
    }

    #[test]
    fn test_plan_serialization() {
        let jobs = splitpack::derive(Variant::Browser);
        let plan = BuildPlan {
            variant: Variant::Browser,
            root: Path::new("/project"),
            jobs: &jobs,
        };

        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["variant"], "browser");
        assert_eq!(json["jobs"][0]["outfile"], "dist/browser/index.cjs");
        assert_eq!(json["jobs"][1]["format"], "esm");
    }
}
