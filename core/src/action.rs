use std::path::Path;

use anyhow::{Context, Result};

use crate::{
    config::JudgeConfig,
    judging::{
        build,
        compare::compare,
        outcome::{ComparisonResult, ExecutionOutcome, Verdict},
        runner::JudgeRunner,
        stats::RunStatistics,
        testcase::{Discovery, FsTestcase},
    },
    style,
};

/// Runs a whole judging session: compile the candidate, discover testcases,
/// execute and classify each one sequentially, print the final report.
/// Returns the tallies so the engine is usable without the CLI.
pub async fn do_judge(
    target_src: impl AsRef<Path>,
    input_dir: impl AsRef<Path>,
    answer_dir: impl AsRef<Path>,
    cfg: &JudgeConfig,
) -> Result<RunStatistics> {
    let target_src = target_src.as_ref();

    log::info!("Compiling {}", target_src.display());
    build::compile(target_src, &cfg.artifact_path)
        .await
        .with_context(|| format!("Cannot build {}", target_src.display()))?;

    let discoveries = FsTestcase::discover(&input_dir, &answer_dir, cfg.max_testcases)
        .context("Unable to open input directory")?;

    let runner = JudgeRunner::new(&cfg.artifact_path)
        .time_limit(cfg.time_limit())
        .stdout_capture_max_bytes(cfg.stdout_capture_max_bytes);

    let mut stats = RunStatistics::new();
    for discovery in &discoveries {
        let testcase = match discovery {
            Discovery::Admitted(t) => t,
            Discovery::MissingAnswer(name) => {
                style::print_missing_answer(name);
                continue;
            }
        };

        style::print_testcase_header(testcase.name());
        stats.admit();

        let report = runner.run(testcase.input_path()).await?;
        stats.add_execution_time(report.execution_time);

        let verdict = match report.outcome {
            ExecutionOutcome::TimedOut => Some(Verdict::TimedOut),
            ExecutionOutcome::Signaled(_) => Some(Verdict::RuntimeError),
            ExecutionOutcome::Completed(0) => match compare(&runner, testcase).await? {
                ComparisonResult::Match => Some(Verdict::Correct),
                ComparisonResult::Mismatch => Some(Verdict::WrongAnswer),
                ComparisonResult::Unavailable => {
                    style::print_unjudged("answer file unavailable");
                    None
                }
            },
            // Any nonzero exit counts as a runtime error. A candidate's
            // deliberate exit(1) and a crash-driven nonzero status are
            // indistinguishable from the exit code alone.
            ExecutionOutcome::Completed(_) => Some(Verdict::RuntimeError),
            ExecutionOutcome::SpawnFailed => {
                style::print_unjudged("failed to execute the compiled artifact");
                None
            }
        };

        if let Some(verdict) = verdict {
            stats.record(verdict);
            style::print_verdict(verdict, report.execution_time);
        }
    }

    style::print_session_report(&stats);
    Ok(stats)
}
