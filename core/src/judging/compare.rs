use super::{
    outcome::ComparisonResult,
    runner::JudgeRunner,
    testcase::FsTestcase,
};

/// Re-executes the artifact against the testcase input — a second,
/// independent process launch, deliberately not reusing the measured run's
/// capture — and byte-compares the harvested stdout against the recorded
/// answer. No normalization: trailing whitespace and newlines count.
///
/// A nondeterministic candidate may therefore print something different
/// here than it did during the measured run; that is expected behavior,
/// not a bug.
pub async fn compare(
    runner: &JudgeRunner,
    testcase: &FsTestcase,
) -> anyhow::Result<ComparisonResult> {
    let stdout = runner.capture(testcase.input_path()).await?;

    let expected = match fsutil::read_capped(testcase.answer_path(), runner.get_capture_max_bytes())
    {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("{}", e);
            return Ok(ComparisonResult::Unavailable);
        }
    };

    Ok(if stdout == expected {
        ComparisonResult::Match
    } else {
        ComparisonResult::Mismatch
    })
}
