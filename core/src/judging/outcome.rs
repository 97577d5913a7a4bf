use std::time::Duration;

/// Normalized result of one isolated process run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionOutcome {
    /// The child exited on its own with the given status code.
    Completed(i32),
    /// The child had not finished at the deadline and was forcibly killed.
    TimedOut,
    /// The child was terminated by a signal other than the deadline kill.
    Signaled(i32),
    /// The child process could not be created at all.
    SpawnFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonResult {
    Match,
    Mismatch,
    /// The answer file could not be opened at comparison time.
    Unavailable,
}

/// Mutually exclusive per-testcase classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Verdict {
    #[strum(serialize = "Correct")]
    Correct,
    #[strum(serialize = "Wrong Answer")]
    WrongAnswer,
    #[strum(serialize = "Timeout")]
    TimedOut,
    #[strum(serialize = "Runtime Error")]
    RuntimeError,
}

/// What the runner hands back for one measured execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub outcome: ExecutionOutcome,
    /// Wall-clock time around the whole run, on every outcome branch.
    pub execution_time: Duration,
    /// Captured stdout, truncated at the configured bound.
    pub stdout: Vec<u8>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn verdict_display_names() {
        assert_eq!(Verdict::Correct.to_string(), "Correct");
        assert_eq!(Verdict::WrongAnswer.to_string(), "Wrong Answer");
        assert_eq!(Verdict::TimedOut.to_string(), "Timeout");
        assert_eq!(Verdict::RuntimeError.to_string(), "Runtime Error");
    }
}
