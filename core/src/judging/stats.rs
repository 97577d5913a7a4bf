use std::time::Duration;

use super::outcome::Verdict;

/// Session-wide tallies, owned by the orchestration loop and threaded
/// through it by reference (no ambient global state).
///
/// Counters are never decremented. `record` must be called at most once
/// per `admit`, so `correct + wrong_answer + timed_out + runtime_error`
/// never exceeds `total_tests`; a testcase whose verdict could not be
/// determined stays admitted but unclassified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStatistics {
    total_tests: u32,
    correct: u32,
    wrong_answer: u32,
    timed_out: u32,
    runtime_error: u32,
    total_execution_time: Duration,
}

impl RunStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admits one testcase into the session.
    pub fn admit(&mut self) {
        self.total_tests += 1;
    }

    /// Counts the verdict of one admitted testcase.
    pub fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Correct => self.correct += 1,
            Verdict::WrongAnswer => self.wrong_answer += 1,
            Verdict::TimedOut => self.timed_out += 1,
            Verdict::RuntimeError => self.runtime_error += 1,
        }
    }

    /// Adds one run's wall-clock time to the cumulative total.
    pub fn add_execution_time(&mut self, elapsed: Duration) {
        self.total_execution_time += elapsed;
    }

    pub fn total_tests(&self) -> u32 {
        self.total_tests
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    pub fn wrong_answer(&self) -> u32 {
        self.wrong_answer
    }

    pub fn timed_out(&self) -> u32 {
        self.timed_out
    }

    pub fn runtime_error(&self) -> u32 {
        self.runtime_error
    }

    /// Number of admitted testcases that received a verdict.
    pub fn classified(&self) -> u32 {
        self.correct + self.wrong_answer + self.timed_out + self.runtime_error
    }

    pub fn total_execution_time(&self) -> Duration {
        self.total_execution_time
    }
}
