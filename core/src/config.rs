use std::{path::PathBuf, time::Duration};

use crate::judging::{build, runner::JudgeRunner};

/// Engine configuration. Every bound here is an explicit knob rather than
/// a buried constant, so the engine can be embedded and tested in
/// isolation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JudgeConfig {
    /// Wall-clock deadline in whole seconds; 0 disables the deadline.
    pub time_limit_secs: u64,
    /// Capture bound for child stdout and for answer files.
    /// Longer data is truncated, not streamed.
    pub stdout_capture_max_bytes: usize,
    /// At most this many regular files of the input dir are considered.
    pub max_testcases: usize,
    /// Build output location, overwritten on every session.
    pub artifact_path: PathBuf,
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            time_limit_secs: 1,
            stdout_capture_max_bytes: JudgeRunner::DEFAULT_CAPTURE_MAX_BYTES,
            max_testcases: 20,
            artifact_path: PathBuf::from(build::DEFAULT_ARTIFACT_PATH),
        }
    }
}

impl JudgeConfig {
    /// `None` when the configured limit is 0: no enforced deadline.
    pub fn time_limit(&self) -> Option<Duration> {
        (self.time_limit_secs > 0).then(|| Duration::from_secs(self.time_limit_secs))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn zero_seconds_disables_the_deadline() {
        let cfg = JudgeConfig {
            time_limit_secs: 0,
            ..JudgeConfig::default()
        };
        assert_eq!(cfg.time_limit(), None);
    }

    #[test]
    fn positive_seconds_become_a_duration() {
        let cfg = JudgeConfig {
            time_limit_secs: 3,
            ..JudgeConfig::default()
        };
        assert_eq!(cfg.time_limit(), Some(Duration::from_secs(3)));
    }
}
