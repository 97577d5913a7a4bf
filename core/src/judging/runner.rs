use std::{
    os::unix::process::ExitStatusExt,
    path::{Path, PathBuf},
    process::{ExitStatus, Stdio},
    time::Duration,
};

use anyhow::Context;
use tokio::{
    io::{self, AsyncRead, AsyncReadExt},
    process::Command,
    time::Instant,
};

use super::outcome::{ExecutionOutcome, RunReport};

/// Executes the compiled artifact as an isolated child process: stdin
/// redirected from a testcase input file, stdout captured through a pipe,
/// stderr passed through to the console (sanitizer reports included).
#[derive(Debug, Clone)]
pub struct JudgeRunner {
    artifact: PathBuf,
    time_limit: Option<Duration>,
    stdout_capture_max_bytes: usize,
}

impl JudgeRunner {
    pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(1);
    pub const DEFAULT_CAPTURE_MAX_BYTES: usize = 4096;

    pub fn new(artifact: impl Into<PathBuf>) -> Self {
        Self {
            artifact: artifact.into(),
            time_limit: Some(Self::DEFAULT_TIME_LIMIT),
            stdout_capture_max_bytes: Self::DEFAULT_CAPTURE_MAX_BYTES,
        }
    }

    /// `None` disables the deadline (a configured limit of 0 seconds).
    pub fn time_limit(mut self, limit: Option<Duration>) -> Self {
        self.time_limit = limit;
        self
    }

    pub fn stdout_capture_max_bytes(mut self, max_bytes: usize) -> Self {
        self.stdout_capture_max_bytes = max_bytes;
        self
    }

    pub fn get_artifact(&self) -> &Path {
        &self.artifact
    }

    pub fn get_time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    pub fn get_capture_max_bytes(&self) -> usize {
        self.stdout_capture_max_bytes
    }

    fn command(&self, input_file: std::fs::File) -> Command {
        let mut cmd = Command::new(&self.artifact);
        cmd.stdin(Stdio::from(input_file)).stdout(Stdio::piped());
        cmd
    }

    /// One measured run: deadline-bounded execution with outcome
    /// classification and capped stdout capture. Wall-clock time is taken
    /// around the whole operation on every branch, including timeout.
    pub async fn run(&self, input: impl AsRef<Path>) -> anyhow::Result<RunReport> {
        let input = input.as_ref();
        let input_file = std::fs::File::open(input)
            .with_context(|| format!("Cannot open input file {:?}", input))?;

        let start = Instant::now();
        let mut child = match self.command(input_file).spawn() {
            Ok(child) => child,
            Err(e) => {
                log::error!("Failed to spawn {:?}: {}", self.artifact, e);
                return Ok(RunReport {
                    outcome: ExecutionOutcome::SpawnFailed,
                    execution_time: start.elapsed(),
                    stdout: Vec::new(),
                });
            }
        };
        let mut stdout = child.stdout.take().context("Failed to open child stdout")?;

        let res = {
            let fut = async {
                tokio::try_join!(
                    read_capped(&mut stdout, self.stdout_capture_max_bytes),
                    child.wait(),
                )
            };
            match self.time_limit {
                Some(limit) => tokio::time::timeout(limit, fut).await,
                None => Ok(fut.await),
            }
        };
        let execution_time = start.elapsed();

        match res {
            // Deadline expired while the child was still running.
            Err(_) => {
                child
                    .kill()
                    .await
                    .unwrap_or_else(|e| log::warn!("Failed to kill timed-out process: {:#}", e));
                Ok(RunReport {
                    outcome: ExecutionOutcome::TimedOut,
                    execution_time,
                    stdout: Vec::new(),
                })
            }
            Ok(Err(e)) => Err(e).context("Failed to communicate with child process"),
            Ok(Ok((stdout_buf, status))) => Ok(RunReport {
                outcome: classify_exit(status),
                execution_time,
                stdout: stdout_buf,
            }),
        }
    }

    /// Deadline-free re-execution that only harvests stdout: the
    /// comparator's independent second launch. A spawn failure is an error
    /// here since without a capture there is nothing to compare.
    pub async fn capture(&self, input: impl AsRef<Path>) -> anyhow::Result<Vec<u8>> {
        let input = input.as_ref();
        let input_file = std::fs::File::open(input)
            .with_context(|| format!("Cannot open input file {:?}", input))?;

        let mut child = self
            .command(input_file)
            .spawn()
            .with_context(|| format!("Failed to spawn {:?}", self.artifact))?;
        let mut stdout = child.stdout.take().context("Failed to open child stdout")?;

        let (stdout_buf, _status) = tokio::try_join!(
            read_capped(&mut stdout, self.stdout_capture_max_bytes),
            child.wait(),
        )
        .context("Failed to communicate with child process")?;
        Ok(stdout_buf)
    }
}

fn classify_exit(status: ExitStatus) -> ExecutionOutcome {
    if let Some(sig) = status.signal() {
        ExecutionOutcome::Signaled(sig)
    } else {
        ExecutionOutcome::Completed(status.code().unwrap_or(-1))
    }
}

/// Reads at most `max_bytes` into memory, then drains the rest of the pipe
/// to a sink so a chatty child is truncated without ever blocking on a full
/// pipe buffer.
async fn read_capped<R>(reader: &mut R, max_bytes: usize) -> io::Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    let mut buf = Vec::with_capacity(max_bytes.min(4096));
    (&mut *reader).take(max_bytes as u64).read_to_end(&mut buf).await?;
    io::copy(reader, &mut io::sink()).await?;
    Ok(buf)
}
