use std::path::Path;

use anyhow::Context;
use tokio::process::Command;

/// Default artifact location, relative to the working directory.
/// Overwritten on every session and left on disk afterwards.
pub const DEFAULT_ARTIFACT_PATH: &str = "./target_program";

const COMPILER: &str = "gcc";
const COMPILE_FLAGS: &[&str] = &["-fsanitize=address"];

/// Toolchain rejection of the candidate source. Fatal: aborts the session
/// before any testcase runs.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("Compile Error: exitcode={0}")]
    ExitCode(i32),
    #[error("Compile Error: compiler terminated by signal")]
    Signaled,
}

/// Compiles the candidate source into an executable at `artifact` with the
/// fixed toolchain invocation. Any nonzero compiler status is a compile
/// error; so is failing to launch the compiler at all.
pub async fn compile(source: impl AsRef<Path>, artifact: impl AsRef<Path>) -> anyhow::Result<()> {
    let source = source.as_ref();
    let status = Command::new(COMPILER)
        .args(COMPILE_FLAGS)
        .arg(source)
        .arg("-o")
        .arg(artifact.as_ref())
        .status()
        .await
        .with_context(|| format!("Failed to launch '{}' for {:?}", COMPILER, source))?;

    match status.code() {
        Some(0) => Ok(()),
        Some(code) => Err(CompileError::ExitCode(code).into()),
        None => Err(CompileError::Signaled.into()),
    }
}
