use std::path::PathBuf;

use autojudge_core::{action, config::JudgeConfig};

/// autojudge -i <inputdir> -a <answerdir> -t <timelimit> <target_src>
#[derive(Debug, clap::Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory of testcase input files
    #[arg(short = 'i', long = "inputdir")]
    pub inputdir: PathBuf,

    /// Directory of recorded answer files (same filenames as the inputs)
    #[arg(short = 'a', long = "answerdir")]
    pub answerdir: PathBuf,

    /// Time limit in whole seconds; 0 disables the deadline
    #[arg(short = 't', long = "timelimit", value_parser = parse_time_limit)]
    pub timelimit: u64,

    #[arg()] // positional argument
    pub target_src: PathBuf,
}

/// atoi semantics: non-numeric input silently becomes 0, which in turn
/// means no enforced deadline.
fn parse_time_limit(s: &str) -> Result<u64, std::convert::Infallible> {
    Ok(s.parse().unwrap_or(0))
}

impl Args {
    pub async fn exec(&self) -> anyhow::Result<()> {
        let cfg = JudgeConfig {
            time_limit_secs: self.timelimit,
            ..JudgeConfig::default()
        };
        let _ = action::do_judge(&self.target_src, &self.inputdir, &self.answerdir, &cfg).await?;
        Ok(())
    }
}
