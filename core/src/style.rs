use std::{
    io::{self, Write as _},
    time::Duration,
};

use colored::{Color, Colorize};
use crossterm::terminal;

use crate::judging::{outcome::Verdict, stats::RunStatistics};

pub fn is_truecolor_supported() -> bool {
    let Ok(v) = std::env::var("COLORTERM") else {
        return false;
    };
    matches!(v.as_str(), "truecolor" | "24bit")
}

pub trait ColorTheme {
    fn color(&self) -> Color;
}

impl ColorTheme for Verdict {
    fn color(&self) -> Color {
        use Verdict::*;
        if !self::is_truecolor_supported() {
            return match self {
                Correct => Color::Green,
                WrongAnswer => Color::Red,
                TimedOut => Color::Yellow,
                RuntimeError => Color::Magenta,
            };
        }

        match self {
            Correct => Color::TrueColor { r: 0, g: 255, b: 0 },
            WrongAnswer => Color::TrueColor { r: 255, g: 0, b: 0 },
            TimedOut => Color::TrueColor {
                r: 255,
                g: 255,
                b: 0,
            },
            RuntimeError => Color::TrueColor {
                r: 255,
                g: 165,
                b: 0,
            },
        }
    }
}

const FALLBACK_BAR_WIDTH: u16 = 65;

fn bar() -> String {
    let (cols, _) = terminal::size().unwrap_or((FALLBACK_BAR_WIDTH, 0));
    "=".repeat(cols as usize)
}

pub fn print_testcase_header(name: &str) {
    println!("{}", bar());
    print!("{}: ", name);
    // The verdict arrives only after the child ran; without a flush the
    // header would trail the child's inherited stderr on piped stdout.
    let _ = io::stdout().flush();
}

pub fn print_verdict(verdict: Verdict, execution_time: Duration) {
    println!(
        "{} [{} ms]",
        verdict.to_string().color(verdict.color()),
        execution_time.as_millis(),
    );
}

/// Finishes a testcase line that could not be given a verdict.
pub fn print_unjudged(reason: &str) {
    println!("{}", reason.dimmed());
}

pub fn print_missing_answer(name: &str) {
    println!(
        "Error: Corresponding answer file not found for input: {}",
        name,
    );
}

pub fn print_session_report(stats: &RunStatistics) {
    let bar = bar();
    println!("{}", bar);
    println!("Result");
    println!("{}", bar);
    println!("Total tests: {}", stats.total_tests());
    println!(
        "{}",
        format!("Correct Answer: {}", stats.correct()).color(Verdict::Correct.color()),
    );
    println!(
        "{}",
        format!("Runtime error: {}", stats.runtime_error()).color(Verdict::RuntimeError.color()),
    );
    println!(
        "{}",
        format!("Timeout: {}", stats.timed_out()).color(Verdict::TimedOut.color()),
    );
    println!(
        "{}",
        format!("Wrong Answer: {}", stats.wrong_answer()).color(Verdict::WrongAnswer.color()),
    );
    println!(
        "Total Execution Time: {} ms",
        stats.total_execution_time().as_millis(),
    );
}
