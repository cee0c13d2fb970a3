//! # Console Reporting Module / 控制台报告模块
//!
//! Everything the runner prints: the per-case progress line, the dry-run
//! command line, the final summary block, and the manifest failure message.
//! Progress and summary go to stdout; only manifest failures go to stderr.
//!
//! 运行器打印的所有内容：每个用例的进度行、演练命令行、最终摘要以及清单失败消息。
//! 进度和摘要输出到 stdout；只有清单失败输出到 stderr。

use colored::*;
use std::io;
use tracing::debug;

use crate::core::manifest::ManifestError;
use crate::core::models::RunResult;
use crate::infra::command::Invocation;
use crate::infra::t;

/// Prints `[i/N] <filename> (<frames> + <buffer> frames)`.
pub fn print_progress(index: usize, total: usize, filename: &str, frames: i64, buffer: u32) {
    println!(
        "{}",
        t!(
            "run.progress",
            index = index,
            total = total,
            filename = filename,
            frames = frames,
            buffer = buffer
        )
        .cyan()
    );
}

/// Prints the command that would have been executed.
pub fn print_dry_run(invocation: &Invocation) {
    println!("{}", invocation.render().dimmed());
}

pub fn print_spawn_failure(invocation: &Invocation, error: &io::Error) {
    println!(
        "{}",
        t!(
            "run.spawn_failed",
            program = &invocation.program,
            error = error
        )
        .red()
    );
}

pub fn print_no_tests_matched() {
    println!("{}", t!("run.no_tests_matched").yellow());
}

/// Prints the final summary block.
///
/// # Output Format / 输出格式
/// ```text
/// Summary:
///   Total:  3
///   Passed: 2
///   Failed: 1
/// ```
///
/// Filenames of failed cases are only logged at debug level (`--verbose`).
/// 失败用例的文件名仅在调试级别记录（`--verbose`）。
pub fn print_summary(result: &RunResult) {
    println!("{}", t!("summary.banner").bold());
    println!("{}", t!("summary.total", count = result.total()));
    println!(
        "{}",
        t!("summary.passed", count = result.passed()).green()
    );

    let failed_line = t!("summary.failed", count = result.failed());
    if result.failed() > 0 {
        println!("{}", failed_line.red().bold());
        debug!(failed = ?result.failed_cases(), "failed cases");
    } else {
        println!("{}", failed_line);
    }
}

/// Reports a fatal manifest problem on stderr.
pub fn print_manifest_error(error: &ManifestError) {
    let message = match error {
        ManifestError::Read { path, source } => t!(
            "manifest.read_failed",
            path = path.display(),
            error = source
        ),
        ManifestError::Parse(source) => t!("manifest.parse_failed", error = source),
    };
    eprintln!("{}", message.red());
}
