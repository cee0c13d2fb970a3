//! # Data Models Module / 数据模型模块
//!
//! This module defines the data structures shared by the manifest loader and
//! the execution driver: the test cases themselves, the outcome of running one
//! case, the accumulated counters of a whole run and the program-level status.
//!
//! 此模块定义了清单加载器和执行驱动共享的数据结构：
//! 测试用例本身、单个用例的运行结果、整个运行的累计计数以及程序级状态。

use std::fmt;
use std::process::ExitCode;

/// A single entry of the test manifest that survived loading.
/// 清单中通过加载的单个条目。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// Path of the ROM relative to the ROM root. Never empty.
    /// ROM 相对于 ROM 根目录的路径，永不为空。
    pub filename: String,
    /// Number of frames the manifest asks the ROM to run for, passed through
    /// unchanged (it may be zero or negative).
    /// 清单要求 ROM 运行的帧数，原样传递（可以为零或负数）。
    pub run_frames: i64,
}

impl TestCase {
    pub fn new(filename: impl Into<String>, run_frames: i64) -> Self {
        Self {
            filename: filename.into(),
            run_frames,
        }
    }

    /// Returns the frame count actually passed to the build tool.
    /// A positive `frames_override` replaces the manifest value; zero or a
    /// negative value keeps it.
    ///
    /// 返回实际传递给构建工具的帧数。
    /// 正数的 `frames_override` 会替换清单中的值；为零或负数时保留原值。
    pub fn effective_frames(&self, frames_override: i64) -> i64 {
        if frames_override > 0 {
            frames_override
        } else {
            self.run_frames
        }
    }
}

impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} frames)", self.filename, self.run_frames)
    }
}

/// Terminal state of one selected case.
/// 单个已选用例的最终状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseOutcome {
    /// The command was printed instead of executed.
    /// 命令仅被打印而未执行。
    DryRun,
    /// The build tool exited with status 0.
    /// 构建工具以状态 0 退出。
    Passed,
    /// The build tool exited with a non-zero status, or was killed by a signal
    /// (`code` is `None` then).
    /// 构建工具以非零状态退出，或被信号终止（此时 `code` 为 `None`）。
    Failed { code: Option<i32> },
    /// The build tool could not be started at all.
    /// 构建工具根本无法启动。
    SpawnFailed,
}

impl CaseOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, CaseOutcome::Failed { .. } | CaseOutcome::SpawnFailed)
    }
}

/// Counters accumulated by the execution driver, one case at a time.
///
/// Dry-run cases only bump `total`; every executed case bumps `total` and
/// exactly one of `passed` / `failed`.
///
/// 执行驱动逐个用例累计的计数器。
/// 演练用例只增加 `total`；每个实际执行的用例会增加 `total` 以及 `passed` / `failed` 之一。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunResult {
    total: usize,
    passed: usize,
    failed: usize,
    failed_cases: Vec<String>,
}

impl RunResult {
    /// Records the outcome of `case`.
    /// 记录 `case` 的结果。
    pub fn record(&mut self, case: &TestCase, outcome: CaseOutcome) {
        self.total += 1;
        match outcome {
            CaseOutcome::DryRun => {}
            CaseOutcome::Passed => self.passed += 1,
            CaseOutcome::Failed { .. } | CaseOutcome::SpawnFailed => {
                self.failed += 1;
                self.failed_cases.push(case.filename.clone());
            }
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn passed(&self) -> usize {
        self.passed
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    /// Filenames of the failed cases, in run order.
    pub fn failed_cases(&self) -> &[String] {
        &self.failed_cases
    }

    /// Maps the counters to the program status: any failure fails the run.
    /// 将计数映射为程序状态：任何失败都会使整个运行失败。
    pub fn status(&self) -> RunStatus {
        if self.failed == 0 {
            RunStatus::Success
        } else {
            RunStatus::TestsFailed
        }
    }
}

/// The outcome of a whole invocation of the runner.
/// 运行器一次完整调用的结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Every executed case passed, or the run was a dry run.
    Success,
    /// At least one case failed.
    TestsFailed,
    /// The filters (and limit) left nothing to run.
    NoTestsMatched,
    /// The manifest could not be read or was not well-formed.
    ManifestError,
}

impl RunStatus {
    pub fn exit_code(self) -> u8 {
        match self {
            RunStatus::Success => 0,
            RunStatus::TestsFailed | RunStatus::NoTestsMatched => 1,
            RunStatus::ManifestError => 2,
        }
    }
}

impl From<RunStatus> for ExitCode {
    fn from(status: RunStatus) -> Self {
        ExitCode::from(status.exit_code())
    }
}
