//! # Execution Driver Module / 执行驱动模块
//!
//! Runs the selected cases one after another. Each case becomes a single
//! `romtest` invocation of the build tool; the driver waits for it to exit
//! before starting the next one, and only the exit status is consumed.
//!
//! 逐个运行已选用例。每个用例对应一次构建工具的 `romtest` 调用；
//! 驱动会等待其退出后再启动下一个，并且只使用退出状态。

use tracing::debug;

use crate::{
    core::{
        config::RunConfiguration,
        models::{CaseOutcome, RunResult, RunStatus, TestCase},
        planner::{self, ExecutionPlan},
    },
    infra::command::{self, Invocation},
    reporting::console,
};

/// The main entry point of the driver.
///
/// Applies the limit, reports "No tests matched." when nothing is left,
/// otherwise runs every case, prints the summary and returns the run status.
///
/// # Arguments
/// * `cases` - The cases returned by the manifest loader, in manifest order.
/// * `config` - The immutable run configuration.
///
/// # Returns
/// [`RunStatus::NoTestsMatched`] for an empty selection (no summary is
/// printed), otherwise the status derived from the final counters.
pub async fn run(cases: Vec<TestCase>, config: &RunConfiguration) -> RunStatus {
    let plan = planner::plan_execution(cases, config);
    if plan.truncated_count > 0 {
        debug!(
            limit = config.limit,
            dropped = plan.truncated_count,
            "case list truncated"
        );
    }

    if plan.is_empty() {
        console::print_no_tests_matched();
        return RunStatus::NoTestsMatched;
    }

    let result = execute_plan(&plan, config).await;
    console::print_summary(&result);
    result.status()
}

/// Runs every case of `plan` in order and accumulates the counters.
/// A failing case never stops the loop.
///
/// 按顺序运行 `plan` 中的每个用例并累计计数。失败的用例不会中断循环。
pub async fn execute_plan(plan: &ExecutionPlan, config: &RunConfiguration) -> RunResult {
    let total = plan.len();
    let mut result = RunResult::default();

    for (i, case) in plan.cases_to_run.iter().enumerate() {
        let outcome = run_test_case(i + 1, total, case, config).await;
        debug!(filename = %case.filename, ?outcome, "case finished");
        result.record(case, outcome);
    }

    result
}

/// Builds the `romtest` invocation for `case` under `config`.
pub fn invocation_for(case: &TestCase, config: &RunConfiguration) -> Invocation {
    Invocation::romtest(
        &config.build_tool,
        &config.rom_path(&case.filename),
        case.effective_frames(config.frames_override),
        config.buffer,
    )
}

/// Runs (or, in dry-run mode, prints) a single case.
///
/// # Returns
/// The terminal [`CaseOutcome`] of the case.
pub async fn run_test_case(
    index: usize,
    total: usize,
    case: &TestCase,
    config: &RunConfiguration,
) -> CaseOutcome {
    let frames = case.effective_frames(config.frames_override);
    let invocation = invocation_for(case, config);

    console::print_progress(index, total, &case.filename, frames, config.buffer);

    if config.dry_run {
        console::print_dry_run(&invocation);
        return CaseOutcome::DryRun;
    }

    match command::run_inherited(&invocation).await {
        Ok(status) if status.success() => CaseOutcome::Passed,
        Ok(status) => CaseOutcome::Failed {
            code: status.code(),
        },
        Err(e) => {
            console::print_spawn_failure(&invocation, &e);
            CaseOutcome::SpawnFailed
        }
    }
}
