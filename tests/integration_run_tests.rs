//! # Execution Driver Integration Tests / 执行驱动集成测试
//!
//! Runs the driver against real child processes. The build tool is simulated
//! with POSIX `true`, `false` and small `sh -c` scripts.
//!
//! 使用真实子进程运行执行驱动。构建工具由 POSIX `true`、`false` 和简单的 `sh -c` 脚本模拟。

mod common;

use romtest_runner::config::RunConfiguration;
use romtest_runner::core::planner::plan_execution;
use romtest_runner::execution::{self, execute_plan, invocation_for};
use romtest_runner::infra::command::BuildTool;
use romtest_runner::manifest;
use romtest_runner::models::{CaseOutcome, RunStatus, TestCase};
use std::path::PathBuf;

fn config_with_tool(tool: &str) -> RunConfiguration {
    RunConfiguration {
        build_tool: BuildTool::parse(tool).unwrap(),
        ..RunConfiguration::default()
    }
}

fn sample_cases() -> Vec<TestCase> {
    manifest::parse(common::SAMPLE_MANIFEST, "", "").unwrap()
}

#[cfg(test)]
mod invocation_tests {
    use super::*;

    #[test]
    fn test_invocation_uses_manifest_frames_and_buffer() {
        let config = RunConfiguration {
            rom_root: PathBuf::from("nes-test-roms"),
            buffer: 30,
            ..RunConfiguration::default()
        };
        let invocation = invocation_for(&TestCase::new("a.nes", 100), &config);

        assert_eq!(invocation.program, "make");
        assert_eq!(invocation.args[0], "romtest");
        assert_eq!(
            invocation.args[1],
            format!("rom={}", PathBuf::from("nes-test-roms").join("a.nes").display())
        );
        assert_eq!(invocation.args[2], "frames=100");
        assert_eq!(invocation.args[3], "buffer=30");
    }

    #[test]
    fn test_frames_override_applies_to_every_case() {
        let config = RunConfiguration {
            frames_override: 500,
            ..RunConfiguration::default()
        };

        for case in sample_cases() {
            let invocation = invocation_for(&case, &config);
            assert_eq!(invocation.args[2], "frames=500");
        }
    }
}

#[cfg(test)]
mod dry_run_tests {
    use super::*;

    #[tokio::test]
    async fn test_dry_run_never_spawns() {
        // The program does not exist; a spawn attempt would count as a failure.
        let config = RunConfiguration {
            dry_run: true,
            ..config_with_tool("romtest-runner-no-such-program-12345")
        };
        let plan = plan_execution(sample_cases(), &config);

        let result = execute_plan(&plan, &config).await;
        assert_eq!(result.total(), 2);
        assert_eq!(result.passed(), 0);
        assert_eq!(result.failed(), 0);
        assert_eq!(result.status(), RunStatus::Success);
    }

    #[tokio::test]
    async fn test_dry_run_case_outcome() {
        let config = RunConfiguration {
            dry_run: true,
            ..RunConfiguration::default()
        };
        let outcome =
            execution::run_test_case(1, 1, &TestCase::new("a.nes", 100), &config).await;
        assert_eq!(outcome, CaseOutcome::DryRun);
    }
}

#[cfg(test)]
mod empty_selection_tests {
    use super::*;

    #[tokio::test]
    async fn test_no_cases_means_no_tests_matched() {
        let status = execution::run(Vec::new(), &RunConfiguration::default()).await;
        assert_eq!(status, RunStatus::NoTestsMatched);
    }

    #[tokio::test]
    async fn test_exact_filter_on_dropped_entry() {
        let cases = manifest::parse(common::SAMPLE_MANIFEST, "", "b.nes").unwrap();
        let status = execution::run(cases, &RunConfiguration::default()).await;
        assert_eq!(status, RunStatus::NoTestsMatched);
        assert_eq!(status.exit_code(), 1);
    }
}

#[cfg(all(test, unix))]
mod execution_tests {
    use super::*;

    #[tokio::test]
    async fn test_all_passing() {
        let config = config_with_tool("true");
        let plan = plan_execution(sample_cases(), &config);

        let result = execute_plan(&plan, &config).await;
        assert_eq!(result.total(), 2);
        assert_eq!(result.passed(), 2);
        assert_eq!(result.failed(), 0);
        assert_eq!(result.status(), RunStatus::Success);
    }

    #[tokio::test]
    async fn test_failures_do_not_stop_the_loop() {
        let config = config_with_tool("false");
        let plan = plan_execution(sample_cases(), &config);

        let result = execute_plan(&plan, &config).await;
        assert_eq!(result.total(), 2);
        assert_eq!(result.passed(), 0);
        assert_eq!(result.failed(), 2);
        assert_eq!(result.failed_cases(), ["a.nes", "c.nes"]);
        assert_eq!(result.status(), RunStatus::TestsFailed);
    }

    #[tokio::test]
    async fn test_mixed_results() {
        let cases = vec![
            TestCase::new("ok_1.nes", 10),
            TestCase::new("will_fail.nes", 10),
            TestCase::new("ok_2.nes", 10),
        ];
        let config = config_with_tool(common::FAIL_ON_NAME_TOOL);
        let plan = plan_execution(cases, &config);

        let result = execute_plan(&plan, &config).await;
        assert_eq!(result.total(), 3);
        assert_eq!(result.passed(), 2);
        assert_eq!(result.failed(), 1);
        assert_eq!(result.failed_cases(), ["will_fail.nes"]);
    }

    #[tokio::test]
    async fn test_non_zero_code_is_recorded() {
        let config = config_with_tool(common::FAIL_ON_NAME_TOOL);
        let outcome =
            execution::run_test_case(1, 1, &TestCase::new("fail.nes", 10), &config).await;
        assert_eq!(outcome, CaseOutcome::Failed { code: Some(3) });
    }

    #[tokio::test]
    async fn test_missing_build_tool_counts_as_failure() {
        let config = config_with_tool("romtest-runner-no-such-program-12345");
        let outcome =
            execution::run_test_case(1, 1, &TestCase::new("a.nes", 10), &config).await;
        assert_eq!(outcome, CaseOutcome::SpawnFailed);
    }

    #[tokio::test]
    async fn test_limit_caps_executed_cases() {
        let config = RunConfiguration {
            limit: 1,
            ..config_with_tool("true")
        };
        let plan = plan_execution(sample_cases(), &config);

        let result = execute_plan(&plan, &config).await;
        assert_eq!(result.total(), 1);
        assert_eq!(result.passed(), 1);
    }

    #[tokio::test]
    async fn test_run_status_reflects_failures() {
        let status = execution::run(sample_cases(), &config_with_tool("false")).await;
        assert_eq!(status, RunStatus::TestsFailed);

        let status = execution::run(sample_cases(), &config_with_tool("true")).await;
        assert_eq!(status, RunStatus::Success);
    }
}
