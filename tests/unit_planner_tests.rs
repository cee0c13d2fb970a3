//! # Planner Unit Tests / Planner 单元测试
//!
//! Tests for limit handling in `core::planner`.
//!
//! 测试 `core::planner` 中的数量限制处理。

use romtest_runner::config::RunConfiguration;
use romtest_runner::core::planner::plan_execution;
use romtest_runner::models::TestCase;

fn cases(names: &[&str]) -> Vec<TestCase> {
    names.iter().map(|n| TestCase::new(*n, 10)).collect()
}

fn with_limit(limit: usize) -> RunConfiguration {
    RunConfiguration {
        limit,
        ..RunConfiguration::default()
    }
}

#[test]
fn test_zero_limit_keeps_everything() {
    let plan = plan_execution(cases(&["a", "b", "c"]), &with_limit(0));
    assert_eq!(plan.len(), 3);
    assert_eq!(plan.truncated_count, 0);
}

#[test]
fn test_limit_keeps_leading_cases_in_order() {
    let plan = plan_execution(cases(&["z", "a", "m", "b"]), &with_limit(2));
    let names: Vec<&str> = plan.cases_to_run.iter().map(|c| c.filename.as_str()).collect();
    assert_eq!(names, vec!["z", "a"]);
    assert_eq!(plan.truncated_count, 2);
}

#[test]
fn test_limit_larger_than_list_is_a_no_op() {
    let plan = plan_execution(cases(&["a", "b"]), &with_limit(10));
    assert_eq!(plan.len(), 2);
    assert_eq!(plan.truncated_count, 0);
}

#[test]
fn test_empty_list_stays_empty() {
    let plan = plan_execution(Vec::new(), &with_limit(3));
    assert!(plan.is_empty());
}
