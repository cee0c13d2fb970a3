// src/core/planner.rs
use crate::core::config::RunConfiguration;
use crate::core::models::TestCase;

/// The cases that will actually run, in manifest order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionPlan {
    pub cases_to_run: Vec<TestCase>,
    /// How many loaded cases were dropped by the limit.
    pub truncated_count: usize,
}

impl ExecutionPlan {
    pub fn is_empty(&self) -> bool {
        self.cases_to_run.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cases_to_run.len()
    }
}

/// Applies `config.limit` to the loaded cases. A limit of zero keeps them all.
pub fn plan_execution(cases: Vec<TestCase>, config: &RunConfiguration) -> ExecutionPlan {
    let mut cases_to_run = cases;
    let truncated_count = if config.limit > 0 && cases_to_run.len() > config.limit {
        let dropped = cases_to_run.len() - config.limit;
        cases_to_run.truncate(config.limit);
        dropped
    } else {
        0
    };

    ExecutionPlan {
        cases_to_run,
        truncated_count,
    }
}
