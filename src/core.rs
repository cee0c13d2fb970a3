//! # Core Module / 核心模块
//!
//! This module contains the core functionality of the runner:
//! data models, configuration, the manifest loader, planning and the
//! execution driver.
//!
//! 此模块包含运行器的核心功能：
//! 数据模型、配置、清单加载器、执行计划以及执行驱动。

pub mod config;
pub mod execution;
pub mod manifest;
pub mod models;
pub mod planner;

// Re-exports
pub use config::RunConfiguration;
pub use execution::run;
pub use models::{RunResult, RunStatus, TestCase};
