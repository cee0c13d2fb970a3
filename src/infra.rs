//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for the runner,
//! including external command construction and execution, and path handling.
//!
//! 此模块为运行器提供基础设施服务，
//! 包括外部命令的构建与执行以及路径处理。

pub mod command;
pub mod fs;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
