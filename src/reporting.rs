//! # Reporting Module / 报告模块
//!
//! This module handles everything the runner shows on the console: progress
//! lines, dry-run commands and the final summary, with internationalization
//! support.
//!
//! 此模块处理运行器在控制台显示的所有内容：进度行、演练命令和最终摘要，支持国际化。

pub mod console;

// Re-export common reporting functions
pub use console::{print_manifest_error, print_summary};
