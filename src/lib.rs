//! # ROM Test Runner Library / ROM 测试运行器库
//!
//! This library provides the core functionality for the ROM test runner,
//! a batch driver that reads a test manifest, selects cases by name, and
//! invokes the build tool's `romtest` target once per case.
//!
//! 此库为 ROM 测试运行器提供核心功能。
//! 这是一个批处理驱动：读取测试清单，按名称选择用例，并为每个用例调用一次构建工具的 `romtest` 目标。
//!
//! ## Modules / 模块
//!
//! - `core` - Data models, configuration, manifest loading and the execution driver
//! - `infra` - Infrastructure services like command execution and path handling
//! - `reporting` - Console progress and summary output
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 数据模型、配置、清单加载和执行驱动
//! - `infra` - 基础设施服务，如命令执行和路径处理
//! - `reporting` - 控制台进度和摘要输出
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod commands;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use core::config;
pub use core::execution;
pub use core::manifest;
pub use core::models;

/// Returns the system locale, or "en" when it cannot be detected.
pub fn detect_locale() -> String {
    sys_locale::get_locale().unwrap_or_else(|| "en".to_string())
}

/// Maps a requested locale onto one that has a message catalog.
///
/// It attempts to match the full locale (e.g., "zh-CN"), then just the
/// language code (e.g., "en" from "en-US"), and finally falls back to "en".
pub fn select_locale(requested: &str) -> &'static str {
    let available_locales = rust_i18n::available_locales!();

    if let Some(locale) = available_locales.iter().find(|l| **l == requested).copied() {
        return locale;
    }

    requested
        .split(['-', '_'])
        .next()
        .and_then(|lang_code| available_locales.iter().find(|l| **l == lang_code))
        .copied()
        .unwrap_or("en")
}

/// Sets the language used for all console messages.
pub fn set_language(requested: &str) {
    rust_i18n::set_locale(select_locale(requested));
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
