//! # File System Helpers / 文件系统辅助模块
//!
//! Path handling for configured locations: shell-style expansion of `~` and
//! environment variables, and lookup of the optional defaults file.
//!
//! 处理配置中的路径：对 `~` 和环境变量进行 shell 风格展开，
//! 以及查找可选的默认配置文件。

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::infra::t;

/// Expands `~` and `$VAR` / `${VAR}` references in a configured path.
///
/// # Arguments
/// * `raw` - The path exactly as written on the command line or in the config file.
///
/// # Returns
/// The expanded path, or an error naming the path when a referenced variable is unset.
pub fn expand_path(raw: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(raw)
        .with_context(|| t!("config.path_expand_failed", path = raw).to_string())?;
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Returns `path` if it names an existing regular file.
pub fn existing_file(path: &Path) -> Option<&Path> {
    path.is_file().then_some(path)
}
