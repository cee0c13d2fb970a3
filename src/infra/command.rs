//! # Command Execution Module / 命令执行模块
//!
//! This module builds the external `romtest` invocation for a case, renders it
//! for dry runs, and spawns it with the terminal's standard streams inherited.
//!
//! 此模块为用例构建外部 `romtest` 调用，在演练模式下渲染该调用，
//! 并在继承终端标准流的情况下启动它。

use std::borrow::Cow;
use std::io;
use std::path::Path;
use std::process::{ExitStatus, Stdio};

use tracing::debug;

/// The build target invoked once per case.
pub const ROMTEST_TARGET: &str = "romtest";

/// The program used to reach the `romtest` target, plus any arguments that
/// precede the target name (e.g. `make -s` or `cargo make`).
///
/// 用于调用 `romtest` 目标的程序，以及位于目标名称之前的参数
///（例如 `make -s` 或 `cargo make`）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildTool {
    program: String,
    leading_args: Vec<String>,
}

impl BuildTool {
    /// Splits a shell-style command string into program and leading arguments.
    /// Returns `None` for an empty command or unbalanced quoting.
    ///
    /// 将 shell 风格的命令字符串拆分为程序和前置参数。
    /// 对于空命令或引号不匹配的情况返回 `None`。
    pub fn parse(command: &str) -> Option<Self> {
        let mut parts = shlex::split(command)?.into_iter();
        let program = parts.next()?;
        Some(Self {
            program,
            leading_args: parts.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn leading_args(&self) -> &[String] {
        &self.leading_args
    }
}

impl Default for BuildTool {
    fn default() -> Self {
        Self {
            program: "make".to_string(),
            leading_args: Vec::new(),
        }
    }
}

/// A fully resolved external command.
/// 一个完全解析的外部命令。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    /// Builds `<tool> romtest rom=<rom_path> frames=<frames> buffer=<buffer>`.
    pub fn romtest(tool: &BuildTool, rom_path: &Path, frames: i64, buffer: u32) -> Self {
        let mut args = tool.leading_args.clone();
        args.push(ROMTEST_TARGET.to_string());
        args.push(format!("rom={}", rom_path.to_string_lossy()));
        args.push(format!("frames={frames}"));
        args.push(format!("buffer={buffer}"));
        Self {
            program: tool.program.clone(),
            args,
        }
    }

    /// Renders the command as a single line that can be pasted into a shell.
    /// Only the value side of `key=value` words is quoted, so plain paths
    /// print exactly as they are passed.
    ///
    /// 将命令渲染为可粘贴到 shell 中的单行文本。
    /// 只对 `key=value` 形式中的值部分加引号，因此普通路径会按原样打印。
    pub fn render(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .map(render_word)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn render_word(word: &str) -> Cow<'_, str> {
    if let Some((key, value)) = word.split_once('=') {
        if !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Cow::Owned(format!("{key}={}", quote(value)));
        }
    }
    quote(word)
}

fn quote(word: &str) -> Cow<'_, str> {
    // Words with interior NULs cannot be quoted; they are shown verbatim.
    shlex::try_quote(word).unwrap_or(Cow::Borrowed(word))
}

/// Spawns `invocation` with stdin, stdout and stderr inherited from the
/// runner and waits for it to exit. Output is never captured; only the exit
/// status is returned.
///
/// # Returns
/// The child's `ExitStatus`, or the `io::Error` raised when the program
/// could not be started.
///
/// 在继承运行器 stdin、stdout 和 stderr 的情况下启动 `invocation` 并等待其退出。
/// 输出从不被捕获；仅返回退出状态。
pub async fn run_inherited(invocation: &Invocation) -> io::Result<ExitStatus> {
    let mut cmd = tokio::process::Command::new(&invocation.program);
    cmd.args(&invocation.args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .kill_on_drop(true);

    debug!(command = %invocation.render(), "spawning build tool");
    let status = cmd.status().await?;
    debug!(?status, "build tool exited");
    Ok(status)
}
