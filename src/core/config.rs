//! # Configuration Module / 配置模块
//!
//! Builds the single, immutable [`RunConfiguration`] that the manifest loader
//! and the execution driver receive. Values come from three layers, highest
//! precedence first: command-line options, an optional TOML defaults file
//! (`RomTests.toml`), and the built-in defaults below.
//!
//! 构建单一且不可变的 [`RunConfiguration`]，供清单加载器和执行驱动使用。
//! 配置值来自三个层级（优先级从高到低）：命令行选项、可选的 TOML 默认配置文件
//!（`RomTests.toml`）以及下面的内置默认值。

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::infra::command::BuildTool;
use crate::infra::{fs as infra_fs, t};

pub const DEFAULT_MANIFEST: &str = "external/nes-test-roms/test_roms.xml";
pub const DEFAULT_ROM_ROOT: &str = "nes-test-roms";
pub const DEFAULT_BUFFER: u32 = 30;
pub const DEFAULT_BUILD_TOOL: &str = "make";
pub const DEFAULT_CONFIG_FILE: &str = "RomTests.toml";

/// Defaults read from a TOML file. Every key is optional.
///
/// ```toml
/// language = "en"
/// manifest = "external/nes-test-roms/test_roms.xml"
/// rom_root = "nes-test-roms"
/// buffer = 30
/// frames = 0
/// build_tool = "make"
/// ```
///
/// 从 TOML 文件读取的默认值。每个键都是可选的。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub language: Option<String>,
    pub manifest: Option<String>,
    pub rom_root: Option<String>,
    pub buffer: Option<u32>,
    pub frames: Option<i64>,
    pub build_tool: Option<String>,
}

impl ConfigFile {
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Reads and parses the file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| t!("config.read_failed", path = path.display()).to_string())?;
        Self::from_toml_str(&content)
            .with_context(|| t!("config.parse_failed", path = path.display()).to_string())
    }

    /// Locates the defaults file.
    ///
    /// An explicitly requested file must exist. Without one, `RomTests.toml`
    /// in the current directory is used when present, and an empty
    /// configuration otherwise.
    ///
    /// 定位默认配置文件。
    /// 显式指定的文件必须存在。未指定时，如果当前目录存在 `RomTests.toml` 则使用它，
    /// 否则使用空配置。
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if infra_fs::existing_file(path).is_none() {
                    return Err(anyhow!(
                        t!("config.not_found", path = path.display()).to_string()
                    ));
                }
                Self::load(path)
            }
            None => match infra_fs::existing_file(Path::new(DEFAULT_CONFIG_FILE)) {
                Some(path) => Self::load(path),
                None => Ok(Self::default()),
            },
        }
    }
}

/// Values supplied on the command line. `None` means "not given", so the
/// config file or the built-in default applies.
///
/// 命令行提供的值。`None` 表示“未提供”，此时使用配置文件或内置默认值。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub manifest: Option<String>,
    pub rom_root: Option<String>,
    pub buffer: Option<u32>,
    pub frames: Option<i64>,
    pub filter: Option<String>,
    pub test: Option<String>,
    pub limit: Option<i64>,
    pub dry_run: bool,
    pub build_tool: Option<String>,
    pub language: Option<String>,
}

/// Process-wide run settings, constructed once before loading and never
/// mutated afterwards.
///
/// 进程级运行设置，在加载前构建一次，之后不再修改。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfiguration {
    /// Location of the XML manifest.
    pub manifest_path: PathBuf,
    /// Directory joined with every case filename to form the ROM path.
    pub rom_root: PathBuf,
    /// Extra frames passed to every case.
    pub buffer: u32,
    /// When positive, replaces every case's own frame count.
    pub frames_override: i64,
    /// Substring a filename must contain. Empty disables the filter.
    pub name_filter: String,
    /// Exact filename to select. Empty disables the filter; when set the
    /// substring filter is ignored.
    pub exact_test: String,
    /// Maximum number of cases to run after filtering. Zero means unlimited.
    pub limit: usize,
    /// Print commands instead of executing them.
    pub dry_run: bool,
    /// Program used to invoke the `romtest` target.
    pub build_tool: BuildTool,
    /// Locale for console messages.
    pub language: String,
}

impl Default for RunConfiguration {
    fn default() -> Self {
        Self {
            manifest_path: PathBuf::from(DEFAULT_MANIFEST),
            rom_root: PathBuf::from(DEFAULT_ROM_ROOT),
            buffer: DEFAULT_BUFFER,
            frames_override: 0,
            name_filter: String::new(),
            exact_test: String::new(),
            limit: 0,
            dry_run: false,
            build_tool: BuildTool::default(),
            language: "en".to_string(),
        }
    }
}

impl RunConfiguration {
    /// Merges command-line values over the config file over the defaults.
    ///
    /// # Arguments
    /// * `cli` - Values given on the command line.
    /// * `file` - Values read from the defaults file.
    /// * `fallback_language` - Locale used when neither layer names one.
    ///
    /// # Errors
    /// Fails when a path references an unset environment variable or the
    /// build tool command is empty or badly quoted.
    pub fn resolve(cli: CliOverrides, file: ConfigFile, fallback_language: &str) -> Result<Self> {
        let manifest = cli
            .manifest
            .or(file.manifest)
            .unwrap_or_else(|| DEFAULT_MANIFEST.to_string());
        let rom_root = cli
            .rom_root
            .or(file.rom_root)
            .unwrap_or_else(|| DEFAULT_ROM_ROOT.to_string());
        let build_tool_command = cli
            .build_tool
            .or(file.build_tool)
            .unwrap_or_else(|| DEFAULT_BUILD_TOOL.to_string());
        let build_tool = BuildTool::parse(&build_tool_command).ok_or_else(|| {
            anyhow!(t!("config.build_tool_invalid", command = &build_tool_command).to_string())
        })?;

        Ok(Self {
            manifest_path: infra_fs::expand_path(&manifest)?,
            rom_root: infra_fs::expand_path(&rom_root)?,
            buffer: cli.buffer.or(file.buffer).unwrap_or(DEFAULT_BUFFER),
            frames_override: cli.frames.or(file.frames).unwrap_or(0),
            name_filter: cli.filter.unwrap_or_default(),
            exact_test: cli.test.unwrap_or_default(),
            // Zero or negative disables the limit.
            limit: cli.limit.and_then(|l| usize::try_from(l).ok()).unwrap_or(0),
            dry_run: cli.dry_run,
            build_tool,
            language: cli
                .language
                .or(file.language)
                .unwrap_or_else(|| fallback_language.to_string()),
        })
    }

    /// Path of the ROM for `filename`, relative to the configured ROM root.
    pub fn rom_path(&self, filename: &str) -> PathBuf {
        self.rom_root.join(filename)
    }
}
