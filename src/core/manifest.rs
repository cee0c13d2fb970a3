//! # Manifest Loader / 清单加载器
//!
//! Parses the XML test manifest into an ordered list of [`TestCase`]s,
//! applying the name filters while walking the document.
//!
//! ```xml
//! <tests>
//!   <test filename="cpu/official.nes" runframes="600"/>
//!   <test filename="ppu/vbl_clear_time.nes" runframes="120"/>
//! </tests>
//! ```
//!
//! Only direct children of the root element named `test` are considered.
//! Entries that lack a usable `filename` or `runframes` attribute are dropped
//! without a diagnostic (see [`read_entry`]); a document that is not
//! well-formed is the only error.
//!
//! 将 XML 测试清单解析为有序的 [`TestCase`] 列表，并在遍历文档时应用名称过滤器。
//! 只考虑根元素下名为 `test` 的直接子元素。缺少可用 `filename` 或 `runframes`
//! 属性的条目会被静默丢弃；文档格式不正确是唯一的错误。

use roxmltree::{Document, Node, ParsingOptions};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::core::models::TestCase;

const TEST_ELEMENT: &str = "test";
const FILENAME_ATTR: &str = "filename";
const RUNFRAMES_ATTR: &str = "runframes";

/// Fatal manifest problems. Both abort the run before any case executes.
/// 致命的清单问题。两者都会在任何用例执行前中止运行。
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse XML: {0}")]
    Parse(#[from] roxmltree::Error),
}

/// Which filenames survive loading.
///
/// An exact filename takes precedence over the substring filter: when both
/// are given, the substring is not consulted at all.
///
/// 哪些文件名能通过加载。
/// 精确文件名优先于子串过滤：两者同时提供时，完全不检查子串。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    All,
    Exact(&'a str),
    Substring(&'a str),
}

impl<'a> Selection<'a> {
    pub fn new(name_filter: &'a str, exact_test: &'a str) -> Self {
        if !exact_test.is_empty() {
            Selection::Exact(exact_test)
        } else if !name_filter.is_empty() {
            Selection::Substring(name_filter)
        } else {
            Selection::All
        }
    }

    pub fn accepts(&self, filename: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Exact(wanted) => filename == *wanted,
            Selection::Substring(needle) => filename.contains(needle),
        }
    }
}

/// Reads the manifest at `manifest_path` and returns the selected cases in
/// document order.
///
/// # Arguments
/// * `manifest_path` - Location of the XML manifest.
/// * `name_filter` - Substring a filename must contain; empty disables it.
/// * `exact_test` - Exact filename to keep; empty disables it.
///
/// # Errors
/// [`ManifestError::Read`] when the file cannot be read, and
/// [`ManifestError::Parse`] when it is not well-formed XML.
pub fn load(
    manifest_path: &Path,
    name_filter: &str,
    exact_test: &str,
) -> Result<Vec<TestCase>, ManifestError> {
    let text = fs::read_to_string(manifest_path).map_err(|source| ManifestError::Read {
        path: manifest_path.to_path_buf(),
        source,
    })?;
    parse(&text, name_filter, exact_test)
}

/// Same as [`load`], for a manifest already held in memory.
pub fn parse(xml: &str, name_filter: &str, exact_test: &str) -> Result<Vec<TestCase>, ManifestError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let document = Document::parse_with_options(xml, options)?;
    let selection = Selection::new(name_filter, exact_test);

    let cases: Vec<TestCase> = document
        .root_element()
        .children()
        .filter(|node| node.has_tag_name(TEST_ELEMENT))
        .filter_map(|node| read_entry(node, selection))
        .collect();

    debug!(count = cases.len(), ?selection, "manifest loaded");
    Ok(cases)
}

/// Lenient entry rule: a `<test>` element becomes a case only when it carries
/// a non-empty `filename`, passes the selection, and has a non-empty
/// `runframes` that parses as an integer. Anything else is skipped and the
/// load continues; malformed entries are never an error and are not counted.
///
/// 宽松条目规则：只有当 `<test>` 元素具有非空的 `filename`、通过选择过滤，
/// 并且具有可解析为整数的非空 `runframes` 时，才会成为用例。
/// 其他情况一律跳过并继续加载；格式错误的条目从不视为错误，也不计数。
fn read_entry(node: Node<'_, '_>, selection: Selection<'_>) -> Option<TestCase> {
    let filename = node.attribute(FILENAME_ATTR).filter(|v| !v.is_empty());
    let runframes = node.attribute(RUNFRAMES_ATTR).filter(|v| !v.is_empty());
    let (Some(filename), Some(runframes)) = (filename, runframes) else {
        debug!(
            byte_offset = node.range().start,
            "skipping manifest entry without filename or runframes"
        );
        return None;
    };

    if !selection.accepts(filename) {
        return None;
    }

    match runframes.trim().parse::<i64>() {
        Ok(run_frames) => Some(TestCase::new(filename, run_frames)),
        Err(e) => {
            debug!(filename, runframes, error = %e, "skipping manifest entry with invalid runframes");
            None
        }
    }
}
