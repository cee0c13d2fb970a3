// Shared test helpers for integration tests
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

/// Three entries, the middle one with a non-numeric `runframes`.
pub const SAMPLE_MANIFEST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<tests>
  <test filename="a.nes" runframes="100"/>
  <test filename="b.nes" runframes="x"/>
  <test filename="c.nes" runframes="50"/>
</tests>
"#;

/// A build tool that fails every ROM whose path contains "fail".
pub const FAIL_ON_NAME_TOOL: &str = r#"sh -c 'case "$2" in *fail*) exit 3;; esac' sh"#;

pub fn setup_test_environment() -> TempDir {
    tempdir().expect("Failed to create temporary directory")
}

/// Writes `content` as `test_roms.xml` into `dir` and returns its path.
pub fn write_manifest(dir: &Path, content: &str) -> PathBuf {
    let manifest_path = dir.join("test_roms.xml");
    fs::write(&manifest_path, content).expect("Failed to write manifest");
    manifest_path
}

/// Writes `content` as `RomTests.toml` into `dir` and returns its path.
pub fn write_config(dir: &Path, content: &str) -> PathBuf {
    let config_path = dir.join("RomTests.toml");
    fs::write(&config_path, content).expect("Failed to write config");
    config_path
}

/// The runner binary with English output, run from `dir` so no stray
/// `RomTests.toml` is picked up.
pub fn runner_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("romtest-runner").expect("binary should be built");
    cmd.current_dir(dir).arg("--lang").arg("en").env_remove("RUST_LOG");
    cmd
}
