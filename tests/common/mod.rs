//! Common test utilities and fixtures for combiner integration tests.

// Allow dead code because these utilities are shared across test files and
// not every helper is used by every suite
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use assert_cmd::Command;
use tempfile::TempDir;

/// A scratch project directory holding source files for a combiner run.
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    /// Create an empty project in a temporary directory.
    pub fn new() -> Result<Self> {
        let dir = TempDir::new().context("Failed to create temp directory")?;
        Ok(Self { dir })
    }

    /// The project root, to pass as `--root`.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write a source file under the project root, creating parent
    /// directories as needed.
    pub fn write(&self, rel: &str, content: &str) -> Result<PathBuf> {
        self.write_bytes(rel, content.as_bytes())
    }

    /// Write raw bytes under the project root.
    pub fn write_bytes(&self, rel: &str, content: &[u8]) -> Result<PathBuf> {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        fs::write(&path, content)
            .with_context(|| format!("Failed to write fixture {}", path.display()))?;
        Ok(path)
    }

    /// A `combiner` command pre-pointed at this project's root.
    pub fn combiner(&self) -> Command {
        let mut cmd = Command::cargo_bin("combiner").expect("combiner binary");
        cmd.arg("--root").arg(self.dir.path());
        cmd
    }
}
