//! Atomic file output.
//!
//! Output files are written with a write-then-rename strategy: content goes
//! to a temporary sibling first, is synced to disk, and is then renamed
//! over the target. Readers either see the previous file or the complete
//! new one, never a partial write.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Atomically write bytes to `path`.
///
/// Parent directories are created if missing. On any failure the target
/// file is left untouched (a stray `.tmp` sibling may remain).
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    use std::io::Write;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let temp_path = path.with_extension("tmp");

    {
        let mut file = fs::File::create(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;
        file.write_all(content)
            .with_context(|| format!("Failed to write to temp file: {}", temp_path.display()))?;
        file.sync_all()
            .with_context(|| format!("Failed to sync temp file: {}", temp_path.display()))?;
    }

    fs::rename(&temp_path, path).with_context(|| {
        format!(
            "Failed to rename {} to {}",
            temp_path.display(),
            path.display()
        )
    })?;

    Ok(())
}

/// Atomically write a string to `path`.
pub fn safe_write(path: &Path, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}
