//! Ordered emission of resolved files.
//!
//! The emitter is deliberately dumb: it receives the files already in a
//! safe order and writes them out, optionally preceded by a boundary
//! marker. When an output file is configured the write is atomic
//! (write-then-rename), so a run that fails mid-way can never leave a
//! truncated file that looks valid.

use std::io::Write;

use anyhow::Result;
use tracing::debug;

use crate::config::RunConfig;
use crate::resolver::ResolvedFile;
use crate::utils::fs::atomic_write;

/// Render the ordered files into a single output string.
#[must_use]
pub fn render(files: &[ResolvedFile], separator: bool) -> String {
    let mut combined = String::new();
    for file in files {
        debug!(file = %file.rel, "adding to output");
        if separator {
            combined.push_str(&format!("\n/*------{}------*/\n", file.rel));
        }
        combined.push_str(&file.content);
    }
    combined
}

/// Encode and write the combined output to the configured sink.
pub fn emit(config: &RunConfig, files: &[ResolvedFile]) -> Result<()> {
    let combined = render(files, config.separator);
    let encoded = config.charset.encode(&combined)?;

    match &config.output {
        Some(path) => {
            atomic_write(path, &encoded)?;
            debug!(path = %path.display(), "output written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&encoded)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
