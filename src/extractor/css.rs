//! Stylesheet `@import` extraction.

use regex::Regex;

use super::{DependencyExtractor, Extraction};
use crate::core::error::CombinerError;

/// Extracts `@import url("...");` declarations from stylesheet files.
///
/// A matching line is removed from the output and its quoted path recorded
/// as a dependency. Every other line passes through unchanged.
pub struct CssExtractor {
    import: Regex,
}

impl CssExtractor {
    /// Build the stylesheet extractor.
    pub fn new() -> Result<Self, CombinerError> {
        let import = Regex::new(r#"^@import url\("(.*?)"\);"#).map_err(|e| {
            CombinerError::ConfigError {
                message: format!("invalid import pattern: {e}"),
            }
        })?;
        Ok(Self { import })
    }
}

impl DependencyExtractor for CssExtractor {
    fn extract(&self, _rel_path: &str, raw: &str) -> Extraction {
        let mut extraction = Extraction::default();

        for line in raw.lines() {
            if let Some(caps) = self.import.captures(line) {
                extraction.push_dependency(&caps[1]);
            } else {
                extraction.cleaned.push_str(line);
                extraction.cleaned.push('\n');
            }
        }

        extraction
    }
}
