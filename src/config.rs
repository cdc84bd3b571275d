//! Run configuration for a single combine invocation.
//!
//! A [`RunConfig`] is built once from the parsed CLI arguments and passed by
//! reference through the pipeline; nothing in the run consults global state.

use std::path::PathBuf;

use clap::ValueEnum;
use tracing::warn;

use crate::core::error::CombinerError;

/// Which dependency-declaration syntax the run recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SyntaxKind {
    /// Stylesheet `@import url("...");` declarations
    Css,
    /// Script `<ns>.require("...");` calls
    Js,
}

impl SyntaxKind {
    /// Infer the syntax from an entry-point file name.
    ///
    /// `.css` selects the stylesheet strategy; everything else is treated as
    /// script. An explicit `--type` on the command line overrides this.
    #[must_use]
    pub fn infer(entry: &str) -> Self {
        if entry.to_ascii_lowercase().ends_with(".css") {
            Self::Css
        } else {
            Self::Js
        }
    }
}

/// Character set used to decode input files and encode the combined output.
///
/// Negotiation follows the fallback chain: an explicitly named, supported
/// charset wins; an unknown name logs a warning and falls back to UTF-8; no
/// name at all means UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Charset {
    /// UTF-8 (the default)
    #[default]
    Utf8,
    /// ISO-8859-1 / Latin-1, a 1:1 byte-to-char mapping
    Latin1,
}

impl Charset {
    /// Resolve an optional charset name from the command line.
    pub fn negotiate(name: Option<&str>) -> Self {
        let Some(name) = name else {
            return Self::Utf8;
        };
        match name.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Self::Utf8,
            "iso-8859-1" | "iso8859-1" | "latin-1" | "latin1" | "l1" => Self::Latin1,
            other => {
                warn!(charset = other, "unsupported charset, using UTF-8");
                Self::Utf8
            }
        }
    }

    /// Canonical name of the charset, for diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Latin1 => "ISO-8859-1",
        }
    }

    /// Decode raw file bytes into text.
    pub fn decode(self, bytes: &[u8], path: &str) -> Result<String, CombinerError> {
        match self {
            Self::Utf8 => {
                String::from_utf8(bytes.to_vec()).map_err(|_| CombinerError::DecodeError {
                    path: path.to_string(),
                    charset: self.name(),
                })
            }
            // Latin-1 maps every byte directly to the code point of the
            // same value, so decoding cannot fail.
            Self::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
        }
    }

    /// Encode combined output text into bytes.
    pub fn encode(self, text: &str) -> Result<Vec<u8>, CombinerError> {
        match self {
            Self::Utf8 => Ok(text.as_bytes().to_vec()),
            Self::Latin1 => text
                .chars()
                .map(|c| {
                    u8::try_from(u32::from(c)).map_err(|_| CombinerError::EncodeError {
                        charset: self.name(),
                    })
                })
                .collect(),
        }
    }
}

/// Everything a single combine run needs to know.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Root directory that entry paths and dependency identifiers resolve
    /// against
    pub root: PathBuf,
    /// Entry-point file identifiers, relative to `root`
    pub inputs: Vec<String>,
    /// Dependency syntax to recognize
    pub syntax: SyntaxKind,
    /// Namespace the script syntax derives its tokens from
    pub namespace: String,
    /// Whether to emit a boundary comment before each file
    pub separator: bool,
    /// Character set for input decoding and output encoding
    pub charset: Charset,
    /// Output file; `None` means stdout
    pub output: Option<PathBuf>,
}
