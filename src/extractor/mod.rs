//! Dependency extraction strategies.
//!
//! An extractor consumes one file's decoded content line by line, in
//! original order, and produces the cleaned content (declaration lines
//! removed or neutralized, every other line preserved verbatim) together
//! with the root-relative identifiers of the dependencies it found.
//!
//! Extractors perform no I/O and hold no graph state, so each strategy is
//! unit-testable on plain strings. Reading, decoding, and resolving the
//! returned identifiers against the file system happen in the
//! [`resolver`](crate::resolver).

mod css;
mod js;

pub use css::CssExtractor;
pub use js::{ImpliedRule, ScriptExtractor, ScriptSyntax};

use crate::config::SyntaxKind;
use crate::core::error::CombinerError;

/// Result of scanning one file.
#[derive(Debug, Default)]
pub struct Extraction {
    /// The file content with dependency declarations stripped or rewritten.
    /// Non-declaration lines appear verbatim, in original order, each
    /// terminated with a newline.
    pub cleaned: String,
    /// Root-relative identifiers of the dependencies found, in discovery
    /// order, deduplicated.
    pub dependencies: Vec<String>,
}

impl Extraction {
    /// Record a dependency identifier, collapsing duplicates within the
    /// same file to a single entry.
    pub fn push_dependency(&mut self, ident: impl Into<String>) {
        let ident = ident.into();
        if !self.dependencies.contains(&ident) {
            self.dependencies.push(ident);
        }
    }
}

/// One file-scanning strategy.
pub trait DependencyExtractor {
    /// Scan `raw` (the decoded content of the file identified by
    /// `rel_path`) and return its cleaned content and dependencies.
    fn extract(&self, rel_path: &str, raw: &str) -> Extraction;
}

/// Construct the extractor for the selected syntax.
pub fn for_syntax(
    kind: SyntaxKind,
    namespace: &str,
) -> Result<Box<dyn DependencyExtractor>, CombinerError> {
    match kind {
        SyntaxKind::Css => Ok(Box::new(CssExtractor::new()?)),
        SyntaxKind::Js => Ok(Box::new(ScriptExtractor::new(ScriptSyntax::with_namespace(
            namespace,
        ))?)),
    }
}
