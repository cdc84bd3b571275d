//! Script `require` extraction.
//!
//! The script strategy is data-driven: every concrete token it matches on
//! derives from a [`ScriptSyntax`] value, so the strategy can be exercised
//! in tests with any namespace and any set of implied-dependency rules.
//!
//! Recognized line shapes, checked in order:
//! 1. While in guard-swallow mode, lines are dropped until a literal `};`
//!    line, which is replaced with a no-op require assignment.
//! 2. `<ns>.require("a.b.c");` is removed and `a/b/c.js` recorded.
//! 3. A line matching an implied rule's marker (by default
//!    `new <ns>.Class(`) is kept and the rule's target recorded.
//! 4. A line containing `<ns>.require = function` starts guard-swallow mode.
//! 5. Any other line mentioning `<ns>.require` is dropped.
//! 6. Everything else passes through.
//!
//! Every script file carries an implicit dependency on the kernel file
//! (`<ns>.js`), except the kernel itself, which gains no dependencies at
//! all: it is foundational and must sort first.

use regex::Regex;

use super::{DependencyExtractor, Extraction};
use crate::core::error::CombinerError;

/// An always-implied dependency, triggered by a line containing `marker`.
#[derive(Debug, Clone)]
pub struct ImpliedRule {
    /// Substring that marks a line as using the helper
    pub marker: String,
    /// Root-relative path of the helper file the line depends on
    pub target: String,
}

/// Token configuration for the script strategy.
///
/// All tokens derive from a namespace, mirroring module systems of the form
/// `app.require("...")` with a bootstrap kernel `app.js`.
#[derive(Debug, Clone)]
pub struct ScriptSyntax {
    /// The namespace the tokens derive from
    pub namespace: String,
    /// Kernel file every script implicitly depends on
    pub kernel: String,
    /// Implied-dependency rules applied per line
    pub implied: Vec<ImpliedRule>,
}

impl ScriptSyntax {
    /// Derive the full token set from a namespace.
    #[must_use]
    pub fn with_namespace(namespace: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
            kernel: format!("{namespace}.js"),
            implied: vec![ImpliedRule {
                marker: format!("new {namespace}.Class("),
                target: format!("{namespace}/_kernel/Class.js"),
            }],
        }
    }
}

impl Default for ScriptSyntax {
    fn default() -> Self {
        Self::with_namespace("app")
    }
}

/// Extracts `require`-style declarations from script files.
pub struct ScriptExtractor {
    syntax: ScriptSyntax,
    require: Regex,
    guard_open: String,
    guard_replacement: String,
    mention: String,
}

impl ScriptExtractor {
    /// Build the script extractor for the given syntax.
    pub fn new(syntax: ScriptSyntax) -> Result<Self, CombinerError> {
        let ns = regex::escape(&syntax.namespace);
        let require = Regex::new(&format!(r#"^{ns}\.require\("([A-Za-z0-9_.]+)"\);"#)).map_err(
            |e| CombinerError::ConfigError {
                message: format!("invalid require pattern: {e}"),
            },
        )?;
        let guard_open = format!("{}.require = function", syntax.namespace);
        let guard_replacement = format!("{}.require = function(){{}};\n", syntax.namespace);
        let mention = format!("{}.require", syntax.namespace);
        Ok(Self {
            syntax,
            require,
            guard_open,
            guard_replacement,
            mention,
        })
    }

    /// Convert a dotted module name into a root-relative file path.
    fn module_to_path(module: &str) -> String {
        let mut path = module.replace('.', "/");
        path.push_str(".js");
        path
    }
}

impl DependencyExtractor for ScriptExtractor {
    fn extract(&self, rel_path: &str, raw: &str) -> Extraction {
        let mut extraction = Extraction::default();

        // The kernel is exempt from gaining dependencies, implicit or
        // declared; its declaration lines are still rewritten below.
        let is_kernel = rel_path == self.syntax.kernel;
        if !is_kernel {
            extraction.push_dependency(&self.syntax.kernel);
        }

        let mut swallowing = false;
        for line in raw.lines() {
            if swallowing {
                if line == "};" {
                    extraction.cleaned.push_str(&self.guard_replacement);
                    swallowing = false;
                }
            } else if let Some(caps) = self.require.captures(line) {
                if !is_kernel {
                    extraction.push_dependency(Self::module_to_path(&caps[1]));
                }
            } else if let Some(rule) = self
                .syntax
                .implied
                .iter()
                .find(|rule| line.contains(&rule.marker))
            {
                if !is_kernel {
                    extraction.push_dependency(&rule.target);
                }
                extraction.cleaned.push_str(line);
                extraction.cleaned.push('\n');
            } else if line.contains(&self.guard_open) {
                swallowing = true;
            } else if line.contains(&self.mention) {
                // bare require mentions are dropped from the bundle
            } else {
                extraction.cleaned.push_str(line);
                extraction.cleaned.push('\n');
            }
        }

        extraction
    }
}
