//! Dependency resolution: discovery, graph construction, and ordering.
//!
//! The [`Resolver`] is the driver of the pipeline. Starting from the entry
//! paths it pulls each undiscovered file through the registry and the
//! extractor, wiring dependency edges through the cycle guard, until no new
//! files are discovered. It then runs the post-build mutual-edge scan and
//! linearizes the node set into a safe concatenation order.
//!
//! Execution is single threaded and synchronous. Each file is opened, fully
//! read, and closed before the next file in the recursive discovery order is
//! opened. The first failure (missing file, cycle, decode error, I/O error)
//! aborts the whole run; nothing is retried.

pub mod graph;

use std::path::PathBuf;

use petgraph::graph::NodeIndex;
use tracing::debug;

use crate::config::{Charset, RunConfig};
use crate::core::error::CombinerError;
use crate::extractor::{self, DependencyExtractor};
use graph::{SourceGraph, VisitState};

/// One resolved file, ready for emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    /// Root-relative identifier, used for the boundary marker
    pub rel: String,
    /// Cleaned content with declaration lines stripped or rewritten
    pub content: String,
}

/// Per-run resolution driver.
///
/// Owns the registry and graph for the run; constructing a second resolver
/// gives a fully independent resolution.
pub struct Resolver {
    root: PathBuf,
    charset: Charset,
    extractor: Box<dyn DependencyExtractor>,
    graph: SourceGraph,
}

impl Resolver {
    /// Set up a resolver for the given run configuration.
    pub fn new(config: &RunConfig) -> Result<Self, CombinerError> {
        let root = config
            .root
            .canonicalize()
            .map_err(|source| CombinerError::FileSystemError {
                operation: "resolve root directory".to_string(),
                path: config.root.display().to_string(),
                source,
            })?;
        let extractor = extractor::for_syntax(config.syntax, &config.namespace)?;
        Ok(Self {
            root,
            charset: config.charset,
            extractor,
            graph: SourceGraph::new(),
        })
    }

    /// Resolve the dependency closure of `entries` and return the files in
    /// a safe concatenation order.
    ///
    /// Entry order does not affect which files end up in the result or
    /// their final order; it can only affect which cycle is reported first
    /// when one exists.
    pub fn resolve(mut self, entries: &[String]) -> Result<Vec<ResolvedFile>, CombinerError> {
        for entry in entries {
            let index = self.lookup(entry, None)?;
            self.process(index)?;
        }

        self.graph.verify_no_mutual_edges()?;
        let order = self.graph.topological_order()?;
        debug!(files = order.len(), "resolution complete");

        let mut resolved = Vec::with_capacity(order.len());
        for index in order {
            let rel = self.graph.node(index).rel.clone();
            let content = self.graph.take_content(index).unwrap_or_default();
            resolved.push(ResolvedFile { rel, content });
        }
        Ok(resolved)
    }

    /// Resolve an identifier to a graph node, creating the node on first
    /// sight. Fails if the identifier names no existing file: as a
    /// missing-dependency error when a referencing file is known, or as a
    /// missing-input error for entry points.
    fn lookup(
        &mut self,
        ident: &str,
        referenced_by: Option<&str>,
    ) -> Result<NodeIndex, CombinerError> {
        let path = self.root.join(ident);
        if !path.is_file() {
            return Err(match referenced_by {
                Some(by) => CombinerError::MissingDependency {
                    path: ident.to_string(),
                    referenced_by: by.to_string(),
                },
                None => CombinerError::FileNotFound {
                    path: path.display().to_string(),
                },
            });
        }

        let canonical = path
            .canonicalize()
            .map_err(|source| CombinerError::FileSystemError {
                operation: "canonicalize".to_string(),
                path: path.display().to_string(),
                source,
            })?;
        let rel = self.relative_ident(&canonical, ident);
        Ok(self.graph.get_or_create(&canonical, &rel))
    }

    /// Root-relative identifier for a canonical path, with `/` separators.
    /// Falls back to the spelling used in the declaration when the file
    /// lives outside the root.
    fn relative_ident(&self, canonical: &std::path::Path, ident: &str) -> String {
        canonical.strip_prefix(&self.root).map_or_else(
            |_| ident.to_string(),
            |rel| {
                rel.components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/")
            },
        )
    }

    /// Process one node: scan it, wire its edges, then recurse into its
    /// dependencies.
    ///
    /// A node whose state is not `Undiscovered` is never re-entered; this
    /// is the termination guarantee in the presence of a cycle. The cycle
    /// guard at edge insertion, not the recursion, is what reports cycles.
    fn process(&mut self, index: NodeIndex) -> Result<(), CombinerError> {
        if self.graph.node(index).state != VisitState::Undiscovered {
            return Ok(());
        }
        self.graph.set_state(index, VisitState::InProgress);

        let canonical = self.graph.node(index).canonical.clone();
        let rel = self.graph.node(index).rel.clone();
        debug!(file = %rel, "processing file");

        // The file is read in full and closed here, before any dependency
        // file is opened.
        let bytes =
            std::fs::read(&canonical).map_err(|source| CombinerError::FileSystemError {
                operation: "read".to_string(),
                path: rel.clone(),
                source,
            })?;
        let raw = self.charset.decode(&bytes, &rel)?;
        let extraction = self.extractor.extract(&rel, &raw);

        if extraction.dependencies.is_empty() {
            debug!(file = %rel, "no dependencies found");
        }

        let mut dependencies = Vec::with_capacity(extraction.dependencies.len());
        for ident in &extraction.dependencies {
            let dep_index = self.lookup(ident, Some(&rel))?;
            if dep_index == index {
                // an implied rule resolved back to the declaring file
                continue;
            }
            debug!(file = %rel, dependency = %ident, "has dependency");
            self.graph.try_add_edge(index, dep_index)?;
            dependencies.push(dep_index);
        }

        self.graph.set_content(index, extraction.cleaned);

        for dep_index in dependencies {
            self.process(dep_index)?;
        }
        Ok(())
    }
}
