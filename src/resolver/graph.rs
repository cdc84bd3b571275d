//! Dependency graph storage, cycle guarding, and output ordering.
//!
//! Nodes live in a [`petgraph`] arena indexed by [`NodeIndex`], with a map
//! from canonical path to index enforcing at most one node per physical
//! file. An edge `A -> B` means "A depends on B", so B must precede A in
//! the output.
//!
//! Cycle handling is deliberately layered:
//! - [`SourceGraph::try_add_edge`] rejects an edge whose reverse already
//!   exists, catching direct two-file cycles at insertion time with a
//!   precise file pair in the error.
//! - [`SourceGraph::verify_no_mutual_edges`] re-scans every node pair after
//!   the build for mutual direct edges.
//! - [`SourceGraph::topological_order`] stalls on any remaining cycle
//!   (three or more files) and reports the files it could not place.

use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::core::error::CombinerError;

/// Discovery state of a source node.
///
/// A node leaves `Undiscovered` the moment processing of it begins; a node
/// in any other state is never re-entered for scanning. That check, not the
/// recursion itself, is what guarantees termination when the graph contains
/// a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitState {
    /// Created but not yet scanned
    Undiscovered,
    /// Scan started; content not yet set
    InProgress,
    /// Content set; dependencies recorded
    Done,
}

/// One source file in the graph.
#[derive(Debug)]
pub struct SourceNode {
    /// Canonicalized absolute path, the uniqueness key
    pub canonical: PathBuf,
    /// Root-relative identifier used in diagnostics, separators, and
    /// ordering tie-breaks
    pub rel: String,
    /// Cleaned content; `None` until the file has been scanned
    pub content: Option<String>,
    /// Discovery state
    pub state: VisitState,
}

/// The per-run dependency graph and node registry.
///
/// Owned by a single resolver instance; independent resolutions in the same
/// process never share state.
pub struct SourceGraph {
    graph: DiGraph<SourceNode, ()>,
    nodes: HashMap<PathBuf, NodeIndex>,
}

impl SourceGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            nodes: HashMap::new(),
        }
    }

    /// Return the node for `canonical`, creating it in `Undiscovered` state
    /// on first request. Idempotent: repeated calls with the same canonical
    /// path return the same index.
    pub fn get_or_create(&mut self, canonical: &Path, rel: &str) -> NodeIndex {
        if let Some(&index) = self.nodes.get(canonical) {
            return index;
        }
        let index = self.graph.add_node(SourceNode {
            canonical: canonical.to_path_buf(),
            rel: rel.to_string(),
            content: None,
            state: VisitState::Undiscovered,
        });
        self.nodes.insert(canonical.to_path_buf(), index);
        index
    }

    /// Access a node.
    #[must_use]
    pub fn node(&self, index: NodeIndex) -> &SourceNode {
        &self.graph[index]
    }

    /// Update a node's discovery state.
    pub fn set_state(&mut self, index: NodeIndex, state: VisitState) {
        self.graph[index].state = state;
    }

    /// Set a node's cleaned content and mark it `Done`. Content is set
    /// exactly once per node, by the extraction step.
    pub fn set_content(&mut self, index: NodeIndex, content: String) {
        let node = &mut self.graph[index];
        debug_assert!(node.content.is_none(), "content set twice for {}", node.rel);
        node.content = Some(content);
        node.state = VisitState::Done;
    }

    /// Take a node's content out of the graph.
    pub fn take_content(&mut self, index: NodeIndex) -> Option<String> {
        self.graph[index].content.take()
    }

    /// Number of nodes discovered so far.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Insert the edge `from -> to` unless the reverse edge already exists.
    ///
    /// This is the cycle guard: a symmetric two-node check at insertion
    /// time. It detects direct mutual dependencies (and self-dependencies)
    /// the moment the closing edge appears, with the precise file pair in
    /// the error. Longer cycles pass through here and are caught by the
    /// ordering step. Duplicate edges are collapsed.
    pub fn try_add_edge(&mut self, from: NodeIndex, to: NodeIndex) -> Result<(), CombinerError> {
        if from == to || self.graph.contains_edge(to, from) {
            return Err(CombinerError::CircularDependency {
                first: self.graph[to].rel.clone(),
                second: self.graph[from].rel.clone(),
            });
        }
        if !self.graph.contains_edge(from, to) {
            self.graph.add_edge(from, to, ());
        }
        Ok(())
    }

    /// Pairwise scan of the final node set for mutual direct edges.
    ///
    /// Quadratic over the node count. Any pair it finds would normally have
    /// been rejected by [`Self::try_add_edge`] already; this is the
    /// post-build re-check run once after discovery completes.
    pub fn verify_no_mutual_edges(&self) -> Result<(), CombinerError> {
        for x in self.graph.node_indices() {
            for y in self.graph.node_indices() {
                if x < y && self.graph.contains_edge(x, y) && self.graph.contains_edge(y, x) {
                    return Err(CombinerError::CircularDependency {
                        first: self.graph[y].rel.clone(),
                        second: self.graph[x].rel.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Linearize the graph so every file appears after the files it depends
    /// on.
    ///
    /// Kahn's algorithm with a deterministic tie-break: among the nodes
    /// whose dependencies have all been emitted, the one with the
    /// lexicographically smallest root-relative identifier goes next.
    /// Repeated runs over the same graph therefore produce the same
    /// sequence. If nodes remain but none is ready, the graph holds a cycle
    /// that escaped the insertion-time guard; the error names the files
    /// that could not be placed.
    pub fn topological_order(&self) -> Result<Vec<NodeIndex>, CombinerError> {
        let mut pending: HashMap<NodeIndex, usize> = HashMap::new();
        let mut ready: BTreeSet<(&str, NodeIndex)> = BTreeSet::new();

        for index in self.graph.node_indices() {
            let deps = self
                .graph
                .neighbors_directed(index, Direction::Outgoing)
                .count();
            if deps == 0 {
                ready.insert((self.graph[index].rel.as_str(), index));
            } else {
                pending.insert(index, deps);
            }
        }

        let mut order = Vec::with_capacity(self.graph.node_count());
        while let Some((_, index)) = ready.pop_first() {
            order.push(index);
            for dependent in self.graph.neighbors_directed(index, Direction::Incoming) {
                if let Some(remaining) = pending.get_mut(&dependent) {
                    *remaining -= 1;
                    if *remaining == 0 {
                        pending.remove(&dependent);
                        ready.insert((self.graph[dependent].rel.as_str(), dependent));
                    }
                }
            }
        }

        if order.len() != self.graph.node_count() {
            let mut files: Vec<&str> = pending
                .keys()
                .map(|index| self.graph[*index].rel.as_str())
                .collect();
            files.sort_unstable();
            return Err(CombinerError::DependencyCycle {
                files: files.join(", "),
            });
        }

        Ok(order)
    }
}

impl Default for SourceGraph {
    fn default() -> Self {
        Self::new()
    }
}
