//! Combiner - a dependency-ordering source-file bundler
//!
//! Combiner takes a set of entry-point files written in a simple module
//! system, where each file may declare dependencies on other files (a
//! stylesheet `@import url("...");` declaration or a script
//! `<ns>.require("...");` call), resolves the full dependency closure, and
//! emits the files concatenated in an order where every file appears after
//! the files it depends on.
//!
//! # Pipeline
//!
//! ```text
//! entry paths -> Resolver (discovery + cycle guard) -> SourceGraph
//!             -> topological order -> Emitter -> stdout or output file
//! ```
//!
//! Discovery is lazy and incremental: a file's dependencies are found by
//! scanning its content line by line, and each newly discovered file is
//! pulled through the same scan exactly once. Mutual (two-file) cycles are
//! rejected at the moment the closing edge is inserted, with an error naming
//! both files; any cycle that slips past that check is rejected when the
//! topological sort stalls.
//!
//! # Core Modules
//!
//! - [`cli`] - command-line surface and execution
//! - [`config`] - run configuration and charset negotiation
//! - [`core`] - error types and user-friendly error reporting
//! - [`extractor`] - per-syntax dependency extraction strategies
//! - [`resolver`] - dependency graph construction and ordering
//! - [`output`] - ordered emission with optional boundary markers
//!
//! # Non-goals
//!
//! Combiner does not parse the grammar of the languages it bundles.
//! Dependency declarations are recognized by line-level pattern matching and
//! all other content passes through opaquely: no minification, no
//! transpilation, no semantic validation.

pub mod cli;
pub mod config;
pub mod core;
pub mod extractor;
pub mod output;
pub mod resolver;
pub mod utils;
