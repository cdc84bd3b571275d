//! Integration test suite for the combiner CLI.
//!
//! End-to-end runs of the `combiner` binary over scratch projects, checking
//! the combined output byte for byte where the expected order is fixed.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! Suites:
//! - **combine_css**: stylesheet @import resolution and output order
//! - **combine_js**: script require resolution, kernel and implied deps
//! - **errors**: missing files, cycles, and exit behavior
//! - **output_options**: separator markers, output files, charsets

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

mod combine_js;
mod errors;
mod output_options;
