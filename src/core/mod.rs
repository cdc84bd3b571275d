//! Core types shared across the combiner pipeline.

pub mod error;

pub use error::{CombinerError, ErrorContext, user_friendly_error};
