//! Error handling for the combiner
//!
//! The error system is built around two types:
//! - [`CombinerError`] - enumerated error types for every failure mode
//! - [`ErrorContext`] - wrapper that adds a user-friendly suggestion and
//!   details for CLI display
//!
//! Every error is terminal: there is no partial-success mode and nothing is
//! retried. The binary converts whatever bubbles up out of the pipeline into
//! an [`ErrorContext`] via [`user_friendly_error`] and exits non-zero after
//! displaying it.
//!
//! # Error Categories
//!
//! - **Configuration**: [`CombinerError::ConfigError`]
//! - **Resolution**: [`CombinerError::FileNotFound`],
//!   [`CombinerError::MissingDependency`]
//! - **Cycles**: [`CombinerError::CircularDependency`] (precise two-file
//!   pair), [`CombinerError::DependencyCycle`] (ordering stalled on a longer
//!   chain)
//! - **Encoding**: [`CombinerError::DecodeError`],
//!   [`CombinerError::EncodeError`]
//! - **I/O**: [`CombinerError::FileSystemError`], [`CombinerError::IoError`]

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for combiner operations.
///
/// Each variant carries the details an operator needs to locate the failure:
/// file identifiers are root-relative, matching what was written in the
/// source or passed on the command line.
#[derive(Error, Debug)]
pub enum CombinerError {
    /// Invalid command-line usage beyond what argument parsing rejects
    #[error("configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// An entry-point file does not exist or is not a regular file
    #[error("cannot find input file '{path}'")]
    FileNotFound {
        /// The path that could not be found
        path: String,
    },

    /// A declared dependency names a file that does not exist
    #[error("dependency file not found: '{path}' (referenced by '{referenced_by}')")]
    MissingDependency {
        /// The dependency path that could not be resolved
        path: String,
        /// The file whose declaration referenced the missing path
        referenced_by: String,
    },

    /// Two files directly depend on each other
    #[error("circular dependency between '{first}' and '{second}'")]
    CircularDependency {
        /// One file of the mutually dependent pair
        first: String,
        /// The other file of the pair
        second: String,
    },

    /// The dependency graph contains a cycle of three or more files, found
    /// when the topological sort could not place the remaining nodes
    #[error("circular dependency involving: {files}")]
    DependencyCycle {
        /// Comma-separated identifiers of the files left in the cycle
        files: String,
    },

    /// Input bytes are not valid in the negotiated character set
    #[error("file '{path}' is not valid {charset}")]
    DecodeError {
        /// The file that failed to decode
        path: String,
        /// Name of the character set used for decoding
        charset: &'static str,
    },

    /// Combined output contains characters the character set cannot encode
    #[error("output contains characters not representable in {charset}")]
    EncodeError {
        /// Name of the character set used for encoding
        charset: &'static str,
    },

    /// A file system operation failed
    #[error("failed to {operation} '{path}'")]
    FileSystemError {
        /// The operation that failed (e.g. "read", "canonicalize")
        operation: String,
        /// The path the operation was applied to
        path: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Generic I/O error without a more specific classification
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Catch-all for errors that do not fit other variants
    #[error("{message}")]
    Other {
        /// The error description
        message: String,
    },
}

/// Wrapper that pairs an error with user-facing guidance.
///
/// Suggestions are actionable steps the user can take; details explain why
/// the error occurred. Both are optional. [`ErrorContext::display`] prints
/// the colored diagnostic to stderr.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying combiner error
    pub error: CombinerError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: CombinerError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context on stderr with terminal colors.
    ///
    /// The error message is red and bold, details yellow, and the
    /// suggestion green.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into a user-friendly [`ErrorContext`] for CLI display.
///
/// Recognized [`CombinerError`] variants receive tailored suggestions;
/// anything else is wrapped as-is so the original message still reaches the
/// operator.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let combiner_error = match error.downcast::<CombinerError>() {
        Ok(e) => e,
        Err(other) => {
            return ErrorContext::new(CombinerError::Other {
                message: format!("{other:#}"),
            });
        }
    };

    match &combiner_error {
        CombinerError::FileNotFound { .. } => ErrorContext::new(combiner_error)
            .with_suggestion("Check the spelling of the path and that it is relative to --root")
            .with_details("Entry-point files are resolved against the configured root directory"),
        CombinerError::MissingDependency { referenced_by, .. } => {
            let details = format!(
                "A dependency declaration in '{referenced_by}' names a file that does not exist under the root directory"
            );
            ErrorContext::new(combiner_error)
                .with_suggestion("Fix the declaration or create the missing file")
                .with_details(details)
        }
        CombinerError::CircularDependency { .. } => ErrorContext::new(combiner_error)
            .with_suggestion("Remove one of the two declarations to break the cycle")
            .with_details(
                "Two files that require each other cannot be placed in a safe output order",
            ),
        CombinerError::DependencyCycle { .. } => ErrorContext::new(combiner_error)
            .with_suggestion("Break the dependency chain so the files form an acyclic graph"),
        CombinerError::DecodeError { charset, .. } => {
            let suggestion = format!(
                "Pass --charset with the encoding the file was written in (tried {charset})"
            );
            ErrorContext::new(combiner_error).with_suggestion(suggestion)
        }
        CombinerError::EncodeError { .. } => ErrorContext::new(combiner_error)
            .with_suggestion("Use --charset utf-8, which can represent any input"),
        CombinerError::FileSystemError { .. } | CombinerError::IoError(_) => {
            ErrorContext::new(combiner_error)
                .with_suggestion("Check file permissions and that the path is accessible")
        }
        _ => ErrorContext::new(combiner_error),
    }
}
