//! Error types for calplan.
//!
//! The parsing core distinguishes two failure kinds: [`CalplanError::Format`]
//! for text that does not match the schedule grammar, and
//! [`CalplanError::Validation`] for well-formed text with inconsistent
//! semantics. Both abort the parse; no partial calendar is ever returned.

use thiserror::Error;

/// All errors produced by calplan.
#[derive(Debug, Error)]
pub enum CalplanError {
    /// Malformed syntax: unparsable date, unrecognized weekday name,
    /// missing or duplicate header field, no section delimiters.
    #[error("format error (line {line}): {message}")]
    Format {
        /// 1-based line number in the source document.
        line: usize,
        /// Description of the malformed construct.
        message: String,
    },

    /// Syntactically valid input with inconsistent semantics: end before
    /// start, skip date out of range, empty weekday set, block count
    /// mismatch.
    #[error("validation error ({field}): {message}")]
    Validation {
        /// Name of the offending header field or invariant.
        field: String,
        /// Description of the violation.
        message: String,
    },

    /// File read/write failure in the command-line layer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure in the diagnostic output path.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file problems.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CalplanError {
    /// Shorthand for a [`CalplanError::Format`] error.
    pub fn format(line: usize, message: impl Into<String>) -> Self {
        Self::Format {
            line,
            message: message.into(),
        }
    }

    /// Shorthand for a [`CalplanError::Validation`] error.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}
