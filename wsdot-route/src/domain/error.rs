//! Error types for route identifier parsing.
//!
//! Three kinds of failure exist: an empty input, an input that does not
//! match the expected grammar, and a caller-supplied configuration that
//! cannot be turned into a grammar at all.

use std::fmt;

/// Error returned when an input string does not match the expected grammar.
///
/// Carries both the offending input and a description of the grammar that
/// was applied (usually the regular expression source).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{input} is not in expected format: {expected}")]
pub struct FormatError {
    input: String,
    expected: String,
}

impl FormatError {
    /// Create a new format error.
    pub fn new(input: impl Into<String>, expected: impl fmt::Display) -> Self {
        Self {
            input: input.into(),
            expected: expected.to_string(),
        }
    }

    /// The input that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The grammar the input was checked against.
    pub fn expected(&self) -> &str {
        &self.expected
    }
}

/// Errors from parsing route identifiers, mileposts and route names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// Input was empty where a non-empty string is required
    #[error("input must be a non-empty string")]
    EmptyInput,

    /// Input did not match the expected grammar
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Caller-supplied grammar configuration is unusable
    #[error("invalid configuration: {reason}")]
    Config { reason: String },
}

impl RouteError {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        RouteError::Config {
            reason: reason.into(),
        }
    }

    /// Returns the format error if this is a grammar mismatch.
    pub fn as_format(&self) -> Option<&FormatError> {
        match self {
            RouteError::Format(e) => Some(e),
            _ => None,
        }
    }
}
