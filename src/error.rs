//! Error types for flow model generation.

use thiserror::Error;

/// Errors that abort a whole request.
///
/// Per-symbol failures while enumerating connections never surface here;
/// they are logged and the symbol is skipped.
#[derive(Debug, Error)]
pub enum FlowModelError {
    /// The cursor does not point inside the document.
    #[error("Position {line}:{column} is outside the document")]
    InvalidPosition { line: usize, column: usize },

    /// IO error while reading an index or configuration file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON in an index or configuration file.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The connector lookup failed outright.
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),
}

impl FlowModelError {
    /// Create an invalid position error.
    pub fn invalid_position(line: usize, column: usize) -> Self {
        Self::InvalidPosition { line, column }
    }
}

/// Errors reported by a [`ConnectorLookup`](crate::central::ConnectorLookup) backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The backing store could not be reached.
    #[error("Lookup backend unavailable: {0}")]
    Unavailable(String),

    /// The backing store returned inconsistent data.
    #[error("Corrupt lookup data: {0}")]
    Corrupt(String),
}

impl LookupError {
    /// Create an unavailable-backend error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    /// Create a corrupt-data error.
    pub fn corrupt(message: impl Into<String>) -> Self {
        Self::Corrupt(message.into())
    }
}
