//! Error types for the selection geometry.

use thiserror::Error;

/// Errors raised while building or querying a column layout.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),

    #[error("Column layout is empty")]
    EmptyLayout,

    #[error("Invalid cell coordinate: {0}")]
    InvalidCoord(String),
}
