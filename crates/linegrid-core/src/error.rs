//! Error types for Linegrid core.

use linegrid_engine::EngineError;
use thiserror::Error;

/// Errors that can occur while loading, editing or exporting lines.
#[derive(Error, Debug)]
pub enum LinegridError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Invalid input for {column}: {message}")]
    InvalidInput { column: String, message: String },

    #[error("Column is not editable: {0}")]
    NotEditable(String),

    #[error("No edit in progress")]
    NoEditInProgress,

    #[error("Clipboard unavailable")]
    ClipboardUnavailable,

    #[error("Refusing to read {path}: file too large ({size} bytes, max {max})")]
    FileTooLarge { path: String, size: u64, max: u64 },
}

pub type Result<T> = std::result::Result<T, LinegridError>;
