//! Error types for the linegrid binary

use linegrid_engine::EngineError;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration problems that stop start-up.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid column layout in {}", path.display())]
    Layout {
        path: PathBuf,
        #[source]
        source: EngineError,
    },
}
