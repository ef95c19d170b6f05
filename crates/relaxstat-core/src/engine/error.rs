use thiserror::Error;

use crate::core::io::summary::SummaryError;
use std::path::PathBuf;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Directory does not exist: {}", path.display())]
    MissingDirectory { path: PathBuf },

    #[error("Failed to read directory '{}': {source}", path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write '{}': {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: SummaryError,
    },

    #[error("Baseline group '{0}' is missing")]
    MissingBaseline(String),

    #[error("Statistics unavailable: {0}")]
    Statistics(String),
}
