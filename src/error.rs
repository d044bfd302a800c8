//! Single error type for the public API.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("invalid input: {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("saved session has snapshot version {found}, expected {expected}")]
    SnapshotVersion { found: u32, expected: u32 },

    #[error("rates dataset is empty")]
    EmptyDataset,
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
