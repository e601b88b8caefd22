// crates/roomfinder-core/src/error.rs
use thiserror::Error;

/// Errors raised while loading, converting or caching the room dataset
/// and the page configuration.
///
/// Search itself never fails: an unknown room is an ordinary
/// [`SearchOutcome::NotFound`](crate::page::SearchOutcome::NotFound).
#[derive(Debug, Error)]
pub enum RoomError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Bincode error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RoomError>;
