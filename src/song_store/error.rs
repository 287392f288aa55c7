use super::SongId;
use thiserror::Error;

/// Errors returned by song store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Song {0} not found")]
    NotFound(SongId),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
