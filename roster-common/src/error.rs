use thiserror::Error;

/// Local storage errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Favorites key holds something that is not a list of characters
    #[error("stored favorites are corrupt: {0}")]
    CorruptFavorites(String),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage write failed: {0}")]
    WriteFailed(String),
}

/// Character fetch errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with HTTP {0}")]
    Status(u16),
    #[error("parse error: {0}")]
    Parse(String),
}

impl FetchError {
    /// Transport failures and unsuccessful HTTP statuses
    pub fn is_network(&self) -> bool {
        matches!(self, FetchError::Network(_) | FetchError::Status(_))
    }
}
