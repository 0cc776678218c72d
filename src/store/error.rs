//! Entry store error types
//!
//! Defines all errors that can occur in the store layer.

use thiserror::Error;
use uuid::Uuid;

use crate::store::types::MAX_REPLIES;

/// Errors that can occur in the entry store
#[derive(Error, Debug)]
pub enum StoreError {
    /// Requested entry does not exist
    #[error("Entry not found: {0}")]
    EntryNotFound(Uuid),

    /// Entry already holds the maximum number of replies
    #[error("Entry {0} has reached the limit of {MAX_REPLIES} replies")]
    ReplyLimitReached(Uuid),

    /// I/O operation on the journal file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Journal serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let id = Uuid::nil();
        let err = StoreError::EntryNotFound(id);
        assert_eq!(
            err.to_string(),
            format!("Entry not found: {}", id)
        );

        let err = StoreError::ReplyLimitReached(id);
        assert_eq!(
            err.to_string(),
            format!("Entry {} has reached the limit of 3 replies", id)
        );
    }
}
