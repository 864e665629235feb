//! Error handling for the store module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be encoded before being written.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
