//! Error types for configuration store operations.

use thiserror::Error;

/// Errors that can occur while writing to a configuration store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing store rejected a write.
    #[error("store rejected write for key `{key}`: {reason}")]
    WriteRejected {
        /// Key whose write was rejected.
        key: String,
        /// Backend-provided reason.
        reason: String,
    },

    /// IO error from a file-backed store.
    #[error("store IO error: {0}")]
    Io(#[from] std::io::Error),
}
