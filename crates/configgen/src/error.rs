//! Error types for the configuration pass.

use thiserror::Error;

use retrowheel_config_store::StoreError;

/// Errors that abort the configuration pass.
///
/// Absence conditions (no wheels, no catalogue, empty mappings) never
/// appear here; they end the pass as a normal return.
#[derive(Error, Debug)]
pub enum ConfigGenError {
    /// A configuration store write failed. The pass stops immediately;
    /// writes performed up to that point remain applied.
    #[error("configuration store write failed: {0}")]
    Store(#[from] StoreError),
}
