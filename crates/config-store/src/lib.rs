//! Flat key/value configuration store abstraction for RetroWheel.
//!
//! The wheel configuration pass only needs get-by-key and set-by-key over
//! the emulator's flat startup configuration; serialization into the
//! core's native file format belongs to a collaborator. The seam is the
//! [`ConfigStore`] trait, with [`MemoryConfigStore`] as the in-memory
//! implementation used both in production (the pass mutates a snapshot
//! the launcher later serializes) and in tests.

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod error;
pub mod keys;
pub mod store;

pub use error::StoreError;
pub use store::{ConfigStore, MemoryConfigStore};

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
