//! Persistence backends for progress snapshots
//!
//! The store only ever talks to a [`ProgressBackend`]; it does not care how a
//! snapshot is made durable. Failures here are never fatal: the store logs
//! them and keeps serving its in-memory snapshot.

pub mod json;
pub mod memory;

pub use json::JsonFileBackend;
pub use memory::MemoryBackend;

use std::future::Future;
use std::sync::Arc;

use thiserror::Error;

use crate::progress::Progress;

/// Errors a persistence backend can produce.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot could not be serialized or parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No snapshot has ever been saved
    #[error("no saved progress found")]
    NotFound,

    /// Backend is (temporarily) unreachable
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// A place progress snapshots can be loaded from and saved to.
///
/// Both operations are asynchronous and may fail; `save` takes the snapshot
/// behind an `Arc` so the store can hand the same value to a spawned task
/// without copying it.
pub trait ProgressBackend: Send + Sync + 'static {
    /// Load the most recently saved snapshot.
    fn load(&self) -> impl Future<Output = Result<Progress, StorageError>> + Send;

    /// Durably store a snapshot.
    fn save(&self, snapshot: Arc<Progress>) -> impl Future<Output = Result<(), StorageError>> + Send;
}
