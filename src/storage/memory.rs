//! Simulated in-memory backend
//!
//! Stands in for a remote persistence service: snapshots live in memory,
//! every call sleeps for a configurable latency, and load/save failures can
//! be injected. Used by `--volatile` runs and by tests exercising the
//! store's failure paths.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time;

use super::{ProgressBackend, StorageError};
use crate::progress::Progress;

/// Default simulated round-trip latency.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(300);

/// In-memory backend with artificial latency and failure injection.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    latency: Duration,
    stored: Mutex<Option<Progress>>,
    fail_loads: AtomicBool,
    fail_saves: AtomicBool,
}

impl MemoryBackend {
    /// Empty backend with the given latency.
    pub fn new(latency: Duration) -> Self {
        Self { latency, ..Default::default() }
    }

    /// Backend pre-seeded with a snapshot, as if one had been saved before.
    pub fn with_seed(latency: Duration, seed: Progress) -> Self {
        Self { latency, stored: Mutex::new(Some(seed)), ..Default::default() }
    }

    /// Make subsequent loads fail.
    pub fn fail_loads(&self, fail: bool) {
        self.fail_loads.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent saves fail.
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// The last snapshot handed to `save`, if any.
    pub fn stored(&self) -> Option<Progress> {
        lock(&self.stored).clone()
    }
}

fn lock(stored: &Mutex<Option<Progress>>) -> std::sync::MutexGuard<'_, Option<Progress>> {
    stored.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl ProgressBackend for MemoryBackend {
    async fn load(&self) -> Result<Progress, StorageError> {
        time::sleep(self.latency).await;

        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("simulated load failure".to_string()));
        }

        lock(&self.stored).clone().ok_or(StorageError::NotFound)
    }

    async fn save(&self, snapshot: Arc<Progress>) -> Result<(), StorageError> {
        time::sleep(self.latency).await;

        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("simulated save failure".to_string()));
        }

        *lock(&self.stored) = Some((*snapshot).clone());
        Ok(())
    }
}
