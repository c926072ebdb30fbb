//! JSON file backend
//!
//! Persists the progress snapshot as pretty-printed JSON, one file per user,
//! in the application data directory. A missing file is not an error; it
//! loads as the empty snapshot so a first run starts clean.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::fs;

use super::{ProgressBackend, StorageError};
use crate::progress::Progress;

/// File-based backend writing `progress.json`.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    /// Backend writing to the given file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The file this backend reads and writes.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl ProgressBackend for JsonFileBackend {
    async fn load(&self) -> Result<Progress, StorageError> {
        match fs::read_to_string(&self.path).await {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Progress::default()),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    async fn save(&self, snapshot: Arc<Progress>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let contents = serde_json::to_string_pretty(&*snapshot)?;
        fs::write(&self.path, contents).await?;

        Ok(())
    }
}
