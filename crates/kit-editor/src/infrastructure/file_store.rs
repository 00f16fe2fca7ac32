//! File-backed [`ConfigStore`].
//!
//! Reads and writes the single menu file at a fixed path.
//!
//! # Write safety
//!
//! A save writes the new text to a sibling `<name>.tmp` file and renames it
//! over the target, so a reader never observes a half-written menu.  Saves
//! are serialized through an async mutex, so two concurrent POSTs cannot
//! interleave their temp-file writes.  Ordering between concurrent saves is
//! still last-writer-wins.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::{ConfigStore, StoreError};

/// [`ConfigStore`] over a file on the local file system.
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("menu"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(path: &Path, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

#[async_trait]
impl ConfigStore for FileStore {
    async fn load_text(&self) -> Result<String, StoreError> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| Self::io_error(&self.path, e))?;
        debug!(path = %self.path.display(), bytes = text.len(), "read menu file");
        Ok(text)
    }

    async fn save_text(&self, text: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let temp = self.temp_path();

        tokio::fs::write(&temp, text)
            .await
            .map_err(|e| Self::io_error(&temp, e))?;

        if let Err(e) = tokio::fs::rename(&temp, &self.path).await {
            // Best effort: do not leave the temp file behind.
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(Self::io_error(&self.path, e));
        }

        debug!(path = %self.path.display(), bytes = text.len(), "wrote menu file");
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
