//! In-memory [`ConfigStore`] for tests and embedding.
//!
//! Holds the menu text in a buffer instead of a file.  A failure can be
//! injected to exercise the error paths of callers without touching the file
//! system.

use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::{ConfigStore, StoreError};

/// [`ConfigStore`] backed by a `String`.
#[derive(Default)]
pub struct MemoryStore {
    text: Mutex<String>,
    fail_loads: bool,
    fail_saves: bool,
    saves: Mutex<u32>,
}

impl MemoryStore {
    /// Creates a store whose backing text is `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Mutex::new(text.into()),
            ..Self::default()
        }
    }

    /// Makes every `load_text` call fail.
    pub fn failing_loads(mut self) -> Self {
        self.fail_loads = true;
        self
    }

    /// Makes every `save_text` call fail without changing the text.
    pub fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    /// Current backing text.
    pub fn text(&self) -> String {
        self.text.lock().expect("lock poisoned").clone()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> u32 {
        *self.saves.lock().expect("lock poisoned")
    }

    fn injected() -> StoreError {
        StoreError::Io {
            path: PathBuf::from("<memory>"),
            source: std::io::Error::other("injected failure"),
        }
    }
}

#[async_trait]
impl ConfigStore for MemoryStore {
    async fn load_text(&self) -> Result<String, StoreError> {
        if self.fail_loads {
            return Err(Self::injected());
        }
        Ok(self.text())
    }

    async fn save_text(&self, text: &str) -> Result<(), StoreError> {
        if self.fail_saves {
            return Err(Self::injected());
        }
        *self.text.lock().expect("lock poisoned") = text.to_string();
        *self.saves.lock().expect("lock poisoned") += 1;
        Ok(())
    }
}
