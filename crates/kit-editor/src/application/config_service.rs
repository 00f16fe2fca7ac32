//! ConfigService: loads and saves the menu through a [`ConfigStore`].
//!
//! This is the only place where the codec meets storage:
//!
//! ```text
//! load:  ConfigStore::load_text ──▶ kit_core::decode ──▶ MenuConfig
//! save:  MenuConfig ──▶ kit_core::encode ──▶ ConfigStore::save_text
//! ```
//!
//! The service holds no menu state between calls.  Every load decodes a fresh
//! model from the store, and every save replaces the stored text with the
//! encoding of the model it is given.  Failures are returned to the caller
//! as-is; the service never retries.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use kit_core::{decode, encode, EncodeError, MenuConfig};
use thiserror::Error;
use tracing::{info, warn};

// ── Storage port ──────────────────────────────────────────────────────────────

/// Failure reading or writing the backing text.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A file system (or simulated) I/O error, including invalid UTF-8.
    #[error("I/O error accessing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Byte-level access to the single backing menu file.
///
/// The production implementation is
/// [`crate::infrastructure::file_store::FileStore`]; tests use
/// [`crate::infrastructure::memory_store::MemoryStore`] or a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Reads the whole menu file as UTF-8 text.
    async fn load_text(&self) -> Result<String, StoreError>;

    /// Replaces the whole menu file with `text`.
    async fn save_text(&self, text: &str) -> Result<(), StoreError>;
}

// ── Service ───────────────────────────────────────────────────────────────────

/// Error type for the config service.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The submitted model cannot be written as a menu file.
    #[error("invalid menu: {0}")]
    Invalid(#[from] EncodeError),
}

/// Reads and writes the menu model.
pub struct ConfigService {
    store: Arc<dyn ConfigStore>,
}

impl ConfigService {
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self { store }
    }

    /// Loads the stored menu file and decodes it.
    ///
    /// Decoding never fails; only the read can.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Store`] when the text cannot be read.
    pub async fn load(&self) -> Result<MenuConfig, ServiceError> {
        let text = self.store.load_text().await.map_err(|e| {
            warn!("failed to read menu file: {e}");
            e
        })?;

        let config = decode(&text);
        info!(
            sections = config.sections.len(),
            items = config.item_count(),
            "loaded menu"
        );
        Ok(config)
    }

    /// Encodes `config` and replaces the stored menu file with the result.
    ///
    /// The model is validated before the store is touched, so an invalid
    /// model leaves the file unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Invalid`] when the model fails validation and
    /// [`ServiceError::Store`] when the write fails.
    pub async fn save(&self, config: &MenuConfig) -> Result<(), ServiceError> {
        let text = encode(config).map_err(|e| {
            warn!("rejected menu: {e}");
            e
        })?;

        self.store.save_text(&text).await.map_err(|e| {
            warn!("failed to write menu file: {e}");
            e
        })?;

        info!(
            sections = config.sections.len(),
            items = config.item_count(),
            bytes = text.len(),
            "saved menu"
        );
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
