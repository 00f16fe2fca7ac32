//! Application layer for kit-editor.
//!
//! Knows *what* happens on a load or a save, but delegates *how* bytes are
//! read and written to a [`ConfigStore`] supplied by the infrastructure
//! layer.
//!
//! # What does NOT belong here?
//!
//! - Opening files or sockets (that is infrastructure)
//! - HTTP status codes and routing (that is infrastructure)
//! - Parsing or formatting the menu text (that is `kit-core`)

pub mod config_service;

pub use config_service::{ConfigService, ConfigStore, ServiceError, StoreError};
