//! kit-editor library crate.
//!
//! This crate serves a browser form for editing the kit menu file and keeps
//! the file on disk in sync with what the operator saves.
//!
//! # Architecture (clean architecture)
//!
//! ```text
//! Browser (JSON over HTTP)
//!         ↕
//! [kit-editor]
//!   ├── domain/           Pure types: EditorConfig, API response bodies
//!   ├── application/      ConfigService: load = read + decode, save = encode + write
//!   └── infrastructure/
//!         ├── http_server/  axum router and listener
//!         ├── file_store/   ConfigStore over the menu file (tokio::fs)
//!         └── memory_store/ ConfigStore held in memory
//!         ↕
//! essentials.yml (indentation-structured menu file, kit-core codec)
//! ```
//!
//! # Layer rules
//!
//! - `domain` has no I/O, no async and no frameworks.
//! - `application` depends on `domain` and `kit-core`; storage is reached
//!   only through the [`application::ConfigStore`] trait.
//! - `infrastructure` depends on all other layers plus `tokio` and `axum`.

/// Domain layer: runtime settings and API body types (no I/O).
pub mod domain;

/// Application layer: the config service and its storage port.
pub mod application;

/// Infrastructure layer: HTTP server and storage adapters.
pub mod infrastructure;
