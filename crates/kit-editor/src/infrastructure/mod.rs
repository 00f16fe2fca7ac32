//! Infrastructure layer for kit-editor.
//!
//! # Responsibilities
//!
//! - Binding the HTTP listener and routing browser requests
//! - Serving the editor page
//! - Reading and writing the menu file on disk
//! - Handling the graceful shutdown signal
//!
//! # What does NOT belong here?
//!
//! - Decoding or encoding menu text (that is `kit-core`)
//! - Load/save orchestration (that is the application layer)
//! - CLI parsing (that is done in `main.rs`)

pub mod file_store;
pub mod http_server;
pub mod memory_store;

pub use file_store::FileStore;
pub use http_server::{router, run_server, AppState};
pub use memory_store::MemoryStore;
