//! Domain layer for kit-editor.
//!
//! Plain data types with no dependencies on I/O, networking, or frameworks.
//!
//! - Runtime configuration ([`EditorConfig`])
//! - Bodies of the JSON API responses ([`ApiError`], [`SaveResponse`])
//!
//! The menu model itself lives in `kit-core` and is reused as-is for the API
//! request and response bodies.

pub mod config;
pub mod messages;

pub use config::EditorConfig;
pub use messages::{ApiError, SaveResponse};
