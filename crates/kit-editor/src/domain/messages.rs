//! JSON bodies of the browser-facing API.
//!
//! The menu model ([`kit_core::MenuConfig`]) is the body of `GET /api/config`
//! and `POST /api/config`.  The types here cover everything else:
//!
//! ```json
//! {"success":true}
//! {"error":"Failed to read config"}
//! ```

use serde::{Deserialize, Serialize};

/// Message for a failed load from the backing file.
pub const READ_FAILED: &str = "Failed to read config";
/// Message for a failed write to the backing file.
pub const SAVE_FAILED: &str = "Failed to save config";
/// Message for a request body that is not a menu model.
pub const INVALID_JSON: &str = "Invalid JSON";

/// Error body returned with every non-2xx API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Body returned after a successful save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveResponse {
    pub success: bool,
}

impl SaveResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
