//! Editor configuration types.
//!
//! [`EditorConfig`] is the single source of truth for all runtime settings.
//! It is built from CLI arguments in `main.rs`, or from defaults in tests.
//! The domain never reads the environment itself.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Port the editor has always listened on.
pub const DEFAULT_PORT: u16 = 8220;

/// All runtime configuration for the editor service.
///
/// # Example
///
/// ```rust
/// use kit_editor::domain::EditorConfig;
///
/// let cfg = EditorConfig::default();
/// assert_eq!(cfg.bind_addr.port(), 8220);
/// ```
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// The address and port the HTTP server binds to.
    ///
    /// Defaults to loopback: the editor writes to a server config file and
    /// has no authentication of its own.
    pub bind_addr: SocketAddr,

    /// The menu file that is read on `GET /api/config` and overwritten on
    /// `POST /api/config`.
    pub config_path: PathBuf,

    /// The HTML page served on `GET /`.
    pub index_path: PathBuf,
}

impl Default for EditorConfig {
    /// | Field        | Default            |
    /// |--------------|--------------------|
    /// | bind_addr    | `127.0.0.1:8220`   |
    /// | config_path  | `essentials.yml`   |
    /// | index_path   | `index.html`       |
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT)),
            config_path: PathBuf::from("essentials.yml"),
            index_path: PathBuf::from("index.html"),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port_is_8220() {
        // Arrange / Act
        let cfg = EditorConfig::default();
        // Assert
        assert_eq!(cfg.bind_addr.port(), 8220);
    }

    #[test]
    fn test_default_bind_is_loopback() {
        let cfg = EditorConfig::default();
        assert_eq!(cfg.bind_addr.ip().to_string(), "127.0.0.1");
    }

    #[test]
    fn test_default_paths() {
        let cfg = EditorConfig::default();
        assert_eq!(cfg.config_path, PathBuf::from("essentials.yml"));
        assert_eq!(cfg.index_path, PathBuf::from("index.html"));
    }

    #[test]
    fn test_config_custom_values() {
        let cfg = EditorConfig {
            bind_addr: "0.0.0.0:9000".parse().unwrap(),
            config_path: PathBuf::from("/srv/plugins/KitCore/essentials.yml"),
            index_path: PathBuf::from("/srv/editor/index.html"),
        };
        assert_eq!(cfg.bind_addr.port(), 9000);
        assert!(cfg.config_path.ends_with("essentials.yml"));
    }
}
