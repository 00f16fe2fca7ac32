//! Kit menu editor: entry point.
//!
//! Serves a browser form for the kit menu file and a small JSON API the form
//! uses to read and overwrite that file.
//!
//! # Usage
//!
//! ```text
//! kit-editor [OPTIONS]
//!
//! Options:
//!   --port        <PORT>  HTTP listener port [default: 8220]
//!   --bind        <IP>    Address to bind to [default: 127.0.0.1]
//!   --config-path <PATH>  Menu file to edit [default: essentials.yml]
//!   --index-path  <PATH>  Editor page served on / [default: index.html]
//! ```
//!
//! # Environment variable overrides
//!
//! CLI args take precedence when both are present.
//!
//! | Variable             | Default          | Description              |
//! |----------------------|------------------|--------------------------|
//! | `KIT_EDITOR_PORT`    | `8220`           | HTTP listener port       |
//! | `KIT_EDITOR_BIND`    | `127.0.0.1`      | Bind address             |
//! | `KIT_EDITOR_CONFIG`  | `essentials.yml` | Menu file path           |
//! | `KIT_EDITOR_INDEX`   | `index.html`     | Editor page path         |
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use kit_editor::domain::config::DEFAULT_PORT;
use kit_editor::domain::EditorConfig;
use kit_editor::infrastructure::run_server;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Web editor for the kit menu file.
#[derive(Debug, Parser)]
#[command(
    name = "kit-editor",
    about = "Browser-based editor for the kit menu file",
    version
)]
struct Cli {
    /// TCP port for the HTTP server.
    #[arg(long, default_value_t = DEFAULT_PORT, env = "KIT_EDITOR_PORT")]
    port: u16,

    /// IP address to bind the HTTP server to.
    ///
    /// The editor has no authentication; only bind to a non-loopback address
    /// on a trusted network.
    #[arg(long, default_value = "127.0.0.1", env = "KIT_EDITOR_BIND")]
    bind: String,

    /// Menu file read by `GET /api/config` and overwritten by `POST /api/config`.
    #[arg(long, default_value = "essentials.yml", env = "KIT_EDITOR_CONFIG")]
    config_path: PathBuf,

    /// HTML page served on `GET /`.
    #[arg(long, default_value = "index.html", env = "KIT_EDITOR_INDEX")]
    index_path: PathBuf,
}

impl Cli {
    /// Converts the parsed CLI arguments into an [`EditorConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if `--bind` is not a valid IP address.
    fn into_editor_config(self) -> anyhow::Result<EditorConfig> {
        let bind_addr: SocketAddr = format!("{}:{}", self.bind, self.port)
            .parse()
            .with_context(|| format!("invalid bind address: '{}:{}'", self.bind, self.port))?;

        Ok(EditorConfig {
            bind_addr,
            config_path: self.config_path,
            index_path: self.index_path,
        })
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Cli::parse().into_editor_config()?;

    info!(
        "kit editor starting: bind={}, config={}, index={}",
        config.bind_addr,
        config.config_path.display(),
        config.index_path.display()
    );

    run_server(config, shutdown_signal()).await?;

    info!("kit editor stopped");
    Ok(())
}

/// Resolves on Ctrl+C.  If the handler cannot be installed, never resolves,
/// so the server keeps running rather than stopping immediately.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("received Ctrl+C, shutting down"),
        Err(e) => {
            error!("failed to listen for Ctrl+C signal: {e}");
            std::future::pending::<()>().await;
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
