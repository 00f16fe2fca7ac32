//! HTTP server: routes for the editor page and the menu JSON API.
//!
//! | Method | Path          | Response                                         |
//! |--------|---------------|--------------------------------------------------|
//! | GET    | `/`           | the editor page (`text/html`)                    |
//! | GET    | `/api/config` | the decoded menu as JSON                         |
//! | POST   | `/api/config` | encodes the JSON body and overwrites the file    |
//! | OPTIONS| any path      | `200` with an empty body                         |
//! | *      | anything else | `404 Not found`                                  |
//!
//! Every response carries permissive CORS headers so the form also works
//! when opened from a different origin (e.g. a local file).
//!
//! # Error bodies
//!
//! API failures are reported as `{"error": "..."}`.  Storage details are
//! logged, not sent to the browser.

use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use kit_core::MenuConfig;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::application::{ConfigService, ServiceError};
use crate::domain::messages::{ApiError, SaveResponse, INVALID_JSON, READ_FAILED, SAVE_FAILED};
use crate::domain::EditorConfig;
use crate::infrastructure::file_store::FileStore;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    service: Arc<ConfigService>,
    index_path: Arc<PathBuf>,
}

impl AppState {
    pub fn new(service: ConfigService, index_path: impl Into<PathBuf>) -> Self {
        Self {
            service: Arc::new(service),
            index_path: Arc::new(index_path.into()),
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Builds the editor router over `state`.
///
/// Exposed separately from [`run_server`] so tests can drive it without
/// binding a port.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page).fallback(fallback))
        .route(
            "/api/config",
            get(load_config).post(save_config).fallback(fallback),
        )
        .fallback(fallback)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves the editor until `shutdown` resolves.
///
/// The menu file at `config.config_path` is accessed through a
/// [`FileStore`]; nothing is read at startup.
///
/// # Errors
///
/// Returns an error if the listener cannot be bound (e.g., the port is
/// already in use) or the server fails while running.
pub async fn run_server(
    config: EditorConfig,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let store = Arc::new(FileStore::new(config.config_path.clone()));
    let state = AppState::new(ConfigService::new(store), config.index_path.clone());

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind HTTP listener on {}", config.bind_addr))?;

    let local_addr = listener.local_addr().unwrap_or(config.bind_addr);
    info!(
        "kit editor listening on http://{local_addr} (menu file: {})",
        config.config_path.display()
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server terminated with an error")?;

    Ok(())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

async fn index_page(State(state): State<AppState>) -> Response {
    match tokio::fs::read(state.index_path.as_path()).await {
        Ok(page) => ([(header::CONTENT_TYPE, "text/html")], page).into_response(),
        Err(e) => {
            error!("failed to read editor page {}: {e}", state.index_path.display());
            (StatusCode::INTERNAL_SERVER_ERROR, "Error loading page").into_response()
        }
    }
}

async fn load_config(State(state): State<AppState>) -> Response {
    match state.service.load().await {
        Ok(config) => Json(config).into_response(),
        Err(e) => {
            error!("GET /api/config failed: {e}");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, READ_FAILED)
        }
    }
}

async fn save_config(State(state): State<AppState>, body: Bytes) -> Response {
    // Parsed by hand rather than with the `Json` extractor so that a bad body
    // gets the same `{"error": ...}` shape as every other failure.
    let config: MenuConfig = match serde_json::from_slice(&body) {
        Ok(config) => config,
        Err(e) => {
            warn!("POST /api/config rejected malformed body: {e}");
            return api_error(StatusCode::BAD_REQUEST, INVALID_JSON);
        }
    };

    match state.service.save(&config).await {
        Ok(()) => Json(SaveResponse::ok()).into_response(),
        Err(ServiceError::Invalid(e)) => api_error(StatusCode::BAD_REQUEST, e.to_string()),
        Err(ServiceError::Store(e)) => {
            error!("POST /api/config failed: {e}");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, SAVE_FAILED)
        }
    }
}

/// Plain `OPTIONS` requests get an empty 200 on every path; real CORS
/// preflights are answered by the CORS layer before reaching the router.
async fn fallback(method: Method) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    (StatusCode::NOT_FOUND, "Not found").into_response()
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn api_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ApiError::new(message))).into_response()
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
