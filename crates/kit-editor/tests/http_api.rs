//! Integration tests for the kit-editor HTTP API.
//!
//! The router is driven in-process with `tower::ServiceExt::oneshot`, backed
//! by a [`MemoryStore`], so no port is bound except in the `run_server`
//! tests at the bottom.

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use kit_core::decode;
use kit_editor::application::ConfigService;
use kit_editor::domain::EditorConfig;
use kit_editor::infrastructure::{router, run_server, AppState, MemoryStore};

const STORED_MENU: &str = "\
menu-title: \"Kits\"
sections:
  weapons:
    icon: DIAMOND_SWORD
    name: \"Weapons\"
    slot: 0
    menu-title: \"Weapons\"
    items:
      - material: DIAMOND_SWORD
        name: \"Excalibur\"
        enchantments:
          - SHARPNESS:5
        unbreakable: true
";

// ── Helpers ───────────────────────────────────────────────────────────────────

fn app_with(store: Arc<MemoryStore>, index_path: PathBuf) -> Router {
    let service = ConfigService::new(store);
    router(AppState::new(service, index_path))
}

fn app(store: Arc<MemoryStore>) -> Router {
    app_with(store, PathBuf::from("/nonexistent/kit-editor/index.html"))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, HeaderMap, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, body.to_vec())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_config(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/config")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

fn json_body(body: &[u8]) -> Value {
    serde_json::from_slice(body).expect("response body must be JSON")
}

// ── GET / ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_index_serves_page_as_html() {
    // Arrange
    let dir = std::env::temp_dir().join(format!("kit_editor_http_{}", Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    let index = dir.join("index.html");
    std::fs::write(&index, "<html><body>editor</body></html>").unwrap();
    let app = app_with(Arc::new(MemoryStore::new(STORED_MENU)), index);

    // Act
    let (status, headers, body) = send(app, get("/")).await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "text/html");
    assert_eq!(body, b"<html><body>editor</body></html>");
    std::fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn test_index_missing_page_is_500() {
    let app = app(Arc::new(MemoryStore::new(STORED_MENU)));

    let (status, _, body) = send(app, get("/")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, b"Error loading page");
}

// ── GET /api/config ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_config_returns_decoded_model() {
    // Arrange
    let app = app(Arc::new(MemoryStore::new(STORED_MENU)));

    // Act
    let (status, headers, body) = send(app, get("/api/config")).await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "application/json");
    assert_eq!(
        json_body(&body),
        json!({
            "menu-title": "Kits",
            "sections": {
                "weapons": {
                    "icon": "DIAMOND_SWORD",
                    "name": "Weapons",
                    "slot": 0,
                    "menu-title": "Weapons",
                    "items": [{
                        "material": "DIAMOND_SWORD",
                        "name": "Excalibur",
                        "enchantments": [{ "type": "SHARPNESS", "level": 5 }],
                        "unbreakable": true
                    }]
                }
            }
        })
    );
}

#[tokio::test]
async fn test_get_config_preserves_section_order() {
    let text = "sections:\n  zeta:\n    slot: 1\n  alpha:\n    slot: 2\n  mid:\n    slot: 3\n";
    let app = app(Arc::new(MemoryStore::new(text)));

    let (_, _, body) = send(app, get("/api/config")).await;

    // serde_json::Value sorts keys, so check the raw text order instead.
    let raw = String::from_utf8(body).unwrap();
    let zeta = raw.find("\"zeta\"").unwrap();
    let alpha = raw.find("\"alpha\"").unwrap();
    let mid = raw.find("\"mid\"").unwrap();
    assert!(zeta < alpha && alpha < mid, "order lost: {raw}");
}

#[tokio::test]
async fn test_get_config_read_failure_is_500() {
    // Arrange
    let app = app(Arc::new(MemoryStore::new(STORED_MENU).failing_loads()));

    // Act
    let (status, _, body) = send(app, get("/api/config")).await;

    // Assert
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json_body(&body), json!({ "error": "Failed to read config" }));
}

// ── POST /api/config ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_post_config_persists_canonical_text() {
    // Arrange
    let store = Arc::new(MemoryStore::new(""));
    let app = app(Arc::clone(&store));
    let model = json!({
        "menu-title": "Kits",
        "sections": {
            "food": {
                "icon": "BREAD",
                "name": "Food",
                "slot": 4,
                "menu-title": "Food",
                "items": [
                    { "material": "BREAD", "amount": 16 },
                    { "material": "APPLE", "amount": 1, "customModelData": 0 }
                ]
            }
        }
    });

    // Act
    let (status, _, body) = send(app, post_config(model.to_string())).await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body), json!({ "success": true }));
    assert_eq!(store.save_count(), 1);

    let text = store.text();
    assert!(text.starts_with("# KitCore Essentials Configuration\n"));
    assert!(text.contains("menu-title: \"Kits\"\n\nsections:\n  food:\n"));
    assert!(text.contains("      - material: BREAD\n        amount: 16\n"));
    assert!(text.ends_with("      - material: APPLE\n"), "defaults must be omitted: {text}");
}

#[tokio::test]
async fn test_post_then_get_returns_same_model() {
    // Arrange
    let store = Arc::new(MemoryStore::new(""));
    let stored = decode(STORED_MENU);
    let body = serde_json::to_string(&stored).unwrap();

    // Act
    let (post_status, _, _) = send(app(Arc::clone(&store)), post_config(body)).await;
    let (get_status, _, got) = send(app(Arc::clone(&store)), get("/api/config")).await;

    // Assert
    assert_eq!(post_status, StatusCode::OK);
    assert_eq!(get_status, StatusCode::OK);
    assert_eq!(json_body(&got), serde_json::to_value(&stored).unwrap());
}

#[tokio::test]
async fn test_post_accepts_form_string_numbers_in_nested_fields() {
    // Arrange
    let store = Arc::new(MemoryStore::new(""));
    let model = json!({
        "menu-title": "Kits",
        "sections": { "misc": { "items": [
            { "material": "BOOK", "enchantments": [{ "type": "MENDING", "level": "2" }] },
            { "material": "FIREWORK_ROCKET", "firework": { "power": null } }
        ] } }
    });

    // Act
    let (status, _, _) = send(app(Arc::clone(&store)), post_config(model.to_string())).await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    let text = store.text();
    assert!(text.contains("          - MENDING:2\n"));
    assert!(text.contains("          power: 1\n"));
}

#[tokio::test]
async fn test_post_malformed_json_is_400_and_file_untouched() {
    // Arrange
    let store = Arc::new(MemoryStore::new(STORED_MENU));
    let app = app(Arc::clone(&store));

    // Act
    let (status, _, body) = send(app, post_config("{ not json")).await;

    // Assert
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json_body(&body), json!({ "error": "Invalid JSON" }));
    assert_eq!(store.text(), STORED_MENU);
    assert_eq!(store.save_count(), 0);
}

#[tokio::test]
async fn test_post_item_without_material_is_400() {
    let store = Arc::new(MemoryStore::new(STORED_MENU));
    let model = json!({
        "menu-title": "Kits",
        "sections": { "food": { "items": [ { "amount": 3 } ] } }
    });

    let (status, _, body) = send(app(Arc::clone(&store)), post_config(model.to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error = json_body(&body)["error"].as_str().unwrap().to_string();
    assert!(error.contains("has no material"), "unexpected message: {error}");
    assert_eq!(store.save_count(), 0);
}

#[tokio::test]
async fn test_post_invalid_section_key_is_400() {
    let store = Arc::new(MemoryStore::new(STORED_MENU));
    let model = json!({ "sections": { "Bad Key": { "items": [] } } });

    let (status, _, _) = send(app(Arc::clone(&store)), post_config(model.to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(store.text(), STORED_MENU);
}

#[tokio::test]
async fn test_post_write_failure_is_500() {
    // Arrange
    let store = Arc::new(MemoryStore::new(STORED_MENU).failing_saves());
    let model = json!({ "menu-title": "Kits", "sections": {} });

    // Act
    let (status, _, body) = send(app(Arc::clone(&store)), post_config(model.to_string())).await;

    // Assert
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json_body(&body), json!({ "error": "Failed to save config" }));
    assert_eq!(store.text(), STORED_MENU);
}

// ── Fallback and CORS ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_unknown_path_is_404() {
    let app = app(Arc::new(MemoryStore::new(STORED_MENU)));

    let (status, _, body) = send(app, get("/api/unknown")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, b"Not found");
}

#[tokio::test]
async fn test_unsupported_method_on_known_path_is_404() {
    let app = app(Arc::new(MemoryStore::new(STORED_MENU)));
    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/api/config")
        .body(Body::empty())
        .unwrap();

    let (status, _, _) = send(app, request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_plain_options_is_200_on_any_path() {
    for uri in ["/", "/api/config", "/anything/else"] {
        // Arrange: no Origin or Access-Control-Request-Method headers
        let app = app(Arc::new(MemoryStore::new(STORED_MENU)));
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        // Act
        let (status, _, body) = send(app, request).await;

        // Assert
        assert_eq!(status, StatusCode::OK, "OPTIONS {uri}");
        assert!(body.is_empty());
    }
}

#[tokio::test]
async fn test_cors_preflight_is_answered() {
    // Arrange
    let app = app(Arc::new(MemoryStore::new(STORED_MENU)));
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/config")
        .header(header::ORIGIN, "http://example.test")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    // Act
    let (status, headers, _) = send(app, request).await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS].to_str().unwrap();
    assert!(methods.contains("POST"), "methods: {methods}");
}

#[tokio::test]
async fn test_cors_header_on_regular_response() {
    let app = app(Arc::new(MemoryStore::new(STORED_MENU)));
    let request = Request::builder()
        .uri("/api/config")
        .header(header::ORIGIN, "http://example.test")
        .body(Body::empty())
        .unwrap();

    let (_, headers, _) = send(app, request).await;

    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

// ── run_server ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_run_server_stops_on_shutdown_signal() {
    let config = EditorConfig {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        ..EditorConfig::default()
    };

    let result = run_server(config, async {}).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_run_server_port_in_use_returns_error() {
    // Arrange: occupy a port first
    let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let config = EditorConfig {
        bind_addr: taken.local_addr().unwrap(),
        ..EditorConfig::default()
    };

    // Act
    let result = run_server(config, async {}).await;

    // Assert
    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("failed to bind"), "unexpected error: {message}");
}
