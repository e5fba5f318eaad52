#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use edicfg_api::config::ServerConfig;
use edicfg_api::router::build_app_router;
use edicfg_api::state::AppState;
use edicfg_core::store::InMemoryStore;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Seed records shared by the integration tests.
pub const SEED: &str = r#"{
    "partners": [
        {"idpartner": "ACME", "active": true},
        {"idpartner": "EUGROUP", "isgroup": true}
    ],
    "channels": [
        {"idchannel": "CH1", "inorout": "in", "type": "file", "path": "/data/in"}
    ],
    "routes": [
        {"idroute": "R1", "seq": 1, "fromchannel": "CH1", "fromeditype": "EDIFACT", "frommessagetype": "ORDERS"}
    ],
    "translates": [
        {"id": 1, "fromeditype": "EDIFACT", "frommessagetype": "ORDERS", "alt": "", "frompartner": "A", "topartner": "B", "tscript": "orders_a_b"},
        {"id": 2, "fromeditype": "EDIFACT", "frommessagetype": "INVOIC", "tscript": "invoic"}
    ]
}"#;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        seed_path: None,
    }
}

/// Build the full application router over a store loaded from [`SEED`].
///
/// Uses the same builder as `main.rs` so tests exercise the production
/// middleware stack.
pub fn build_test_app() -> Router {
    let store = InMemoryStore::from_json(SEED).expect("seed data should parse");
    build_app_with_store(store)
}

pub fn build_app_with_store(store: InMemoryStore) -> Router {
    let config = test_config();
    let state = AppState::new(config.clone(), store);
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
