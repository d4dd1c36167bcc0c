#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use songbook_api::config::{DatabaseConfig, DatabaseSource, EnrichmentConfig, ServerConfig};
use songbook_api::router::build_app_router;
use songbook_api::state::AppState;
use songbook_catalog::testing::{FakeEnricher, MemorySongStore};
use songbook_catalog::CatalogService;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database: DatabaseConfig {
            source: DatabaseSource::Url("postgres://localhost/songbook_test".to_string()),
            max_connections: 1,
        },
        enrichment: EnrichmentConfig {
            base_url: "http://127.0.0.1:1/info".to_string(),
            timeout: Duration::from_secs(1),
        },
    }
}

/// Build the full application router over in-memory collaborators.
pub fn build_test_app(store: Arc<MemorySongStore>, enricher: FakeEnricher) -> Router {
    let config = test_config();
    let catalog = CatalogService::new(store, Arc::new(enricher));
    let state = AppState {
        catalog: Arc::new(catalog),
    };
    build_app_router(state, &config)
}

/// A fresh store plus an app with the default enricher.
pub fn default_app() -> (Arc<MemorySongStore>, Router) {
    let store = Arc::new(MemorySongStore::default());
    let app = build_test_app(Arc::clone(&store), FakeEnricher::default());
    (store, app)
}

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
