#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use admissions_api::config::ServerConfig;
use admissions_api::router::build_app_router;
use admissions_api::state::AppState;
use admissions_core::application::{ApplicationField, ApplicationRecord};
use admissions_core::store::{ApplicationStore, InMemoryApplicationStore, StoreError};
use async_trait::async_trait;
use admissions_db::PgApplicationStore;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config(backup_path: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        backup_path,
        database_max_connections: 5,
    }
}

/// Build the full application router around `store`, with the same
/// middleware stack production uses.
pub fn build_app_with_store(store: Arc<dyn ApplicationStore>, backup_path: PathBuf) -> Router {
    let config = test_config(backup_path);
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Router over an in-memory store seeded with `rows`, in order.
pub fn build_memory_app(rows: &[(&str, &str, f64)]) -> (Router, Arc<InMemoryApplicationStore>) {
    let store = Arc::new(InMemoryApplicationStore::with_records(
        rows.iter()
            .map(|(n, c, s)| ApplicationRecord::new(*n, *c, *s).unwrap())
            .collect(),
    ));
    let app = build_app_with_store(store.clone(), PathBuf::from("backup/backup.json"));
    (app, store)
}

/// Router over PostgreSQL.
pub fn build_pg_app(pool: PgPool, backup_path: PathBuf) -> Router {
    build_app_with_store(Arc::new(PgApplicationStore::new(pool)), backup_path)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A store whose backend is always down.
pub struct UnreachableStore;

fn connection_refused() -> StoreError {
    StoreError::backend(std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "connection refused to db.internal:5432",
    ))
}

#[async_trait]
impl ApplicationStore for UnreachableStore {
    async fn find_by(
        &self,
        _field: ApplicationField,
        _value: &str,
    ) -> Result<Vec<ApplicationRecord>, StoreError> {
        Err(connection_refused())
    }

    async fn find_all(&self) -> Result<Vec<ApplicationRecord>, StoreError> {
        Err(connection_refused())
    }

    async fn insert(&self, _record: &ApplicationRecord) -> Result<(), StoreError> {
        Err(connection_refused())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Err(connection_refused())
    }
}

/// Router whose store always fails.
pub fn build_unreachable_app() -> Router {
    build_app_with_store(Arc::new(UnreachableStore), PathBuf::from("backup/backup.json"))
}
