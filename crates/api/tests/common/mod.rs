//! Shared harness for API integration tests.
//!
//! Mirrors the router construction in `main.rs` (same middleware stack,
//! real repositories) with the external breed registry replaced by a
//! stub, so tests never leave the process except for Postgres.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use spycat_api::breed::{BreedApiError, BreedValidator};
use spycat_api::config::ServerConfig;
use spycat_api::router::build_app_router;
use spycat_api::service::{CatService, MissionService};
use spycat_api::state::AppState;
use spycat_db::repositories::{CatRepo, MissionRepo, TargetRepo};
use spycat_db::store::{CatStore, MissionStore, TargetStore};

// ---------------------------------------------------------------------------
// Breed validator doubles
// ---------------------------------------------------------------------------

/// Accepts every breed name.
pub struct AcceptAllBreeds;

#[async_trait]
impl BreedValidator for AcceptAllBreeds {
    async fn is_valid(&self, _breed: &str) -> Result<bool, BreedApiError> {
        Ok(true)
    }
}

/// Rejects every breed name (registry reachable, name unknown).
pub struct RejectAllBreeds;

#[async_trait]
impl BreedValidator for RejectAllBreeds {
    async fn is_valid(&self, _breed: &str) -> Result<bool, BreedApiError> {
        Ok(false)
    }
}

/// Fails every verification (registry unreachable).
pub struct UnreachableBreeds;

#[async_trait]
impl BreedValidator for UnreachableBreeds {
    async fn is_valid(&self, _breed: &str) -> Result<bool, BreedApiError> {
        Err(BreedApiError::ApiError { status: 503 })
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        cat_api_base: "http://localhost:0".to_string(),
    }
}

/// Build the full application router with the production middleware
/// stack, real repositories, and an accept-all breed stub.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_validator(pool, Arc::new(AcceptAllBreeds))
}

/// Same as [`build_test_app`] but with a caller-chosen breed validator.
pub fn build_test_app_with_validator(pool: PgPool, breeds: Arc<dyn BreedValidator>) -> Router {
    let config = test_config();

    let cat_repo: Arc<dyn CatStore> = Arc::new(CatRepo::new(pool.clone()));
    let mission_repo: Arc<dyn MissionStore> = Arc::new(MissionRepo::new(pool.clone()));
    let target_repo: Arc<dyn TargetStore> = Arc::new(TargetRepo::new(pool.clone()));

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        cats: Arc::new(CatService::new(Arc::clone(&cat_repo), breeds)),
        missions: Arc::new(MissionService::new(mission_repo, target_repo, cat_repo)),
    };

    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(json)).await
}

pub async fn patch(app: Router, uri: &str) -> Response {
    send(app, Method::PATCH, uri, None).await
}

pub async fn patch_json(app: Router, uri: &str, json: serde_json::Value) -> Response {
    send(app, Method::PATCH, uri, Some(json)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
