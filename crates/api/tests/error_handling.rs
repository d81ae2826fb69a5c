//! Tests for `AppError` → HTTP response mapping.
//!
//! Each `AppError` variant must produce its one deterministic transport
//! status and numeric outcome code. These tests call `IntoResponse`
//! directly on `AppError` values -- no server, no database.

use axum::response::IntoResponse;
use http_body_util::BodyExt;
use spycat_api::breed::BreedApiError;
use spycat_api::error::AppError;
use spycat_core::error::CoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (axum::http::StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: CoreError::NotFound maps to 404 with code 4
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "mission",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::NOT_FOUND);
    assert_eq!(json["code"], 4);
    assert_eq!(json["message"], "mission not found: id 42");
}

// ---------------------------------------------------------------------------
// Test: CoreError::Forbidden maps to 403 with code 6
// ---------------------------------------------------------------------------

#[tokio::test]
async fn forbidden_error_returns_403() {
    let err = AppError::Core(CoreError::Forbidden(
        "mission has cat already assigned".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::FORBIDDEN);
    assert_eq!(json["code"], 6);
    assert_eq!(json["message"], "Forbidden: mission has cat already assigned");
}

// ---------------------------------------------------------------------------
// Test: CoreError::Validation maps to 400 with code 1
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("too many targets".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], 1);
}

// ---------------------------------------------------------------------------
// Test: AppError::BadRequest maps to 400 with code 1
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("invalid breed: Dragon".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], 1);
    assert_eq!(json["message"], "Bad request: invalid breed: Dragon");
}

// ---------------------------------------------------------------------------
// Test: sqlx RowNotFound classifies as not-found (code 4)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn row_not_found_classifies_as_not_found() {
    let err = AppError::Database(sqlx::Error::RowNotFound);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::NOT_FOUND);
    assert_eq!(json["code"], 4);
}

// ---------------------------------------------------------------------------
// Test: other sqlx errors classify as database-error (code 3, 422)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn other_database_error_returns_422() {
    let err = AppError::Database(sqlx::Error::Protocol("connection reset".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], 3);
    // Database internals never leak into the response body.
    assert_eq!(json["message"], "a database error occurred");
}

// ---------------------------------------------------------------------------
// Test: breed registry failure maps to external-request-fail (code 8, 422)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn breed_failure_returns_422_with_code_8() {
    let err = AppError::Breed(BreedApiError::ApiError { status: 503 });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], 8);
}
