use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use spycat_core::error::CoreError;
use spycat_core::outcome::Outcome;

use crate::breed::BreedApiError;
use crate::response::Envelope;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds the persistence and
/// external-verification failure classes. Implements [`IntoResponse`]
/// to produce the envelope with the classified outcome code.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `spycat-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The breed registry was unreachable or answered abnormally.
    #[error("Breed verification failed: {0}")]
    Breed(#[from] BreedApiError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler and service return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Classify this error into its service outcome code.
    ///
    /// A "no matching row" persistence error is not-found; every other
    /// persistence failure is database-error.
    pub fn outcome(&self) -> Outcome {
        match self {
            AppError::Core(core) => Outcome::from(core),
            AppError::Database(sqlx::Error::RowNotFound) => Outcome::NotFound,
            AppError::Database(_) => Outcome::DatabaseError,
            AppError::Breed(_) => Outcome::ExternalRequestFail,
            AppError::BadRequest(_) => Outcome::BadRequest,
        }
    }
}

/// Map an outcome code to its single transport status.
pub fn outcome_status(outcome: Outcome) -> StatusCode {
    match outcome {
        Outcome::Ok => StatusCode::OK,
        Outcome::BadRequest => StatusCode::BAD_REQUEST,
        Outcome::DatabaseError | Outcome::ExternalRequestFail => StatusCode::UNPROCESSABLE_ENTITY,
        Outcome::NotFound => StatusCode::NOT_FOUND,
        Outcome::Forbidden => StatusCode::FORBIDDEN,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let outcome = self.outcome();

        let message = match &self {
            // Database internals stay out of responses.
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                match err {
                    sqlx::Error::RowNotFound => "resource not found".to_string(),
                    _ => "a database error occurred".to_string(),
                }
            }
            other => other.to_string(),
        };

        (
            outcome_status(outcome),
            Json(Envelope::error(outcome, message)),
        )
            .into_response()
    }
}
