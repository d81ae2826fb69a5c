//! Handlers for the `/cats` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use spycat_core::types::DbId;
use spycat_db::models::cat::{CreateCat, UpdateCat};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::Envelope;
use crate::state::AppState;

/// Query parameters for the cat listing.
#[derive(Debug, Deserialize)]
pub struct ListCatsQuery {
    pub breed: Option<String>,
}

/// GET /api/v1/cats
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListCatsQuery>,
) -> AppResult<Json<Envelope>> {
    let cats = state.cats.list(query.breed.as_deref()).await?;
    Ok(Json(Envelope::ok().key("cats", &cats)))
}

/// GET /api/v1/cats/{cat_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(cat_id): Path<DbId>,
) -> AppResult<Json<Envelope>> {
    let cat = state.cats.get(cat_id).await?;
    Ok(Json(Envelope::ok().key("cat", &cat)))
}

/// POST /api/v1/cats
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCat>,
) -> AppResult<Json<Envelope>> {
    input
        .validate()
        .map_err(|err| AppError::BadRequest(err.to_string()))?;

    let cat = state.cats.create(&input).await?;
    Ok(Json(Envelope::ok().key("cat", &cat).message("cat created")))
}

/// PATCH /api/v1/cats/{cat_id}
///
/// Salary is the only mutable cat field.
pub async fn update_salary(
    State(state): State<AppState>,
    Path(cat_id): Path<DbId>,
    Json(input): Json<UpdateCat>,
) -> AppResult<Json<Envelope>> {
    state.cats.update_salary(cat_id, input.salary).await?;
    Ok(Json(Envelope::ok().message("cat updated")))
}

/// DELETE /api/v1/cats/{cat_id}
pub async fn delete(
    State(state): State<AppState>,
    Path(cat_id): Path<DbId>,
) -> AppResult<Json<Envelope>> {
    state.cats.delete(cat_id).await?;
    Ok(Json(Envelope::ok().message("cat deleted")))
}
