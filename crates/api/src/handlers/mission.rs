//! Handlers for the `/missions` resource and its target sub-resource.

use axum::extract::{Path, State};
use axum::Json;
use spycat_core::types::DbId;
use spycat_db::models::mission::CreateMission;
use spycat_db::models::target::{CreateTarget, UpdateTarget};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::Envelope;
use crate::state::AppState;

/// GET /api/v1/missions
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Envelope>> {
    let missions = state.missions.list().await?;
    Ok(Json(Envelope::ok().key("missions", &missions)))
}

/// GET /api/v1/missions/{mission_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(mission_id): Path<DbId>,
) -> AppResult<Json<Envelope>> {
    let mission = state.missions.get(mission_id).await?;
    Ok(Json(Envelope::ok().key("mission", &mission)))
}

/// POST /api/v1/missions
///
/// Creates the mission together with its 1..3 targets in one
/// transaction.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMission>,
) -> AppResult<Json<Envelope>> {
    input
        .validate()
        .map_err(|err| AppError::BadRequest(err.to_string()))?;

    let mission = state.missions.create_mission(&input).await?;
    Ok(Json(
        Envelope::ok()
            .key("mission", &mission)
            .message("mission created"),
    ))
}

/// PATCH /api/v1/missions/{mission_id}/assign/{cat_id}
pub async fn assign_cat(
    State(state): State<AppState>,
    Path((mission_id, cat_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Envelope>> {
    state.missions.assign_cat(mission_id, cat_id).await?;
    Ok(Json(Envelope::ok().message("cat assigned to mission")))
}

/// PATCH /api/v1/missions/{mission_id}/complete
pub async fn complete(
    State(state): State<AppState>,
    Path(mission_id): Path<DbId>,
) -> AppResult<Json<Envelope>> {
    state.missions.complete_mission(mission_id).await?;
    Ok(Json(Envelope::ok().message("mission completed")))
}

/// DELETE /api/v1/missions/{mission_id}
pub async fn delete(
    State(state): State<AppState>,
    Path(mission_id): Path<DbId>,
) -> AppResult<Json<Envelope>> {
    state.missions.delete_mission(mission_id).await?;
    Ok(Json(Envelope::ok().message("mission deleted")))
}

// ---------------------------------------------------------------------------
// Target sub-resource
// ---------------------------------------------------------------------------

/// POST /api/v1/missions/{mission_id}/targets
pub async fn create_target(
    State(state): State<AppState>,
    Path(mission_id): Path<DbId>,
    Json(input): Json<CreateTarget>,
) -> AppResult<Json<Envelope>> {
    input
        .validate()
        .map_err(|err| AppError::BadRequest(err.to_string()))?;

    let target = state.missions.create_target(mission_id, &input).await?;
    Ok(Json(
        Envelope::ok()
            .key("target", &target)
            .message("target created"),
    ))
}

/// PATCH /api/v1/missions/{mission_id}/targets/{target_id}
///
/// Notes are the only mutable target field.
pub async fn update_target(
    State(state): State<AppState>,
    Path((mission_id, target_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateTarget>,
) -> AppResult<Json<Envelope>> {
    state
        .missions
        .update_target(target_id, mission_id, &input.notes)
        .await?;
    Ok(Json(Envelope::ok().message("target updated")))
}

/// PATCH /api/v1/missions/{mission_id}/targets/{target_id}/complete
pub async fn complete_target(
    State(state): State<AppState>,
    Path((mission_id, target_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Envelope>> {
    state
        .missions
        .complete_target(target_id, mission_id)
        .await?;
    Ok(Json(Envelope::ok().message("target completed")))
}

/// DELETE /api/v1/missions/{mission_id}/targets/{target_id}
pub async fn delete_target(
    State(state): State<AppState>,
    Path((mission_id, target_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Envelope>> {
    state.missions.delete_target(target_id, mission_id).await?;
    Ok(Json(Envelope::ok().message("target deleted")))
}
