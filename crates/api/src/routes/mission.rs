use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::mission;
use crate::state::AppState;

/// Routes mounted at `/missions`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(mission::list).post(mission::create))
        .route(
            "/{mission_id}",
            get(mission::get_by_id).delete(mission::delete),
        )
        .route("/{mission_id}/assign/{cat_id}", patch(mission::assign_cat))
        .route("/{mission_id}/complete", patch(mission::complete))
        .route("/{mission_id}/targets", post(mission::create_target))
        .route(
            "/{mission_id}/targets/{target_id}",
            patch(mission::update_target).delete(mission::delete_target),
        )
        .route(
            "/{mission_id}/targets/{target_id}/complete",
            patch(mission::complete_target),
        )
}
