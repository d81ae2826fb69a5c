//! Route definitions.

pub mod cat;
pub mod health;
pub mod mission;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// GET    /cats                                               -> list (optional ?breed=)
/// POST   /cats                                               -> create
/// GET    /cats/{cat_id}                                      -> get_by_id
/// PATCH  /cats/{cat_id}                                      -> update_salary
/// DELETE /cats/{cat_id}                                      -> delete
///
/// GET    /missions                                           -> list
/// POST   /missions                                           -> create
/// GET    /missions/{mission_id}                              -> get_by_id
/// DELETE /missions/{mission_id}                              -> delete
/// PATCH  /missions/{mission_id}/assign/{cat_id}              -> assign_cat
/// PATCH  /missions/{mission_id}/complete                     -> complete
/// POST   /missions/{mission_id}/targets                      -> create_target
/// PATCH  /missions/{mission_id}/targets/{target_id}          -> update_target
/// PATCH  /missions/{mission_id}/targets/{target_id}/complete -> complete_target
/// DELETE /missions/{mission_id}/targets/{target_id}          -> delete_target
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/cats", cat::router())
        .nest("/missions", mission::router())
}
