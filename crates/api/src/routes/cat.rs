use axum::routing::get;
use axum::Router;

use crate::handlers::cat;
use crate::state::AppState;

/// Routes mounted at `/cats`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cat::list).post(cat::create))
        .route(
            "/{cat_id}",
            get(cat::get_by_id)
                .patch(cat::update_salary)
                .delete(cat::delete),
        )
}
