//! Route definitions for the `/budgets` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::budget;
use crate::state::AppState;

/// Routes mounted at `/budgets`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
/// PATCH  /{id}/status   -> update_status (funnel transition)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(budget::list).post(budget::create))
        .route(
            "/{id}",
            get(budget::get_by_id)
                .put(budget::update)
                .delete(budget::delete),
        )
        .route("/{id}/status", patch(budget::update_status))
}
