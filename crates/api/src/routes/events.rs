//! Route definitions for the `/events` resource.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::{event, feedback};
use crate::state::AppState;

/// Routes mounted at `/events`.
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> create
/// POST   /from-budget      -> create_from_budget
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete
/// PATCH  /{id}/finalize    -> finalize
/// GET    /{id}/feedback    -> feedback::list_for_event
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(event::list).post(event::create))
        .route("/from-budget", post(event::create_from_budget))
        .route(
            "/{id}",
            get(event::get_by_id)
                .put(event::update)
                .delete(event::delete),
        )
        .route("/{id}/finalize", patch(event::finalize))
        .route("/{id}/feedback", get(feedback::list_for_event))
}
