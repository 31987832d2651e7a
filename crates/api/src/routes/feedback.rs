//! Route definitions for the `/feedback` resource.
//!
//! The event-scoped listing lives under `/events/{id}/feedback`; see
//! [`crate::routes::events`].

use axum::routing::get;
use axum::Router;

use crate::handlers::feedback;
use crate::state::AppState;

/// Routes mounted at `/feedback`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(feedback::list).post(feedback::create))
        .route(
            "/{id}",
            get(feedback::get_by_id)
                .put(feedback::update)
                .delete(feedback::delete),
        )
}
