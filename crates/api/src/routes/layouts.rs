//! Route definitions for the `/layouts` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::layout;
use crate::state::AppState;

/// Routes mounted at `/layouts`.
///
/// ```text
/// GET  /       -> list
/// POST /       -> create
/// GET  /{id}   -> get_by_id
/// PUT  /{id}   -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(layout::list).post(layout::create))
        .route("/{id}", get(layout::get_by_id).put(layout::update))
}
