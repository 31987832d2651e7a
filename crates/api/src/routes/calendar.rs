//! Route definitions for the team calendar views.

use axum::routing::get;
use axum::Router;

use crate::handlers::calendar;
use crate::state::AppState;

/// Routes mounted at `/calendar`.
///
/// ```text
/// GET /               -> events
/// GET /reservations   -> reservations
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(calendar::events))
        .route("/reservations", get(calendar::reservations))
}
