//! Route definitions for the `/roles` resource and the permission catalogue.

use axum::routing::get;
use axum::Router;

use crate::handlers::role;
use crate::state::AppState;

/// Routes mounted at `/roles` (all admin only).
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /permissions   -> list_permissions
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(role::list).post(role::create))
        .route("/permissions", get(role::list_permissions))
        .route(
            "/{id}",
            get(role::get_by_id).put(role::update).delete(role::delete),
        )
}
