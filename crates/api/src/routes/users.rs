//! Route definitions for the `/users` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// `/me` is registered before `/{id}` so the literal segment wins.
///
/// ```text
/// GET    /       -> list (admin only)
/// POST   /       -> create (admin only)
/// GET    /me     -> get_me
/// PUT    /me     -> update_me
/// GET    /{id}   -> get_by_id (admin only)
/// PUT    /{id}   -> update (admin only)
/// DELETE /{id}   -> delete (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(user::list).post(user::create))
        .route("/me", get(user::get_me).put(user::update_me))
        .route(
            "/{id}",
            get(user::get_by_id).put(user::update).delete(user::delete),
        )
}
