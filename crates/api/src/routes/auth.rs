//! Route definitions for the `/auth` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST /login       -> login (public)
/// POST /2fa/verify  -> verify_two_factor (public, temp token in body)
/// POST /register    -> register (admin only)
/// GET  /me          -> me
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/2fa/verify", post(auth::verify_two_factor))
        .route("/register", post(auth::register))
        .route("/me", get(auth::me))
}
