//! Route definitions for the `/security` resource (own-account hardening).

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::security;
use crate::state::AppState;

/// Routes mounted at `/security`.
///
/// ```text
/// PUT  /password     -> change_password
/// POST /2fa/setup    -> two_factor_setup
/// POST /2fa/enable   -> two_factor_enable
/// POST /2fa/disable  -> two_factor_disable
/// GET  /activity     -> activity (recent audit entries for the caller)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/password", put(security::change_password))
        .route("/2fa/setup", post(security::two_factor_setup))
        .route("/2fa/enable", post(security::two_factor_enable))
        .route("/2fa/disable", post(security::two_factor_disable))
        .route("/activity", get(security::activity))
}
