//! Route definitions for the `/audit` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::audit;
use crate::state::AppState;

/// Routes mounted at `/audit` (admin only).
///
/// ```text
/// GET / -> list (?page=&per_page=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(audit::list))
}
