//! Route definitions for the `/contracts` resource.

use axum::routing::{get, patch, post, put};
use axum::Router;

use crate::handlers::contract;
use crate::state::AppState;

/// Routes mounted at `/contracts`.
///
/// ```text
/// GET    /               -> list
/// POST   /               -> create (custom content)
/// POST   /from-budget    -> create_from_budget (content rendered from budget)
/// GET    /{id}           -> get_by_id
/// DELETE /{id}           -> delete (403 once signed)
/// PUT    /{id}/content   -> update_content
/// PATCH  /{id}/status    -> update_status (signing spawns the event)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(contract::list).post(contract::create))
        .route("/from-budget", post(contract::create_from_budget))
        .route(
            "/{id}",
            get(contract::get_by_id).delete(contract::delete),
        )
        .route("/{id}/content", put(contract::update_content))
        .route("/{id}/status", patch(contract::update_status))
}
