//! Route definitions for the `/transactions` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::transaction;
use crate::state::AppState;

/// Routes mounted at `/transactions`.
///
/// ```text
/// GET    /              -> list (?start=&end=&kind=&category=&status=)
/// POST   /              -> create
/// GET    /categories    -> list_categories
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
/// PATCH  /{id}/status   -> update_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(transaction::list).post(transaction::create))
        .route("/categories", get(transaction::list_categories))
        .route(
            "/{id}",
            get(transaction::get_by_id)
                .put(transaction::update)
                .delete(transaction::delete),
        )
        .route("/{id}/status", patch(transaction::update_status))
}
