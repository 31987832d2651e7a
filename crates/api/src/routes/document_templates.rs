//! Route definitions for the `/document-templates` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::document_template;
use crate::state::AppState;

/// Routes mounted at `/document-templates`.
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
        .route(
            "/",
            get(document_template::list).post(document_template::create),
        )
        .route(
            "/{id}",
            get(document_template::get_by_id)
                .put(document_template::update)
                .delete(document_template::delete),
        )
}
