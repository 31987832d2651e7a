//! Route definitions for the `/inventory` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::inventory;
use crate::state::AppState;

/// Routes mounted at `/inventory`.
///
/// ```text
/// GET    /                  -> list (?category=&status=&search=)
/// POST   /                  -> create
/// GET    /slim              -> list_slim (id + name + quantity only)
/// GET    /categories        -> list_categories
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete
/// POST   /{id}/image        -> upload_image (multipart)
/// GET    /{id}/movements    -> list_movements
/// POST   /{id}/movements    -> create_movement
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(inventory::list).post(inventory::create))
        .route("/slim", get(inventory::list_slim))
        .route("/categories", get(inventory::list_categories))
        .route(
            "/{id}",
            get(inventory::get_by_id)
                .put(inventory::update)
                .delete(inventory::delete),
        )
        .route("/{id}/image", post(inventory::upload_image))
        .route(
            "/{id}/movements",
            get(inventory::list_movements).post(inventory::create_movement),
        )
}
