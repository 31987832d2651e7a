//! Handlers for the `/inventory` resource: item CRUD, image upload, stock
//! movements, and category/slim listings.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use festa_core::actions;
use festa_core::error::CoreError;
use festa_core::status::{is_movement_kind, MOVEMENT_KINDS};
use festa_core::types::DbId;
use festa_db::models::inventory::{
    CreateInventoryItem, CreateMovement, InventoryFilter, InventoryItem, InventoryItemSlim,
    InventoryMovement, UpdateInventoryItem,
};
use festa_db::repositories::InventoryRepo;
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use crate::audit;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

const ENTITY: &str = "Inventory";

/// Response for a stock movement: the adjusted item plus the movement row.
#[derive(Debug, Serialize)]
pub struct MovementResponse {
    pub item: InventoryItem,
    pub movement: InventoryMovement,
}

/// POST /api/v1/inventory
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateInventoryItem>,
) -> AppResult<(StatusCode, Json<InventoryItem>)> {
    let item = InventoryRepo::create(&state.pool, &input).await?;
    audit::record(
        &state.pool,
        actions::CREATE,
        ENTITY,
        item.id,
        Some(auth.user_id),
        Some(json!({ "name": item.name })),
    )
    .await;
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/v1/inventory?search=&category=&stock_status=
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(filter): Query<InventoryFilter>,
) -> AppResult<Json<Vec<InventoryItem>>> {
    let items = InventoryRepo::list(&state.pool, &filter).await?;
    Ok(Json(items))
}

/// GET /api/v1/inventory/slim
pub async fn list_slim(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<Vec<InventoryItemSlim>>> {
    let items = InventoryRepo::list_slim(&state.pool).await?;
    Ok(Json(items))
}

/// GET /api/v1/inventory/categories
pub async fn list_categories(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<Vec<String>>> {
    let categories = InventoryRepo::list_categories(&state.pool).await?;
    Ok(Json(categories))
}

/// GET /api/v1/inventory/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<InventoryItem>> {
    let item = InventoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Inventory item", id)))?;
    Ok(Json(item))
}

/// PUT /api/v1/inventory/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateInventoryItem>,
) -> AppResult<Json<InventoryItem>> {
    let item = InventoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Inventory item", id)))?;
    audit::record(
        &state.pool,
        actions::UPDATE,
        ENTITY,
        id,
        Some(auth.user_id),
        None,
    )
    .await;
    Ok(Json(item))
}

/// POST /api/v1/inventory/{id}/image
///
/// Multipart upload of an item image. The file is stored under the upload
/// dir with a uuid filename and referenced by its relative path; a previous
/// image is removed best-effort.
pub async fn upload_image(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<Json<InventoryItem>> {
    let mut stored: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let filename = field.file_name().unwrap_or("upload").to_string();
        let extension = filename.rsplit('.').next().unwrap_or("bin").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        tokio::fs::create_dir_all(&state.config.upload_dir)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to create upload dir: {e}")))?;

        let relative = format!("{}.{extension}", Uuid::new_v4());
        let dest = std::path::Path::new(&state.config.upload_dir).join(&relative);
        tokio::fs::write(&dest, &data)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to store upload: {e}")))?;
        stored = Some(relative);
        break; // first file field only
    }

    let Some(relative) = stored else {
        return Err(AppError::BadRequest(
            "No file received in multipart upload".to_string(),
        ));
    };

    let previous = InventoryRepo::set_image_url(&state.pool, id, Some(&relative))
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Inventory item", id)))?;
    remove_upload(&state.config.upload_dir, previous.as_deref()).await;

    let item = InventoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Inventory item", id)))?;
    audit::record(
        &state.pool,
        actions::UPDATE,
        ENTITY,
        id,
        Some(auth.user_id),
        Some(json!({ "image_url": item.image_url })),
    )
    .await;
    Ok(Json(item))
}

/// DELETE /api/v1/inventory/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let Some(image_url) = InventoryRepo::delete(&state.pool, id).await? else {
        return Err(AppError::Core(CoreError::not_found("Inventory item", id)));
    };
    remove_upload(&state.config.upload_dir, image_url.as_deref()).await;
    audit::record(
        &state.pool,
        actions::DELETE,
        ENTITY,
        id,
        Some(auth.user_id),
        None,
    )
    .await;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/inventory/{id}/movements
///
/// Record an inbound/outbound stock adjustment. An adjustment that would
/// drive the quantity negative is rejected and persists nothing.
pub async fn create_movement(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CreateMovement>,
) -> AppResult<(StatusCode, Json<MovementResponse>)> {
    if !is_movement_kind(&input.kind) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Invalid movement kind '{}'; expected one of {MOVEMENT_KINDS:?}",
            input.kind
        ))));
    }
    // A missing item and a rejected adjustment both come back as None from
    // the guarded update; check existence first to tell them apart.
    InventoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Inventory item", id)))?;

    let Some((item, movement)) = InventoryRepo::apply_movement(&state.pool, id, &input).await?
    else {
        return Err(AppError::BadRequest(
            "Movement would drive the stock quantity negative".to_string(),
        ));
    };
    audit::record(
        &state.pool,
        actions::CREATE,
        ENTITY,
        id,
        Some(auth.user_id),
        Some(json!({ "kind": movement.kind, "quantity": movement.quantity })),
    )
    .await;
    Ok((
        StatusCode::CREATED,
        Json(MovementResponse { item, movement }),
    ))
}

/// GET /api/v1/inventory/{id}/movements
pub async fn list_movements(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<InventoryMovement>>> {
    InventoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Inventory item", id)))?;
    let movements = InventoryRepo::list_movements(&state.pool, id).await?;
    Ok(Json(movements))
}

/// Delete a previously stored upload, logging (not failing) on error.
async fn remove_upload(upload_dir: &str, relative: Option<&str>) {
    let Some(relative) = relative else {
        return;
    };
    let path = std::path::Path::new(upload_dir).join(relative);
    if let Err(err) = tokio::fs::remove_file(&path).await {
        tracing::warn!(error = %err, path = %path.display(), "Failed to remove stale upload");
    }
}
