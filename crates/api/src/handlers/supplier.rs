//! Handlers for the `/suppliers` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use festa_core::actions;
use festa_core::error::CoreError;
use festa_core::types::DbId;
use festa_db::models::supplier::{CreateSupplier, Supplier, SupplierFilter, UpdateSupplier};
use festa_db::repositories::SupplierRepo;

use crate::audit;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

const ENTITY: &str = "Suppliers";

/// POST /api/v1/suppliers
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateSupplier>,
) -> AppResult<(StatusCode, Json<Supplier>)> {
    let supplier = SupplierRepo::create(&state.pool, &input).await?;
    audit::record(
        &state.pool,
        actions::CREATE,
        ENTITY,
        supplier.id,
        Some(auth.user_id),
        None,
    )
    .await;
    Ok((StatusCode::CREATED, Json(supplier)))
}

/// GET /api/v1/suppliers?category=&status=&search=
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(filter): Query<SupplierFilter>,
) -> AppResult<Json<Vec<Supplier>>> {
    let suppliers = SupplierRepo::list(&state.pool, &filter).await?;
    Ok(Json(suppliers))
}

/// GET /api/v1/suppliers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Supplier>> {
    let supplier = SupplierRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Supplier", id)))?;
    Ok(Json(supplier))
}

/// PUT /api/v1/suppliers/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSupplier>,
) -> AppResult<Json<Supplier>> {
    let supplier = SupplierRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Supplier", id)))?;
    audit::record(
        &state.pool,
        actions::UPDATE,
        ENTITY,
        id,
        Some(auth.user_id),
        None,
    )
    .await;
    Ok(Json(supplier))
}

/// DELETE /api/v1/suppliers/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = SupplierRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("Supplier", id)));
    }
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
