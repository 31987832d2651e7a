//! Handlers for the `/roles` and `/permissions` resources (admin).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use festa_core::actions;
use festa_core::error::CoreError;
use festa_core::types::DbId;
use festa_db::models::role::{CreateRole, Permission, Role, RoleWithPermissions, UpdateRole};
use festa_db::repositories::RoleRepo;

use crate::audit;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

const ENTITY: &str = "Roles";

/// GET /api/v1/roles (admin)
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
) -> AppResult<Json<Vec<Role>>> {
    let roles = RoleRepo::list(&state.pool).await?;
    Ok(Json(roles))
}

/// POST /api/v1/roles (admin)
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateRole>,
) -> AppResult<(StatusCode, Json<RoleWithPermissions>)> {
    let role = RoleRepo::create(&state.pool, &input).await?;
    audit::record(
        &state.pool,
        actions::CREATE,
        ENTITY,
        role.role.id,
        Some(admin.user_id),
        None,
    )
    .await;
    Ok((StatusCode::CREATED, Json(role)))
}

/// GET /api/v1/roles/{id} (admin)
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<RoleWithPermissions>> {
    let role = RoleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Role", id)))?;
    Ok(Json(role))
}

/// PUT /api/v1/roles/{id} (admin)
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRole>,
) -> AppResult<Json<RoleWithPermissions>> {
    let role = RoleRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Role", id)))?;
    audit::record(
        &state.pool,
        actions::UPDATE,
        ENTITY,
        id,
        Some(admin.user_id),
        None,
    )
    .await;
    Ok(Json(role))
}

/// DELETE /api/v1/roles/{id} (admin)
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = RoleRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("Role", id)));
    }
    audit::record(
        &state.pool,
        actions::DELETE,
        ENTITY,
        id,
        Some(admin.user_id),
        None,
    )
    .await;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/permissions (admin)
pub async fn list_permissions(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
) -> AppResult<Json<Vec<Permission>>> {
    let permissions = RoleRepo::list_permissions(&state.pool).await?;
    Ok(Json(permissions))
}
