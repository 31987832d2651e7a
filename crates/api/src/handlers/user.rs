//! Handlers for the `/users` resource (admin) and the `/users/me` profile.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use festa_core::actions;
use festa_core::error::CoreError;
use festa_core::types::DbId;
use festa_db::models::user::{CreateUser, UpdateProfile, UpdateUser, User};
use festa_db::repositories::UserRepo;
use serde_json::json;

use crate::audit;
use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

const ENTITY: &str = "Users";

/// GET /api/v1/users (admin)
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
) -> AppResult<Json<Vec<User>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users))
}

/// POST /api/v1/users (admin)
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    validate_password_strength(&input.password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    let user = UserRepo::create(
        &state.pool,
        &input.name,
        &input.email,
        &password_hash,
        input.role_id,
    )
    .await?;
    audit::record(
        &state.pool,
        actions::CREATE,
        ENTITY,
        user.id,
        Some(admin.user_id),
        Some(json!({ "email": user.email })),
    )
    .await;
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/v1/users/{id} (admin)
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<User>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", id)))?;
    Ok(Json(user))
}

/// PUT /api/v1/users/{id} (admin)
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUser>,
) -> AppResult<Json<User>> {
    let user = UserRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", id)))?;
    audit::record(
        &state.pool,
        actions::UPDATE,
        ENTITY,
        id,
        Some(admin.user_id),
        None,
    )
    .await;
    Ok(Json(user))
}

/// DELETE /api/v1/users/{id} (admin)
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = UserRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("User", id)));
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

/// GET /api/v1/users/me
pub async fn get_me(State(state): State<AppState>, auth: AuthUser) -> AppResult<Json<User>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", auth.user_id)))?;
    Ok(Json(user))
}

/// PUT /api/v1/users/me
pub async fn update_me(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<UpdateProfile>,
) -> AppResult<Json<User>> {
    let user = UserRepo::update_profile(&state.pool, auth.user_id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", auth.user_id)))?;
    audit::record(
        &state.pool,
        actions::UPDATE,
        ENTITY,
        user.id,
        Some(auth.user_id),
        None,
    )
    .await;
    Ok(Json(user))
}
