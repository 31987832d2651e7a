//! Handlers for the `/companies` resource (the operator's own profile).
//!
//! Mutations are admin-only; the profile itself is readable by any
//! authenticated user.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use festa_core::actions;
use festa_core::error::CoreError;
use festa_core::types::DbId;
use festa_db::models::company::{Company, CreateCompany, UpdateCompany};
use festa_db::repositories::CompanyRepo;

use crate::audit;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

const ENTITY: &str = "Companies";

/// POST /api/v1/companies (admin)
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateCompany>,
) -> AppResult<(StatusCode, Json<Company>)> {
    let company = CompanyRepo::create(&state.pool, &input).await?;
    audit::record(
        &state.pool,
        actions::CREATE,
        ENTITY,
        company.id,
        Some(admin.user_id),
        None,
    )
    .await;
    Ok((StatusCode::CREATED, Json(company)))
}

/// GET /api/v1/companies
pub async fn list(State(state): State<AppState>, _auth: AuthUser) -> AppResult<Json<Vec<Company>>> {
    let companies = CompanyRepo::list(&state.pool).await?;
    Ok(Json(companies))
}

/// GET /api/v1/companies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Company>> {
    let company = CompanyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Company", id)))?;
    Ok(Json(company))
}

/// PUT /api/v1/companies/{id} (admin)
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCompany>,
) -> AppResult<Json<Company>> {
    let company = CompanyRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Company", id)))?;
    audit::record(
        &state.pool,
        actions::UPDATE,
        ENTITY,
        id,
        Some(admin.user_id),
        None,
    )
    .await;
    Ok(Json(company))
}

/// DELETE /api/v1/companies/{id} (admin)
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CompanyRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("Company", id)));
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
