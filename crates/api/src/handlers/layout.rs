//! Handlers for the `/layouts` resource: floor-plan template CRUD.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use festa_core::error::CoreError;
use festa_core::types::DbId;
use festa_db::models::layout::{CreateLayoutTemplate, LayoutTemplate, UpdateLayoutTemplate};
use festa_db::repositories::LayoutRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/layouts
pub async fn create(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(input): Json<CreateLayoutTemplate>,
) -> AppResult<(StatusCode, Json<LayoutTemplate>)> {
    let Some(name) = input.name.as_deref() else {
        return Err(AppError::BadRequest("name is required".to_string()));
    };
    let Some(layout_json) = input.layout_json.as_ref() else {
        return Err(AppError::BadRequest("layout_json is required".to_string()));
    };
    let template = LayoutRepo::create(&state.pool, name, layout_json).await?;
    Ok((StatusCode::CREATED, Json(template)))
}

/// GET /api/v1/layouts
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<Vec<LayoutTemplate>>> {
    let templates = LayoutRepo::list(&state.pool).await?;
    Ok(Json(templates))
}

/// GET /api/v1/layouts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<LayoutTemplate>> {
    let template = LayoutRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Layout template", id)))?;
    Ok(Json(template))
}

/// PUT /api/v1/layouts/{id}
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLayoutTemplate>,
) -> AppResult<Json<LayoutTemplate>> {
    let template = LayoutRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Layout template", id)))?;
    Ok(Json(template))
}
