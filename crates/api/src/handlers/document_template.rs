//! Handlers for the `/document-templates` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use festa_core::actions;
use festa_core::error::CoreError;
use festa_core::types::DbId;
use festa_db::models::document_template::{
    CreateDocumentTemplate, DocumentTemplate, UpdateDocumentTemplate,
};
use festa_db::repositories::DocumentTemplateRepo;

use crate::audit;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

const ENTITY: &str = "DocumentTemplates";

/// POST /api/v1/document-templates
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateDocumentTemplate>,
) -> AppResult<(StatusCode, Json<DocumentTemplate>)> {
    let template = DocumentTemplateRepo::create(&state.pool, &input).await?;
    audit::record(
        &state.pool,
        actions::CREATE,
        ENTITY,
        template.id,
        Some(auth.user_id),
        None,
    )
    .await;
    Ok((StatusCode::CREATED, Json(template)))
}

/// GET /api/v1/document-templates
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<Vec<DocumentTemplate>>> {
    let templates = DocumentTemplateRepo::list(&state.pool).await?;
    Ok(Json(templates))
}

/// GET /api/v1/document-templates/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DocumentTemplate>> {
    let template = DocumentTemplateRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Document template", id)))?;
    Ok(Json(template))
}

/// PUT /api/v1/document-templates/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDocumentTemplate>,
) -> AppResult<Json<DocumentTemplate>> {
    let template = DocumentTemplateRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Document template", id)))?;
    audit::record(
        &state.pool,
        actions::UPDATE,
        ENTITY,
        id,
        Some(auth.user_id),
        None,
    )
    .await;
    Ok(Json(template))
}

/// DELETE /api/v1/document-templates/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = DocumentTemplateRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("Document template", id)));
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
