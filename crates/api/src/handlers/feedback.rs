//! Handlers for the `/feedback` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use festa_core::actions;
use festa_core::error::CoreError;
use festa_core::types::DbId;
use festa_db::models::feedback::{CreateFeedback, Feedback, UpdateFeedback};
use festa_db::repositories::FeedbackRepo;

use crate::audit;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

const ENTITY: &str = "Feedback";

/// POST /api/v1/feedback
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateFeedback>,
) -> AppResult<(StatusCode, Json<Feedback>)> {
    let feedback = FeedbackRepo::create(&state.pool, &input).await?;
    audit::record(
        &state.pool,
        actions::CREATE,
        ENTITY,
        feedback.id,
        Some(auth.user_id),
        None,
    )
    .await;
    Ok((StatusCode::CREATED, Json(feedback)))
}

/// GET /api/v1/feedback
pub async fn list(State(state): State<AppState>, _auth: AuthUser) -> AppResult<Json<Vec<Feedback>>> {
    let feedback = FeedbackRepo::list(&state.pool).await?;
    Ok(Json(feedback))
}

/// GET /api/v1/events/{event_id}/feedback
pub async fn list_for_event(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(event_id): Path<DbId>,
) -> AppResult<Json<Vec<Feedback>>> {
    let feedback = FeedbackRepo::list_for_event(&state.pool, event_id).await?;
    Ok(Json(feedback))
}

/// GET /api/v1/feedback/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Feedback>> {
    let feedback = FeedbackRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Feedback", id)))?;
    Ok(Json(feedback))
}

/// PUT /api/v1/feedback/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFeedback>,
) -> AppResult<Json<Feedback>> {
    let feedback = FeedbackRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Feedback", id)))?;
    audit::record(
        &state.pool,
        actions::UPDATE,
        ENTITY,
        id,
        Some(auth.user_id),
        None,
    )
    .await;
    Ok(Json(feedback))
}

/// DELETE /api/v1/feedback/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = FeedbackRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("Feedback", id)));
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
