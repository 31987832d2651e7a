//! Handlers for the `/events` resource: CRUD, budget conversion, and
//! finalization.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use festa_core::actions;
use festa_core::error::CoreError;
use festa_core::status::EVENT_FINALIZED;
use festa_core::types::DbId;
use festa_db::models::event::{
    CreateEvent, CreateEventFromBudget, Event, EventWithDetails, UpdateEvent,
};
use festa_db::repositories::{BudgetRepo, EventRepo};
use serde_json::json;

use crate::audit;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

const ENTITY: &str = "Events";

/// POST /api/v1/events
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateEvent>,
) -> AppResult<(StatusCode, Json<EventWithDetails>)> {
    let event = EventRepo::create(&state.pool, &input).await?;
    audit::record(
        &state.pool,
        actions::CREATE,
        ENTITY,
        event.event.id,
        Some(auth.user_id),
        Some(json!({ "title": event.event.title })),
    )
    .await;
    Ok((StatusCode::CREATED, Json(event)))
}

/// POST /api/v1/events/from-budget
///
/// Convert a budget straight into an event. The budget's line items become
/// the event's reservation lines and are echoed in the audit payload.
pub async fn create_from_budget(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateEventFromBudget>,
) -> AppResult<(StatusCode, Json<Event>)> {
    let items = BudgetRepo::items_for(&state.pool, input.budget_id).await?;
    let event = EventRepo::create_from_budget(&state.pool, input.budget_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Budget", input.budget_id)))?;
    let item_lines: Vec<String> = items.into_iter().map(|i| i.description).collect();
    audit::record(
        &state.pool,
        actions::CREATE_FROM_BUDGET,
        ENTITY,
        event.id,
        Some(auth.user_id),
        Some(json!({ "budget_id": input.budget_id, "budget_items": item_lines })),
    )
    .await;
    Ok((StatusCode::CREATED, Json(event)))
}

/// GET /api/v1/events
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<Vec<EventWithDetails>>> {
    let events = EventRepo::list(&state.pool).await?;
    Ok(Json(events))
}

/// GET /api/v1/events/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<EventWithDetails>> {
    let event = EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Event", id)))?;
    Ok(Json(event))
}

/// PUT /api/v1/events/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEvent>,
) -> AppResult<Json<EventWithDetails>> {
    let event = EventRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Event", id)))?;
    audit::record(
        &state.pool,
        actions::UPDATE,
        ENTITY,
        id,
        Some(auth.user_id),
        None,
    )
    .await;
    Ok(Json(event))
}

/// PATCH /api/v1/events/{id}/finalize
pub async fn finalize(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Event>> {
    let previous = EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Event", id)))?;
    let event = EventRepo::update_status(&state.pool, id, EVENT_FINALIZED)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Event", id)))?;
    audit::record(
        &state.pool,
        actions::UPDATE_STATUS,
        ENTITY,
        id,
        Some(auth.user_id),
        Some(json!({ "from": previous.event.status, "to": event.status })),
    )
    .await;
    Ok(Json(event))
}

/// DELETE /api/v1/events/{id}
///
/// Children, transactions, and feedback are removed by the cascade
/// constraints.
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = EventRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("Event", id)));
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
