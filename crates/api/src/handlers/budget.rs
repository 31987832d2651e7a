//! Handlers for the `/budgets` resource: CRUD plus funnel status
//! transitions.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use festa_core::actions;
use festa_core::error::CoreError;
use festa_core::status::{is_funnel_status, FUNNEL_STATUSES};
use festa_core::types::DbId;
use festa_db::models::budget::{Budget, BudgetWithItems, CreateBudget, UpdateBudget};
use festa_db::repositories::BudgetRepo;
use serde::Deserialize;
use serde_json::json;

use crate::audit;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

const ENTITY: &str = "Budgets";

/// Request body for `PATCH /budgets/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateBudgetStatus {
    pub status: String,
}

/// POST /api/v1/budgets
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateBudget>,
) -> AppResult<(StatusCode, Json<BudgetWithItems>)> {
    if let Some(status) = &input.status {
        if !is_funnel_status(status) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Invalid budget status '{status}'; expected one of {FUNNEL_STATUSES:?}"
            ))));
        }
    }
    let budget = BudgetRepo::create(&state.pool, &input).await?;
    audit::record(
        &state.pool,
        actions::CREATE,
        ENTITY,
        budget.budget.id,
        Some(auth.user_id),
        Some(json!({ "code": budget.budget.code })),
    )
    .await;
    Ok((StatusCode::CREATED, Json(budget)))
}

/// GET /api/v1/budgets
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<Vec<BudgetWithItems>>> {
    let budgets = BudgetRepo::list(&state.pool).await?;
    Ok(Json(budgets))
}

/// GET /api/v1/budgets/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<BudgetWithItems>> {
    let budget = BudgetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Budget", id)))?;
    Ok(Json(budget))
}

/// PUT /api/v1/budgets/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBudget>,
) -> AppResult<Json<BudgetWithItems>> {
    let budget = BudgetRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Budget", id)))?;
    audit::record(
        &state.pool,
        actions::UPDATE,
        ENTITY,
        id,
        Some(auth.user_id),
        None,
    )
    .await;
    Ok(Json(budget))
}

/// PATCH /api/v1/budgets/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBudgetStatus>,
) -> AppResult<Json<Budget>> {
    if !is_funnel_status(&input.status) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Invalid budget status '{}'; expected one of {FUNNEL_STATUSES:?}",
            input.status
        ))));
    }
    let previous = BudgetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Budget", id)))?;
    let budget = BudgetRepo::update_status(&state.pool, id, &input.status)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Budget", id)))?;
    audit::record(
        &state.pool,
        actions::UPDATE_STATUS,
        ENTITY,
        id,
        Some(auth.user_id),
        Some(json!({ "from": previous.budget.status, "to": budget.status })),
    )
    .await;
    Ok(Json(budget))
}

/// DELETE /api/v1/budgets/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = BudgetRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("Budget", id)));
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
