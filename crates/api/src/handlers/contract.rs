//! Handlers for the `/contracts` resource and the signing pipeline.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use festa_core::actions;
use festa_core::error::CoreError;
use festa_core::status::{
    CONTRACT_AWAITING_SIGNATURE, CONTRACT_CANCELLED, CONTRACT_SIGNED,
};
use festa_core::types::DbId;
use festa_db::models::contract::{
    Contract, ContractWithContext, CreateContract, CreateContractFromBudget, UpdateContractContent,
    UpdateContractStatus,
};
use festa_db::repositories::ContractRepo;
use serde_json::json;

use crate::audit;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

const ENTITY: &str = "Contracts";
const EVENT_ENTITY: &str = "Events";

/// Accepted contract statuses for the transition endpoint.
const CONTRACT_STATUSES: [&str; 3] = [
    CONTRACT_AWAITING_SIGNATURE,
    CONTRACT_SIGNED,
    CONTRACT_CANCELLED,
];

/// POST /api/v1/contracts
///
/// Create a contract with custom content. Both `budget_id` and `content`
/// are required here; the funnel shortcut without content lives at
/// `/contracts/from-budget`.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateContract>,
) -> AppResult<(StatusCode, Json<Contract>)> {
    let Some(budget_id) = input.budget_id else {
        return Err(AppError::BadRequest("budget_id is required".to_string()));
    };
    let Some(content) = input.content.as_deref() else {
        return Err(AppError::BadRequest("content is required".to_string()));
    };
    let contract = ContractRepo::create(&state.pool, budget_id, Some(content))
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Budget", budget_id)))?;
    audit::record(
        &state.pool,
        actions::CREATE_WITH_CUSTOM_CONTENT,
        ENTITY,
        contract.id,
        Some(auth.user_id),
        Some(json!({ "code": contract.code, "budget_id": budget_id })),
    )
    .await;
    Ok((StatusCode::CREATED, Json(contract)))
}

/// POST /api/v1/contracts/from-budget
pub async fn create_from_budget(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateContractFromBudget>,
) -> AppResult<(StatusCode, Json<Contract>)> {
    let contract = ContractRepo::create(&state.pool, input.budget_id, None)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Budget", input.budget_id)))?;
    audit::record(
        &state.pool,
        actions::CREATE_FROM_BUDGET,
        ENTITY,
        contract.id,
        Some(auth.user_id),
        Some(json!({ "code": contract.code, "budget_id": input.budget_id })),
    )
    .await;
    Ok((StatusCode::CREATED, Json(contract)))
}

/// GET /api/v1/contracts
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<Vec<ContractWithContext>>> {
    let contracts = ContractRepo::list(&state.pool).await?;
    Ok(Json(contracts))
}

/// GET /api/v1/contracts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Contract>> {
    let contract = ContractRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Contract", id)))?;
    Ok(Json(contract))
}

/// PUT /api/v1/contracts/{id}
pub async fn update_content(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateContractContent>,
) -> AppResult<Json<Contract>> {
    let Some(content) = input.content.as_deref() else {
        return Err(AppError::BadRequest("content is required".to_string()));
    };
    let contract = ContractRepo::update_content(&state.pool, id, content)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Contract", id)))?;
    audit::record(
        &state.pool,
        actions::UPDATE_CONTENT,
        ENTITY,
        id,
        Some(auth.user_id),
        None,
    )
    .await;
    Ok(Json(contract))
}

/// PATCH /api/v1/contracts/{id}/status
///
/// The first transition to `signed` also spawns the Event from the
/// contract's budget and back-fills `event_id`, all in one transaction.
pub async fn update_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateContractStatus>,
) -> AppResult<Json<Contract>> {
    if !CONTRACT_STATUSES.contains(&input.status.as_str()) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Invalid contract status '{}'; expected one of {CONTRACT_STATUSES:?}",
            input.status
        ))));
    }
    let previous = ContractRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Contract", id)))?;
    let (contract, event) = ContractRepo::update_status(&state.pool, id, &input.status)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Contract", id)))?;
    audit::record(
        &state.pool,
        actions::UPDATE_STATUS,
        ENTITY,
        id,
        Some(auth.user_id),
        Some(json!({ "from": previous.status, "to": contract.status })),
    )
    .await;
    if let Some(event) = &event {
        audit::record(
            &state.pool,
            actions::CREATE_FROM_CONTRACT,
            EVENT_ENTITY,
            event.id,
            Some(auth.user_id),
            Some(json!({ "contract_id": contract.id, "title": event.title })),
        )
        .await;
    }
    Ok(Json(contract))
}

/// DELETE /api/v1/contracts/{id}
///
/// A signed contract, or one already tied to an event, cannot be deleted.
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let contract = ContractRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Contract", id)))?;
    if contract.status == CONTRACT_SIGNED || contract.event_id.is_some() {
        return Err(AppError::Core(CoreError::Forbidden(
            "A signed contract cannot be deleted".into(),
        )));
    }
    ContractRepo::delete(&state.pool, id).await?;
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
