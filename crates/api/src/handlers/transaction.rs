//! Handlers for the `/transactions` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use festa_core::actions;
use festa_core::error::CoreError;
use festa_core::status::{
    TRANSACTION_CANCELLED, TRANSACTION_COMPLETED, TRANSACTION_PENDING,
};
use festa_core::types::DbId;
use festa_db::models::transaction::{
    CreateTransaction, Transaction, TransactionFilter, UpdateTransaction, UpdateTransactionStatus,
};
use festa_db::repositories::TransactionRepo;
use serde_json::json;

use crate::audit;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

const ENTITY: &str = "Transactions";

/// Accepted transaction statuses for the transition endpoint.
const TRANSACTION_STATUSES: [&str; 3] = [
    TRANSACTION_PENDING,
    TRANSACTION_COMPLETED,
    TRANSACTION_CANCELLED,
];

/// POST /api/v1/transactions
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateTransaction>,
) -> AppResult<(StatusCode, Json<Transaction>)> {
    let transaction = TransactionRepo::create(&state.pool, &input).await?;
    audit::record(
        &state.pool,
        actions::CREATE,
        ENTITY,
        transaction.id,
        Some(auth.user_id),
        Some(json!({ "kind": transaction.kind, "amount": transaction.amount })),
    )
    .await;
    Ok((StatusCode::CREATED, Json(transaction)))
}

/// GET /api/v1/transactions?start=&end=&kind=&category=&status=
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(filter): Query<TransactionFilter>,
) -> AppResult<Json<Vec<Transaction>>> {
    let transactions = TransactionRepo::list(&state.pool, &filter).await?;
    Ok(Json(transactions))
}

/// GET /api/v1/transactions/categories
pub async fn list_categories(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<Vec<String>>> {
    let categories = TransactionRepo::list_categories(&state.pool).await?;
    Ok(Json(categories))
}

/// GET /api/v1/transactions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Transaction>> {
    let transaction = TransactionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Transaction", id)))?;
    Ok(Json(transaction))
}

/// PUT /api/v1/transactions/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTransaction>,
) -> AppResult<Json<Transaction>> {
    let transaction = TransactionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Transaction", id)))?;
    audit::record(
        &state.pool,
        actions::UPDATE,
        ENTITY,
        id,
        Some(auth.user_id),
        None,
    )
    .await;
    Ok(Json(transaction))
}

/// PATCH /api/v1/transactions/{id}/status
///
/// Completing a pending transaction stamps `occurred_at` when unset and
/// clears `due_date`.
pub async fn update_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTransactionStatus>,
) -> AppResult<Json<Transaction>> {
    if !TRANSACTION_STATUSES.contains(&input.status.as_str()) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Invalid transaction status '{}'; expected one of {TRANSACTION_STATUSES:?}",
            input.status
        ))));
    }
    let previous = TransactionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Transaction", id)))?;
    let transaction = TransactionRepo::update_status(&state.pool, id, &input.status)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Transaction", id)))?;
    audit::record(
        &state.pool,
        actions::UPDATE_STATUS,
        ENTITY,
        id,
        Some(auth.user_id),
        Some(json!({ "from": previous.status, "to": transaction.status })),
    )
    .await;
    Ok(Json(transaction))
}

/// DELETE /api/v1/transactions/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TransactionRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("Transaction", id)));
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
