//! Handlers for the `/clients` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use festa_core::actions;
use festa_core::error::CoreError;
use festa_core::types::DbId;
use festa_db::models::client::{Client, ClientWithContacts, CreateClient, UpdateClient};
use festa_db::repositories::ClientRepo;
use serde_json::json;

use crate::audit;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

const ENTITY: &str = "Clients";

/// POST /api/v1/clients
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateClient>,
) -> AppResult<(StatusCode, Json<ClientWithContacts>)> {
    let client = ClientRepo::create(&state.pool, &input).await?;
    audit::record(
        &state.pool,
        actions::CREATE,
        ENTITY,
        client.client.id,
        Some(auth.user_id),
        Some(json!({ "name": client.client.name })),
    )
    .await;
    Ok((StatusCode::CREATED, Json(client)))
}

/// GET /api/v1/clients
pub async fn list(State(state): State<AppState>, _auth: AuthUser) -> AppResult<Json<Vec<Client>>> {
    let clients = ClientRepo::list(&state.pool).await?;
    Ok(Json(clients))
}

/// GET /api/v1/clients/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<ClientWithContacts>> {
    let client = ClientRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Client", id)))?;
    Ok(Json(client))
}

/// PUT /api/v1/clients/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateClient>,
) -> AppResult<Json<ClientWithContacts>> {
    let client = ClientRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Client", id)))?;
    audit::record(
        &state.pool,
        actions::UPDATE,
        ENTITY,
        id,
        Some(auth.user_id),
        None,
    )
    .await;
    Ok(Json(client))
}

/// DELETE /api/v1/clients/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ClientRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("Client", id)));
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
