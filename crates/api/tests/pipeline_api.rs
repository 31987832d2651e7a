//! HTTP-level integration tests for the sales pipeline:
//! budget -> contract -> event.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_test_user, delete_auth, login_user, patch_json_auth, post_json_auth,
    ROLE_MEMBER_ID,
};
use sqlx::PgPool;

/// Create a client via the API and return its id.
async fn seed_client(pool: &PgPool, token: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "name": "Pipeline Client", "email": "client@test.com" });
    let response = post_json_auth(app, "/api/v1/clients", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["id"].as_i64().expect("client id expected")
}

/// Create a budget with one line item and return its id.
async fn seed_budget(pool: &PgPool, token: &str, client_id: i64) -> i64 {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "client_id": client_id,
        "event_name": "Garden Wedding",
        "guest_count": 120,
        "items": [
            { "description": "Full catering", "quantity": 120, "unit_price": 85.0 }
        ]
    });
    let response = post_json_auth(app, "/api/v1/budgets", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["id"].as_i64().expect("budget id expected")
}

async fn member_token(pool: &PgPool) -> String {
    let (_user, password) = create_test_user(pool, "pipeline", ROLE_MEMBER_ID).await;
    let app = common::build_test_app(pool.clone());
    login_user(app, "pipeline@test.com", &password).await
}

// ---------------------------------------------------------------------------
// Budgets
// ---------------------------------------------------------------------------

/// A new budget gets a sequential code and starts in `draft`.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_budget_create_assigns_code(pool: PgPool) {
    let token = member_token(&pool).await;
    let client_id = seed_client(&pool, &token).await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "client_id": client_id,
        "items": [{ "description": "Buffet", "quantity": 50, "unit_price": 40.0 }]
    });
    let response = post_json_auth(app, "/api/v1/budgets", body, &token).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BDG-001");
    assert_eq!(json["status"], "draft");
    assert_eq!(json["items"].as_array().map(Vec::len), Some(1));
    assert_eq!(json["client_name"], "Pipeline Client");
}

/// Budget status transitions only accept funnel statuses.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_budget_status_validation(pool: PgPool) {
    let token = member_token(&pool).await;
    let client_id = seed_client(&pool, &token).await;
    let budget_id = seed_budget(&pool, &token, client_id).await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "status": "signed" });
    let response = patch_json_auth(
        app,
        &format!("/api/v1/budgets/{budget_id}/status"),
        body,
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "status": "approved" });
    let response = patch_json_auth(
        app,
        &format!("/api/v1/budgets/{budget_id}/status"),
        body,
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "approved");
}

// ---------------------------------------------------------------------------
// Contracts
// ---------------------------------------------------------------------------

/// Custom-content contract creation requires both budget_id and content.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_contract_create_requires_fields(pool: PgPool) {
    let token = member_token(&pool).await;
    let client_id = seed_client(&pool, &token).await;
    let budget_id = seed_budget(&pool, &token, client_id).await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "content": "Terms." });
    let response = post_json_auth(app, "/api/v1/contracts", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "budget_id": budget_id });
    let response = post_json_auth(app, "/api/v1/contracts", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// The funnel shortcut renders content from the budget and assigns a code.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_contract_from_budget(pool: PgPool) {
    let token = member_token(&pool).await;
    let client_id = seed_client(&pool, &token).await;
    let budget_id = seed_budget(&pool, &token, client_id).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "budget_id": budget_id });
    let response = post_json_auth(app, "/api/v1/contracts/from-budget", body, &token).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CTR-001");
    assert_eq!(json["status"], "awaiting_signature");
    assert_eq!(json["budget_id"], budget_id);
    assert!(json["event_id"].is_null());
}

/// A budget can only ever have one contract.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_one_contract_per_budget(pool: PgPool) {
    let token = member_token(&pool).await;
    let client_id = seed_client(&pool, &token).await;
    let budget_id = seed_budget(&pool, &token, client_id).await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "budget_id": budget_id });
    let response = post_json_auth(app, "/api/v1/contracts/from-budget", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "budget_id": budget_id });
    let response = post_json_auth(app, "/api/v1/contracts/from-budget", body, &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

/// Signing a contract spawns the event exactly once and back-fills event_id.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_signing_spawns_event(pool: PgPool) {
    let token = member_token(&pool).await;
    let client_id = seed_client(&pool, &token).await;
    let budget_id = seed_budget(&pool, &token, client_id).await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "budget_id": budget_id });
    let response = post_json_auth(app, "/api/v1/contracts/from-budget", body, &token).await;
    let contract = body_json(response).await;
    let contract_id = contract["id"].as_i64().expect("contract id expected");

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "status": "signed" });
    let response = patch_json_auth(
        app,
        &format!("/api/v1/contracts/{contract_id}/status"),
        body,
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "signed");
    let event_id = json["event_id"].as_i64().expect("event must be spawned");

    // The spawned event carries the budget's client and name.
    let app = common::build_test_app(pool.clone());
    let response = common::get_auth(app, &format!("/api/v1/events/{event_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let event = body_json(response).await;
    assert_eq!(event["client_id"], client_id);

    // Re-signing must not spawn a second event.
    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "status": "signed" });
    let response = patch_json_auth(
        app,
        &format!("/api/v1/contracts/{contract_id}/status"),
        body,
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["event_id"], event_id);
}

/// A signed contract cannot be deleted.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_signed_contract_delete_forbidden(pool: PgPool) {
    let token = member_token(&pool).await;
    let client_id = seed_client(&pool, &token).await;
    let budget_id = seed_budget(&pool, &token, client_id).await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "budget_id": budget_id });
    let response = post_json_auth(app, "/api/v1/contracts/from-budget", body, &token).await;
    let contract = body_json(response).await;
    let contract_id = contract["id"].as_i64().expect("contract id expected");

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "status": "signed" });
    patch_json_auth(
        app,
        &format!("/api/v1/contracts/{contract_id}/status"),
        body,
        &token,
    )
    .await;

    let app = common::build_test_app(pool);
    let response = delete_auth(app, &format!("/api/v1/contracts/{contract_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// An event can be created directly from a budget, skipping the contract.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_event_from_budget(pool: PgPool) {
    let token = member_token(&pool).await;
    let client_id = seed_client(&pool, &token).await;
    let budget_id = seed_budget(&pool, &token, client_id).await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "budget_id": budget_id });
    let response = post_json_auth(app, "/api/v1/events/from-budget", body, &token).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["client_id"], client_id);
    assert_eq!(json["status"], "planned");
    let event_id = json["id"].as_i64().expect("event id expected");

    // The budget's line item becomes a reservation on the event.
    let app = common::build_test_app(pool);
    let response = common::get_auth(app, &format!("/api/v1/events/{event_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let event = body_json(response).await;
    let items = event["items"].as_array().expect("items array expected");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["item_name"], "Full catering");
    assert_eq!(items[0]["reserved_quantity"], 120);
}

/// Finalizing moves an event to `finalized`.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_event_finalize(pool: PgPool) {
    let token = member_token(&pool).await;
    let client_id = seed_client(&pool, &token).await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "title": "Corporate Dinner",
        "client_id": client_id,
        "start_at": "2026-09-15T19:00:00Z"
    });
    let response = post_json_auth(app, "/api/v1/events", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let event = body_json(response).await;
    let event_id = event["id"].as_i64().expect("event id expected");

    let app = common::build_test_app(pool);
    let response = patch_json_auth(
        app,
        &format!("/api/v1/events/{event_id}/finalize"),
        serde_json::json!({}),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "finalized");
}
