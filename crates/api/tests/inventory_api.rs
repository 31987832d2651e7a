//! HTTP-level integration tests for the `/inventory` endpoints and stock
//! movements.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_test_user, get_auth, login_user, post_json_auth, ROLE_MEMBER_ID,
};
use sqlx::PgPool;

async fn member_token(pool: &PgPool) -> String {
    let (_user, password) = create_test_user(pool, "stockuser", ROLE_MEMBER_ID).await;
    let app = common::build_test_app(pool.clone());
    login_user(app, "stockuser@test.com", &password).await
}

/// Create an inventory item via the API and return its id.
async fn seed_item(pool: &PgPool, token: &str, name: &str, quantity: i32) -> i64 {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "name": name,
        "category": "Tableware",
        "quantity": quantity,
        "min_stock": 5
    });
    let response = post_json_auth(app, "/api/v1/inventory", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["id"].as_i64().expect("item id expected")
}

/// An inbound movement raises the stock level and returns both the movement
/// and the updated item.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_inbound_movement(pool: PgPool) {
    let token = member_token(&pool).await;
    let item_id = seed_item(&pool, &token, "Wine glasses", 10).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "kind": "inbound", "quantity": 15 });
    let response = post_json_auth(
        app,
        &format!("/api/v1/inventory/{item_id}/movements"),
        body,
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["item"]["quantity"], 25);
    assert_eq!(json["movement"]["kind"], "inbound");
    assert_eq!(json["movement"]["quantity"], 15);
}

/// An outbound movement that would drive the stock negative is rejected
/// with 400 and leaves the quantity untouched.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_outbound_movement_cannot_go_negative(pool: PgPool) {
    let token = member_token(&pool).await;
    let item_id = seed_item(&pool, &token, "Chafing dishes", 4).await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "kind": "outbound", "quantity": 10 });
    let response = post_json_auth(
        app,
        &format!("/api/v1/inventory/{item_id}/movements"),
        body,
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/api/v1/inventory/{item_id}"), &token).await;
    let json = body_json(response).await;
    assert_eq!(json["quantity"], 4);
}

/// Movements against an unknown item return 404, not 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_movement_unknown_item(pool: PgPool) {
    let token = member_token(&pool).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "kind": "outbound", "quantity": 1 });
    let response = post_json_auth(app, "/api/v1/inventory/9999/movements", body, &token).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// The movement history lists entries for the item, newest first.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_movement_history(pool: PgPool) {
    let token = member_token(&pool).await;
    let item_id = seed_item(&pool, &token, "Serving trays", 20).await;

    for (kind, quantity) in [("outbound", 5), ("inbound", 2)] {
        let app = common::build_test_app(pool.clone());
        let body = serde_json::json!({ "kind": kind, "quantity": quantity });
        let response = post_json_auth(
            app,
            &format!("/api/v1/inventory/{item_id}/movements"),
            body,
            &token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        &format!("/api/v1/inventory/{item_id}/movements"),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let movements = json.as_array().expect("movements should be an array");
    assert_eq!(movements.len(), 2);
    assert_eq!(movements[0]["kind"], "inbound");
}

/// The category listing is distinct and the slim listing stays minimal.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_categories_and_slim_listing(pool: PgPool) {
    let token = member_token(&pool).await;
    seed_item(&pool, &token, "Dinner plates", 100).await;
    seed_item(&pool, &token, "Salad plates", 80).await;

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/inventory/categories", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().map(Vec::len), Some(1), "categories are distinct");

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/inventory/slim", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let items = json.as_array().expect("slim listing should be an array");
    assert_eq!(items.len(), 2);
    assert!(items[0]["name"].is_string());
}

/// A movement with an unknown kind is rejected with 400 and persists
/// nothing.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_movement_kind_rejected(pool: PgPool) {
    let token = member_token(&pool).await;
    let item_id = seed_item(&pool, &token, "Chafing dishes", 5).await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "kind": "sideways", "quantity": 3 });
    let response = post_json_auth(
        app,
        &format!("/api/v1/inventory/{item_id}/movements"),
        body,
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Quantity untouched and no movement row recorded.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, &format!("/api/v1/inventory/{item_id}"), &token).await;
    let json = body_json(response).await;
    assert_eq!(json["quantity"], 5);

    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        &format!("/api/v1/inventory/{item_id}/movements"),
        &token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().map(Vec::len), Some(0));
}
