//! HTTP-level integration tests for the `/layouts` endpoints.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_test_user, get_auth, login_user, post_json_auth, put_json_auth,
    ROLE_MEMBER_ID,
};
use sqlx::PgPool;

async fn member_token(pool: &PgPool) -> String {
    let (_user, password) = create_test_user(pool, "decorator", ROLE_MEMBER_ID).await;
    let app = common::build_test_app(pool.clone());
    login_user(app, "decorator@test.com", &password).await
}

/// Create, list, fetch, and update a layout template.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_layout_template_lifecycle(pool: PgPool) {
    let token = member_token(&pool).await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "name": "Ballroom default",
        "layout_json": { "tables": [{ "x": 10, "y": 20, "seats": 8 }] }
    });
    let response = post_json_auth(app, "/api/v1/layouts", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_i64().expect("layout id expected");
    assert_eq!(created["name"], "Ballroom default");
    assert_eq!(created["layout_json"]["tables"][0]["seats"], 8);

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/layouts", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let listed = body_json(response).await;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "name": "Ballroom v2" });
    let response = put_json_auth(app, &format!("/api/v1/layouts/{id}"), body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/api/v1/layouts/{id}"), &token).await;
    let fetched = body_json(response).await;
    assert_eq!(fetched["name"], "Ballroom v2");
    // The document survives a name-only update.
    assert_eq!(fetched["layout_json"]["tables"][0]["x"], 10);
}

/// Both name and layout document are required on create.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_layout_create_requires_fields(pool: PgPool) {
    let token = member_token(&pool).await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "name": "No document" });
    let response = post_json_auth(app, "/api/v1/layouts", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "layout_json": {} });
    let response = post_json_auth(app, "/api/v1/layouts", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Fetching a missing template is a 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_layout_missing_is_not_found(pool: PgPool) {
    let token = member_token(&pool).await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/layouts/9999", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
