//! HTTP-level integration tests for the dashboard, reports, and the
//! admin audit trail.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_test_user, get_auth, login_user, post_json_auth, ROLE_ADMIN_ID,
    ROLE_MEMBER_ID,
};
use sqlx::PgPool;

/// The dashboard summary responds with the KPI payload for the default
/// period.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_dashboard_summary(pool: PgPool) {
    let (_user, password) = create_test_user(&pool, "dash", ROLE_MEMBER_ID).await;
    let app = common::build_test_app(pool.clone());
    let token = login_user(app, "dash@test.com", &password).await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/dashboard?period=month", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json.is_object(), "summary should be a JSON object");
}

/// The funnel endpoint returns a stage breakdown covering the budget
/// statuses.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_funnel_stages(pool: PgPool) {
    let (_user, password) = create_test_user(&pool, "funnel", ROLE_MEMBER_ID).await;
    let app = common::build_test_app(pool.clone());
    let token = login_user(app, "funnel@test.com", &password).await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/funnel", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json.is_array(), "funnel should be an array of stages");
}

/// The financial report accepts an explicit date range.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_financial_report(pool: PgPool) {
    let (_user, password) = create_test_user(&pool, "finrep", ROLE_MEMBER_ID).await;
    let app = common::build_test_app(pool.clone());
    let token = login_user(app, "finrep@test.com", &password).await;

    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        "/api/v1/reports/financial?start=2026-01-01T00:00:00Z&end=2026-12-31T23:59:59Z",
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
}

/// The audit listing is admin only and pages its results in a
/// `data` / `totalPages` / `currentPage` envelope.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_audit_listing(pool: PgPool) {
    let (_admin, admin_pw) = create_test_user(&pool, "auditadmin", ROLE_ADMIN_ID).await;
    let app = common::build_test_app(pool.clone());
    let token = login_user(app, "auditadmin@test.com", &admin_pw).await;

    // Generate an auditable action beyond the login itself.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "name": "Audit Client", "email": "audit@test.com" });
    let response = post_json_auth(app, "/api/v1/clients", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/audit?page=1&per_page=10", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["currentPage"], 1);
    assert!(json["totalPages"].as_i64().unwrap() >= 1);
    let entries = json["data"].as_array().expect("data should be an array");
    assert!(
        entries.iter().any(|e| e["action"] == "CREATE"),
        "client creation must appear in the audit trail"
    );
    assert!(
        entries.iter().any(|e| e["action"] == "LOGIN_SUCCESS"),
        "login must appear in the audit trail"
    );
}

/// Members cannot read the audit trail.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_audit_requires_admin(pool: PgPool) {
    let (_member, member_pw) = create_test_user(&pool, "auditmember", ROLE_MEMBER_ID).await;
    let app = common::build_test_app(pool.clone());
    let token = login_user(app, "auditmember@test.com", &member_pw).await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/audit", &token).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
