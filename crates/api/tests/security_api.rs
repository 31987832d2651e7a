//! HTTP-level integration tests for the `/security` endpoints: password
//! change, the TOTP lifecycle, and the own-activity listing.

mod common;

use axum::http::StatusCode;
use chrono::Utc;
use common::{
    body_json, create_test_user, get_auth, login_user, post_json, post_json_auth, put_json_auth,
    ROLE_MEMBER_ID,
};
use festa_core::totp;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Password change
// ---------------------------------------------------------------------------

/// Changing the password with the correct current password succeeds, and the
/// new password works on the next login.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_change_password(pool: PgPool) {
    let (_user, password) = create_test_user(&pool, "pwchange", ROLE_MEMBER_ID).await;
    let app = common::build_test_app(pool.clone());
    let token = login_user(app, "pwchange@test.com", &password).await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "current_password": password,
        "new_password": "brand_new_password_1"
    });
    let response = put_json_auth(app, "/api/v1/security/password", body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    // Old password no longer works.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "email": "pwchange@test.com", "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // New password does.
    let app = common::build_test_app(pool);
    login_user(app, "pwchange@test.com", "brand_new_password_1").await;
}

/// A wrong current password is rejected with 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_change_password_wrong_current(pool: PgPool) {
    let (_user, password) = create_test_user(&pool, "pwwrong", ROLE_MEMBER_ID).await;
    let app = common::build_test_app(pool.clone());
    let token = login_user(app, "pwwrong@test.com", &password).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "current_password": "not-the-password",
        "new_password": "brand_new_password_1"
    });
    let response = put_json_auth(app, "/api/v1/security/password", body, &token).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// TOTP lifecycle
// ---------------------------------------------------------------------------

/// Setup provisions a secret, enable verifies a code, and the next login
/// requires the second factor.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_two_factor_setup_and_enable(pool: PgPool) {
    let (_user, password) = create_test_user(&pool, "totpuser", ROLE_MEMBER_ID).await;
    let app = common::build_test_app(pool.clone());
    let token = login_user(app, "totpuser@test.com", &password).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/security/2fa/setup",
        serde_json::json!({}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let secret = json["secret"].as_str().expect("secret expected").to_string();
    assert!(
        json["otpauth_uri"]
            .as_str()
            .expect("uri expected")
            .starts_with("otpauth://totp/"),
        "provisioning URI must be an otpauth URI"
    );

    // Setup alone must not enforce the second factor yet.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "email": "totpuser@test.com", "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["token"].is_string(), "2FA not enabled yet");

    // Enable with a valid code.
    let code = totp::code_at(&secret, Utc::now()).expect("code computation should succeed");
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "code": code });
    let response = post_json_auth(app, "/api/v1/security/2fa/enable", body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    // Login now goes through the two-factor step.
    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "email": "totpuser@test.com", "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["two_factor_required"], true);
}

/// Enabling without a prior setup is rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_two_factor_enable_without_setup(pool: PgPool) {
    let (_user, password) = create_test_user(&pool, "nosetup", ROLE_MEMBER_ID).await;
    let app = common::build_test_app(pool.clone());
    let token = login_user(app, "nosetup@test.com", &password).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "code": "12345678" });
    let response = post_json_auth(app, "/api/v1/security/2fa/enable", body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Activity
// ---------------------------------------------------------------------------

/// The activity endpoint returns the caller's own audit entries, newest
/// first, including the login that opened the session.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_activity_lists_own_entries(pool: PgPool) {
    let (user, password) = create_test_user(&pool, "activeuser", ROLE_MEMBER_ID).await;
    let app = common::build_test_app(pool.clone());
    let token = login_user(app, "activeuser@test.com", &password).await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/security/activity", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let entries = json.as_array().expect("activity should be an array");
    assert!(!entries.is_empty(), "login must have been recorded");
    assert!(
        entries.iter().all(|e| e["user_id"] == user.id),
        "activity must only contain the caller's entries"
    );
    assert_eq!(entries[0]["action"], "LOGIN_SUCCESS");
}
