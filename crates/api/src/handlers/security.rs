//! Handlers for the `/security` resource: password change, two-factor
//! enrollment, and account activity.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use festa_core::{actions, error::CoreError, totp};
use festa_db::models::audit::AuditLog;
use festa_db::repositories::{AuditLogRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::audit;
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

const ENTITY: &str = "Security";

/// Issuer label shown in authenticator apps.
const TOTP_ISSUER: &str = "Festa";

/// Number of audit entries returned by the activity view.
const ACTIVITY_LIMIT: i64 = 20;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `PUT /security/password`.
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Response for `POST /security/2fa/setup`.
#[derive(Debug, Serialize)]
pub struct TwoFactorSetupResponse {
    pub secret: String,
    pub otpauth_uri: String,
}

/// Request body for `POST /security/2fa/enable`.
#[derive(Debug, Deserialize)]
pub struct TwoFactorEnableRequest {
    pub code: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// PUT /api/v1/security/password
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<ChangePasswordRequest>,
) -> AppResult<Json<serde_json::Value>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", auth.user_id)))?;

    let current_valid = verify_password(&input.current_password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !current_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Current password is incorrect".into(),
        )));
    }

    validate_password_strength(&input.new_password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    let password_hash = hash_password(&input.new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    UserRepo::set_password_hash(&state.pool, user.id, &password_hash).await?;

    audit::record(
        &state.pool,
        actions::PASSWORD_CHANGE,
        ENTITY,
        user.id,
        Some(user.id),
        None,
    )
    .await;
    Ok(Json(serde_json::json!({ "changed": true })))
}

/// POST /api/v1/security/2fa/setup
///
/// Generate and store a fresh TOTP secret without enabling it. The caller
/// confirms possession through `POST /security/2fa/enable`.
pub async fn two_factor_setup(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<TwoFactorSetupResponse>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", auth.user_id)))?;

    let secret = totp::generate_secret();
    UserRepo::set_two_factor_secret(&state.pool, user.id, &secret).await?;
    let otpauth_uri = totp::provisioning_uri(TOTP_ISSUER, &user.email, &secret);
    Ok(Json(TwoFactorSetupResponse {
        secret,
        otpauth_uri,
    }))
}

/// POST /api/v1/security/2fa/enable
pub async fn two_factor_enable(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<TwoFactorEnableRequest>,
) -> AppResult<Json<serde_json::Value>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", auth.user_id)))?;

    let Some(secret) = user.two_factor_secret.as_deref() else {
        return Err(AppError::Core(CoreError::Validation(
            "Run two-factor setup before enabling".into(),
        )));
    };

    let code_valid = totp::verify(secret, &input.code, Utc::now())
        .map_err(|e| AppError::InternalError(format!("TOTP verification error: {e}")))?;
    if !code_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid verification code".into(),
        )));
    }

    UserRepo::enable_two_factor(&state.pool, user.id).await?;
    audit::record(
        &state.pool,
        actions::TWO_FACTOR_ENABLED,
        ENTITY,
        user.id,
        Some(user.id),
        None,
    )
    .await;
    Ok(Json(serde_json::json!({ "two_factor_enabled": true })))
}

/// POST /api/v1/security/2fa/disable
pub async fn two_factor_disable(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<serde_json::Value>> {
    let disabled = UserRepo::disable_two_factor(&state.pool, auth.user_id).await?;
    if !disabled {
        return Err(AppError::Core(CoreError::not_found("User", auth.user_id)));
    }
    audit::record(
        &state.pool,
        actions::TWO_FACTOR_DISABLED,
        ENTITY,
        auth.user_id,
        Some(auth.user_id),
        None,
    )
    .await;
    Ok(Json(serde_json::json!({ "two_factor_enabled": false })))
}

/// GET /api/v1/security/activity
pub async fn activity(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<Vec<AuditLog>>> {
    let entries = AuditLogRepo::recent_for_user(&state.pool, auth.user_id, ACTIVITY_LIMIT).await?;
    Ok(Json(entries))
}
