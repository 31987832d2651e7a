//! Handlers for the `/auth` resource (login, two-factor verification,
//! registration, identity).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use festa_core::{actions, error::CoreError, totp};
use festa_db::models::user::{CreateUser, User};
use festa_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::audit;
use crate::auth::jwt::{
    generate_access_token, generate_two_factor_token, validate_token, KIND_TWO_FACTOR,
};
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

const ENTITY: &str = "Auth";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/2fa/verify`.
#[derive(Debug, Deserialize)]
pub struct TwoFactorVerifyRequest {
    pub temp_token: String,
    pub code: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Authenticate with email + password. Accounts with two-factor enabled get
/// a short-lived temp token instead of the final one; the login completes
/// through `POST /auth/2fa/verify`.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<serde_json::Value>> {
    let Some(user) = UserRepo::find_by_email(&state.pool, &input.email).await? else {
        audit::record(
            &state.pool,
            actions::LOGIN_FAILURE,
            ENTITY,
            &input.email,
            None,
            None,
        )
        .await;
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    };

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        audit::record(
            &state.pool,
            actions::LOGIN_FAILURE,
            ENTITY,
            user.id,
            Some(user.id),
            None,
        )
        .await;
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    if user.two_factor_enabled {
        let temp_token = generate_two_factor_token(user.id, &user.role_name, &state.config.jwt)
            .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;
        return Ok(Json(json!({
            "two_factor_required": true,
            "temp_token": temp_token,
        })));
    }

    let token = generate_access_token(user.id, &user.role_name, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;
    audit::record(
        &state.pool,
        actions::LOGIN_SUCCESS,
        ENTITY,
        user.id,
        Some(user.id),
        None,
    )
    .await;
    Ok(Json(json!(AuthResponse { token, user })))
}

/// POST /api/v1/auth/2fa/verify
///
/// Complete a two-factor login: temp token + current TOTP code.
pub async fn verify_two_factor(
    State(state): State<AppState>,
    Json(input): Json<TwoFactorVerifyRequest>,
) -> AppResult<Json<AuthResponse>> {
    let claims = validate_token(&input.temp_token, &state.config.jwt).map_err(|_| {
        AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
    })?;
    if claims.kind != KIND_TWO_FACTOR {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid or expired token".into(),
        )));
    }

    let user = UserRepo::find_by_id(&state.pool, claims.sub)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Invalid or expired token".into())))?;

    let Some(secret) = user.two_factor_secret.as_deref() else {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Two-factor authentication is not enabled".into(),
        )));
    };

    let code_valid = totp::verify(secret, &input.code, Utc::now())
        .map_err(|e| AppError::InternalError(format!("TOTP verification error: {e}")))?;
    if !code_valid {
        audit::record(
            &state.pool,
            actions::TWO_FACTOR_LOGIN_FAILURE,
            ENTITY,
            user.id,
            Some(user.id),
            None,
        )
        .await;
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid verification code".into(),
        )));
    }

    let token = generate_access_token(user.id, &user.role_name, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;
    audit::record(
        &state.pool,
        actions::LOGIN_SUCCESS_2FA,
        ENTITY,
        user.id,
        Some(user.id),
        None,
    )
    .await;
    Ok(Json(AuthResponse { token, user }))
}

/// POST /api/v1/auth/register (admin)
pub async fn register(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    validate_password_strength(&input.password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    let user = UserRepo::create(
        &state.pool,
        &input.name,
        &input.email,
        &password_hash,
        input.role_id,
    )
    .await?;
    audit::record(
        &state.pool,
        actions::USER_REGISTERED,
        ENTITY,
        user.id,
        Some(admin.user_id),
        Some(json!({ "email": user.email })),
    )
    .await;
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/v1/auth/me
pub async fn me(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<User>> {
    let user = UserRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", user.user_id)))?;
    Ok(Json(user))
}
