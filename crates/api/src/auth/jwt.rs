//! JWT access-token generation and validation.
//!
//! Access tokens are HS256-signed JWTs containing a [`Claims`] payload. When a
//! user has two-factor authentication enabled, login first issues a short-lived
//! token with `kind = "two_factor"` that is only good for the TOTP verification
//! step; a full access token (`kind = "access"`) is issued after the code is
//! verified.

use festa_core::types::DbId;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Token kind for full access tokens.
pub const KIND_ACCESS: &str = "access";
/// Token kind for the intermediate token issued before TOTP verification.
pub const KIND_TWO_FACTOR: &str = "two_factor";

/// JWT claims embedded in every token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the user's internal database id.
    pub sub: DbId,
    /// The user's role name (e.g. `"admin"`, `"member"`).
    pub role: String,
    /// Token kind: [`KIND_ACCESS`] or [`KIND_TWO_FACTOR`].
    pub kind: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4) for revocation / audit.
    pub jti: String,
}

/// Configuration for JWT token generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Access token lifetime in hours (default: 8).
    pub access_token_expiry_hours: i64,
    /// Two-factor intermediate token lifetime in minutes (default: 5).
    pub two_factor_token_expiry_mins: i64,
}

/// Default access token expiry in hours.
const DEFAULT_ACCESS_EXPIRY_HOURS: i64 = 8;
/// Default two-factor intermediate token expiry in minutes.
const DEFAULT_TWO_FACTOR_EXPIRY_MINS: i64 = 5;

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var                      | Required | Default |
    /// |------------------------------|----------|---------|
    /// | `JWT_SECRET`                 | **yes**  | --      |
    /// | `JWT_ACCESS_EXPIRY_HOURS`    | no       | `8`     |
    /// | `JWT_TWO_FACTOR_EXPIRY_MINS` | no       | `5`     |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let access_token_expiry_hours: i64 = std::env::var("JWT_ACCESS_EXPIRY_HOURS")
            .unwrap_or_else(|_| DEFAULT_ACCESS_EXPIRY_HOURS.to_string())
            .parse()
            .expect("JWT_ACCESS_EXPIRY_HOURS must be a valid i64");

        let two_factor_token_expiry_mins: i64 = std::env::var("JWT_TWO_FACTOR_EXPIRY_MINS")
            .unwrap_or_else(|_| DEFAULT_TWO_FACTOR_EXPIRY_MINS.to_string())
            .parse()
            .expect("JWT_TWO_FACTOR_EXPIRY_MINS must be a valid i64");

        Self {
            secret,
            access_token_expiry_hours,
            two_factor_token_expiry_mins,
        }
    }
}

/// Generate an HS256 access token for the given user.
pub fn generate_access_token(
    user_id: DbId,
    role: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let exp = now + config.access_token_expiry_hours * 3600;
    sign(user_id, role, KIND_ACCESS, exp, now, config)
}

/// Generate the short-lived intermediate token issued after a correct password
/// when the account still requires a TOTP code.
pub fn generate_two_factor_token(
    user_id: DbId,
    role: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let exp = now + config.two_factor_token_expiry_mins * 60;
    sign(user_id, role, KIND_TWO_FACTOR, exp, now, config)
}

fn sign(
    user_id: DbId,
    role: &str,
    kind: &str,
    exp: i64,
    iat: i64,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        sub: user_id,
        role: role.to_string(),
        kind: kind.to_string(),
        exp,
        iat,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode a token, returning the embedded [`Claims`].
///
/// Validates the signature and expiration automatically. Callers are
/// responsible for checking the `kind` claim.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to build a test config with a known secret.
    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_hours: 8,
            two_factor_token_expiry_mins: 5,
        }
    }

    #[test]
    fn test_generate_and_validate_access_token() {
        let config = test_config();
        let token =
            generate_access_token(42, "admin", &config).expect("token generation should succeed");

        let claims = validate_token(&token, &config).expect("token validation should succeed");
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.role, "admin");
        assert_eq!(claims.kind, KIND_ACCESS);
        assert!(claims.exp > claims.iat);
        assert!(!claims.jti.is_empty());
    }

    #[test]
    fn test_two_factor_token_is_marked_and_short_lived() {
        let config = test_config();
        let token = generate_two_factor_token(7, "member", &config)
            .expect("token generation should succeed");

        let claims = validate_token(&token, &config).expect("token validation should succeed");
        assert_eq!(claims.kind, KIND_TWO_FACTOR);
        assert!(
            claims.exp - claims.iat <= 5 * 60,
            "two-factor token must expire within its configured window"
        );
    }

    #[test]
    fn test_expired_token_fails() {
        let config = test_config();

        // Manually create an already-expired token.
        // Use a margin well beyond the default 60-second leeway.
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: 1,
            role: "member".to_string(),
            kind: KIND_ACCESS.to_string(),
            exp: now - 300, // expired 5 minutes ago (well past leeway)
            iat: now - 600,
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .expect("encoding should succeed");

        let result = validate_token(&token, &config);
        assert!(result.is_err(), "expired token must fail validation");
    }

    #[test]
    fn test_different_secrets_fail() {
        let config_a = JwtConfig {
            secret: "secret-alpha".to_string(),
            access_token_expiry_hours: 8,
            two_factor_token_expiry_mins: 5,
        };
        let config_b = JwtConfig {
            secret: "secret-bravo".to_string(),
            access_token_expiry_hours: 8,
            two_factor_token_expiry_mins: 5,
        };

        let token =
            generate_access_token(1, "member", &config_a).expect("token generation should succeed");

        let result = validate_token(&token, &config_b);
        assert!(
            result.is_err(),
            "token signed with a different secret must fail"
        );
    }
}
