//! User entity model and DTOs.
//!
//! The password hash and the 2FA secret never leave the crate boundary in a
//! serialized form.

use festa_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user row from the `users` table, with the role name joined.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role_id: DbId,
    pub role_name: String,
    pub avatar_url: Option<String>,
    #[serde(skip_serializing)]
    pub two_factor_secret: Option<String>,
    pub two_factor_enabled: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a user. The password arrives in clear and is hashed
/// before it reaches the repository.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role_id: Option<DbId>,
}

/// DTO for updating a user. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role_id: Option<DbId>,
    pub avatar_url: Option<String>,
}

/// DTO for the self-profile update. Role changes are admin-only and go
/// through [`UpdateUser`] instead.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
}
