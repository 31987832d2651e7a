//! Repository for the `users` table.
//!
//! Password hashing happens in the API layer; this repository only ever sees
//! the finished argon2 PHC string.

use festa_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{UpdateProfile, UpdateUser, User};

/// User columns with the role name joined; every query selects through this
/// join so `User::role_name` is always populated.
const COLUMNS: &str = "u.id, u.name, u.email, u.password_hash, u.role_id, r.name AS role_name, \
                       u.avatar_url, u.two_factor_secret, u.two_factor_enabled, u.created_at, \
                       u.updated_at";

const FROM: &str = "users u JOIN roles r ON r.id = u.role_id";

/// Provides CRUD and credential operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a user with an already-hashed password. When `role_id` is
    /// `None` the seeded `member` role is used.
    pub async fn create(
        pool: &PgPool,
        name: &str,
        email: &str,
        password_hash: &str,
        role_id: Option<DbId>,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "WITH inserted AS (
                INSERT INTO users (name, email, password_hash, role_id)
                VALUES ($1, $2, $3,
                        COALESCE($4, (SELECT id FROM roles WHERE name = 'member')))
                RETURNING *
             )
             SELECT {COLUMNS} FROM inserted u JOIN roles r ON r.id = u.role_id"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(name)
            .bind(email)
            .bind(password_hash)
            .bind(role_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {FROM} WHERE u.id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {FROM} WHERE u.email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {FROM} ORDER BY u.name");
        sqlx::query_as::<_, User>(&query).fetch_all(pool).await
    }

    /// Admin update: name, email, role, avatar.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "WITH updated AS (
                UPDATE users SET
                    name = COALESCE($2, name),
                    email = COALESCE($3, email),
                    role_id = COALESCE($4, role_id),
                    avatar_url = COALESCE($5, avatar_url),
                    updated_at = NOW()
                WHERE id = $1
                RETURNING *
             )
             SELECT {COLUMNS} FROM updated u JOIN roles r ON r.id = u.role_id"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(input.role_id)
            .bind(&input.avatar_url)
            .fetch_optional(pool)
            .await
    }

    /// Self-profile update: no role change.
    pub async fn update_profile(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProfile,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "WITH updated AS (
                UPDATE users SET
                    name = COALESCE($2, name),
                    email = COALESCE($3, email),
                    avatar_url = COALESCE($4, avatar_url),
                    updated_at = NOW()
                WHERE id = $1
                RETURNING *
             )
             SELECT {COLUMNS} FROM updated u JOIN roles r ON r.id = u.role_id"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.avatar_url)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn set_password_hash(
        pool: &PgPool,
        id: DbId,
        password_hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE users SET password_hash = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(password_hash)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Store a pending 2FA secret without enabling it yet.
    pub async fn set_two_factor_secret(
        pool: &PgPool,
        id: DbId,
        secret: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE users SET two_factor_secret = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(secret)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Flip 2FA on after the enrollment code verified.
    pub async fn enable_two_factor(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE users SET two_factor_enabled = TRUE, updated_at = NOW()
             WHERE id = $1 AND two_factor_secret IS NOT NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Disable 2FA and discard the secret.
    pub async fn disable_two_factor(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE users SET two_factor_enabled = FALSE, two_factor_secret = NULL,
                              updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
