//! Repository for the append-only `audit_logs` table.

use sqlx::PgPool;

use crate::models::audit::{AuditLog, AuditLogPage, CreateAuditLog};

const COLUMNS: &str = "a.id, a.action, a.entity_type, a.entity_id, a.user_id, \
                       u.name AS user_name, a.details, a.created_at";

const FROM: &str = "audit_logs a LEFT JOIN users u ON u.id = a.user_id";

/// Provides insert and listing operations for the audit trail. There are no
/// update or delete methods.
pub struct AuditLogRepo;

impl AuditLogRepo {
    pub async fn insert(pool: &PgPool, input: &CreateAuditLog) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO audit_logs (action, entity_type, entity_id, user_id, details)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&input.action)
        .bind(&input.entity_type)
        .bind(&input.entity_id)
        .bind(input.user_id)
        .bind(&input.details)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// One page of entries newest first, plus the total row count.
    pub async fn list(pool: &PgPool, page: i64, per_page: i64) -> Result<AuditLogPage, sqlx::Error> {
        let offset = (page - 1).max(0) * per_page;
        let query = format!(
            "SELECT {COLUMNS} FROM {FROM}
             ORDER BY a.created_at DESC, a.id DESC
             LIMIT $1 OFFSET $2"
        );
        let items = sqlx::query_as::<_, AuditLog>(&query)
            .bind(per_page)
            .bind(offset)
            .fetch_all(pool)
            .await?;
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM audit_logs")
            .fetch_one(pool)
            .await?;
        Ok(AuditLogPage { items, total })
    }

    /// The most recent entries for one user, newest first. Feeds the
    /// account activity view.
    pub async fn recent_for_user(
        pool: &PgPool,
        user_id: festa_core::types::DbId,
        limit: i64,
    ) -> Result<Vec<AuditLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {FROM}
             WHERE a.user_id = $1
             ORDER BY a.created_at DESC, a.id DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, AuditLog>(&query)
            .bind(user_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// The most recent entries, newest first. Feeds the dashboard activity
    /// feed.
    pub async fn recent(pool: &PgPool, limit: i64) -> Result<Vec<AuditLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {FROM}
             ORDER BY a.created_at DESC, a.id DESC
             LIMIT $1"
        );
        sqlx::query_as::<_, AuditLog>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
