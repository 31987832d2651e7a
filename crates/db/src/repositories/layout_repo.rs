//! Repository for the `layout_templates` table.

use festa_core::types::DbId;
use sqlx::PgPool;

use crate::models::layout::{LayoutTemplate, UpdateLayoutTemplate};

const COLUMNS: &str = "id, name, layout_json, created_at, updated_at";

/// Provides CRUD operations for layout templates.
pub struct LayoutRepo;

impl LayoutRepo {
    pub async fn create(
        pool: &PgPool,
        name: &str,
        layout_json: &serde_json::Value,
    ) -> Result<LayoutTemplate, sqlx::Error> {
        let query = format!(
            "INSERT INTO layout_templates (name, layout_json)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LayoutTemplate>(&query)
            .bind(name)
            .bind(layout_json)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<LayoutTemplate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM layout_templates WHERE id = $1");
        sqlx::query_as::<_, LayoutTemplate>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List templates newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<LayoutTemplate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM layout_templates ORDER BY created_at DESC");
        sqlx::query_as::<_, LayoutTemplate>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLayoutTemplate,
    ) -> Result<Option<LayoutTemplate>, sqlx::Error> {
        let query = format!(
            "UPDATE layout_templates SET
                name = COALESCE($2, name),
                layout_json = COALESCE($3, layout_json),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LayoutTemplate>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.layout_json)
            .fetch_optional(pool)
            .await
    }
}
