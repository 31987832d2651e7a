//! Repository for the `document_templates` table.

use festa_core::types::DbId;
use sqlx::PgPool;

use crate::models::document_template::{
    CreateDocumentTemplate, DocumentTemplate, UpdateDocumentTemplate,
};

const COLUMNS: &str = "id, name, kind, content, created_at, updated_at";

/// Provides CRUD operations for document templates.
pub struct DocumentTemplateRepo;

impl DocumentTemplateRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateDocumentTemplate,
    ) -> Result<DocumentTemplate, sqlx::Error> {
        let query = format!(
            "INSERT INTO document_templates (name, kind, content)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DocumentTemplate>(&query)
            .bind(&input.name)
            .bind(&input.kind)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<DocumentTemplate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM document_templates WHERE id = $1");
        sqlx::query_as::<_, DocumentTemplate>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<DocumentTemplate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM document_templates ORDER BY name");
        sqlx::query_as::<_, DocumentTemplate>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDocumentTemplate,
    ) -> Result<Option<DocumentTemplate>, sqlx::Error> {
        let query = format!(
            "UPDATE document_templates SET
                name = COALESCE($2, name),
                kind = COALESCE($3, kind),
                content = COALESCE($4, content),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DocumentTemplate>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.kind)
            .bind(&input.content)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM document_templates WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
