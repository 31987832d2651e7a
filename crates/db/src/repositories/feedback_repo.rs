//! Repository for the `feedback` table.

use festa_core::types::DbId;
use sqlx::PgPool;

use crate::models::feedback::{CreateFeedback, Feedback, UpdateFeedback};

const COLUMNS: &str = "id, event_id, rating, comment, allows_testimonial, created_at";

/// Provides CRUD operations for event feedback.
pub struct FeedbackRepo;

impl FeedbackRepo {
    pub async fn create(pool: &PgPool, input: &CreateFeedback) -> Result<Feedback, sqlx::Error> {
        let query = format!(
            "INSERT INTO feedback (event_id, rating, comment, allows_testimonial)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(input.event_id)
            .bind(input.rating)
            .bind(&input.comment)
            .bind(input.allows_testimonial)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Feedback>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM feedback WHERE id = $1");
        sqlx::query_as::<_, Feedback>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Feedback>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM feedback ORDER BY created_at DESC");
        sqlx::query_as::<_, Feedback>(&query).fetch_all(pool).await
    }

    pub async fn list_for_event(pool: &PgPool, event_id: DbId) -> Result<Vec<Feedback>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM feedback WHERE event_id = $1 ORDER BY created_at DESC");
        sqlx::query_as::<_, Feedback>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFeedback,
    ) -> Result<Option<Feedback>, sqlx::Error> {
        let query = format!(
            "UPDATE feedback SET
                rating = COALESCE($2, rating),
                comment = COALESCE($3, comment),
                allows_testimonial = COALESCE($4, allows_testimonial)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(id)
            .bind(input.rating)
            .bind(&input.comment)
            .bind(input.allows_testimonial)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM feedback WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
