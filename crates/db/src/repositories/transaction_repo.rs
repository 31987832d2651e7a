//! Repository for the `transactions` table.

use festa_core::status::{TRANSACTION_COMPLETED, TRANSACTION_PENDING};
use festa_core::types::DbId;
use sqlx::PgPool;

use crate::models::transaction::{
    CreateTransaction, Transaction, TransactionFilter, UpdateTransaction,
};

const COLUMNS: &str = "id, description, amount, kind, status, method, category, occurred_at, \
                       due_date, client_id, supplier_id, event_id, document_number, receipt_url, \
                       notes, created_at, updated_at";

/// Provides CRUD and status operations for financial transactions.
pub struct TransactionRepo;

impl TransactionRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateTransaction,
    ) -> Result<Transaction, sqlx::Error> {
        let query = format!(
            "INSERT INTO transactions (description, amount, kind, status, method, category,
                                       occurred_at, due_date, client_id, supplier_id, event_id,
                                       document_number, receipt_url, notes)
             VALUES ($1, $2, $3, COALESCE($4, $5), $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Transaction>(&query)
            .bind(&input.description)
            .bind(input.amount)
            .bind(&input.kind)
            .bind(&input.status)
            .bind(TRANSACTION_PENDING)
            .bind(&input.method)
            .bind(&input.category)
            .bind(input.occurred_at)
            .bind(input.due_date)
            .bind(input.client_id)
            .bind(input.supplier_id)
            .bind(input.event_id)
            .bind(&input.document_number)
            .bind(&input.receipt_url)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Transaction>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM transactions WHERE id = $1");
        sqlx::query_as::<_, Transaction>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List transactions, optionally filtered by occurrence date range,
    /// kind, category, and status.
    pub async fn list(
        pool: &PgPool,
        filter: &TransactionFilter,
    ) -> Result<Vec<Transaction>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM transactions
             WHERE ($1::TIMESTAMPTZ IS NULL OR occurred_at >= $1)
               AND ($2::TIMESTAMPTZ IS NULL OR occurred_at < $2)
               AND ($3::TEXT IS NULL OR kind = $3)
               AND ($4::TEXT IS NULL OR category = $4)
               AND ($5::TEXT IS NULL OR status = $5)
             ORDER BY COALESCE(occurred_at, due_date) DESC NULLS LAST, created_at DESC"
        );
        sqlx::query_as::<_, Transaction>(&query)
            .bind(filter.start)
            .bind(filter.end)
            .bind(&filter.kind)
            .bind(&filter.category)
            .bind(&filter.status)
            .fetch_all(pool)
            .await
    }

    /// Distinct non-null categories in use.
    pub async fn list_categories(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT DISTINCT category FROM transactions
             WHERE category IS NOT NULL ORDER BY category",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|(c,)| c).collect())
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTransaction,
    ) -> Result<Option<Transaction>, sqlx::Error> {
        let query = format!(
            "UPDATE transactions SET
                description = COALESCE($2, description),
                amount = COALESCE($3, amount),
                kind = COALESCE($4, kind),
                method = COALESCE($5, method),
                category = COALESCE($6, category),
                occurred_at = COALESCE($7, occurred_at),
                due_date = COALESCE($8, due_date),
                client_id = COALESCE($9, client_id),
                supplier_id = COALESCE($10, supplier_id),
                event_id = COALESCE($11, event_id),
                document_number = COALESCE($12, document_number),
                receipt_url = COALESCE($13, receipt_url),
                notes = COALESCE($14, notes),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Transaction>(&query)
            .bind(id)
            .bind(&input.description)
            .bind(input.amount)
            .bind(&input.kind)
            .bind(&input.method)
            .bind(&input.category)
            .bind(input.occurred_at)
            .bind(input.due_date)
            .bind(input.client_id)
            .bind(input.supplier_id)
            .bind(input.event_id)
            .bind(&input.document_number)
            .bind(&input.receipt_url)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Transition a transaction's status. Completing a transaction stamps
    /// `occurred_at` when unset and clears `due_date`.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Transaction>, sqlx::Error> {
        let query = format!(
            "UPDATE transactions SET
                status = $2,
                occurred_at = CASE WHEN $2 = $3 THEN COALESCE(occurred_at, NOW())
                                   ELSE occurred_at END,
                due_date = CASE WHEN $2 = $3 THEN NULL ELSE due_date END,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Transaction>(&query)
            .bind(id)
            .bind(status)
            .bind(TRANSACTION_COMPLETED)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM transactions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
