//! Repository for the `suppliers` table.

use festa_core::types::DbId;
use sqlx::PgPool;

use crate::models::supplier::{CreateSupplier, Supplier, SupplierFilter, UpdateSupplier};

const COLUMNS: &str = "id, name, email, phone, category, document, address, city, notes, status, \
                       created_at, updated_at";

/// Provides CRUD operations for suppliers.
pub struct SupplierRepo;

impl SupplierRepo {
    pub async fn create(pool: &PgPool, input: &CreateSupplier) -> Result<Supplier, sqlx::Error> {
        let query = format!(
            "INSERT INTO suppliers (name, email, phone, category, document, address, city, notes, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, 'active'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Supplier>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.category)
            .bind(&input.document)
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.notes)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Supplier>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM suppliers WHERE id = $1");
        sqlx::query_as::<_, Supplier>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List suppliers, optionally filtered by category, status, and a search
    /// term matched against name and email.
    pub async fn list(pool: &PgPool, filter: &SupplierFilter) -> Result<Vec<Supplier>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM suppliers
             WHERE ($1::TEXT IS NULL OR category = $1)
               AND ($2::TEXT IS NULL OR status = $2)
               AND ($3::TEXT IS NULL OR name ILIKE '%' || $3 || '%' OR email ILIKE '%' || $3 || '%')
             ORDER BY name"
        );
        sqlx::query_as::<_, Supplier>(&query)
            .bind(&filter.category)
            .bind(&filter.status)
            .bind(&filter.search)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSupplier,
    ) -> Result<Option<Supplier>, sqlx::Error> {
        let query = format!(
            "UPDATE suppliers SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone),
                category = COALESCE($5, category),
                document = COALESCE($6, document),
                address = COALESCE($7, address),
                city = COALESCE($8, city),
                notes = COALESCE($9, notes),
                status = COALESCE($10, status),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Supplier>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.category)
            .bind(&input.document)
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.notes)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM suppliers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
