//! Repository for the `budgets` and `budget_items` tables.
//!
//! Budget codes are sequential (`BDG-001`, ...). The next suffix is computed
//! inside the inserting statement; `uq_budgets_code` is the backstop if two
//! inserts race.

use festa_core::status::BUDGET_CODE_PREFIX;
use festa_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::budget::{
    Budget, BudgetItem, BudgetItemInput, BudgetWithItems, CreateBudget, UpdateBudget,
};

const COLUMNS: &str = "id, code, client_id, status, total_value, valid_until, event_name, \
                       event_date, guest_count, cuisine_type, venue_name, venue_address, \
                       venue_city, venue_state, venue_zip_code, dietary_restrictions, notes, \
                       created_at, updated_at";

const ITEM_COLUMNS: &str = "id, budget_id, service_id, description, quantity, unit_price";

/// Provides CRUD and funnel operations for budgets.
pub struct BudgetRepo;

impl BudgetRepo {
    /// Insert a budget and its line items in one transaction. The code is
    /// derived from the current maximum numeric suffix in the same statement.
    pub async fn create(pool: &PgPool, input: &CreateBudget) -> Result<BudgetWithItems, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "INSERT INTO budgets (code, client_id, status, total_value, valid_until, event_name,
                                  event_date, guest_count, cuisine_type, venue_name, venue_address,
                                  venue_city, venue_state, venue_zip_code, dietary_restrictions,
                                  notes)
             SELECT $1 || LPAD(next.n::TEXT, GREATEST(3, LENGTH(next.n::TEXT)), '0'),
                    $2, COALESCE($3, 'draft'), COALESCE($4, 0), $5, $6, $7, $8, $9, $10, $11,
                    $12, $13, $14, $15, $16
             FROM (SELECT COALESCE(MAX(SUBSTRING(code FROM LENGTH($1) + 1)::BIGINT), 0) + 1 AS n
                   FROM budgets) next
             RETURNING {COLUMNS}"
        );
        let budget = sqlx::query_as::<_, Budget>(&query)
            .bind(BUDGET_CODE_PREFIX)
            .bind(input.client_id)
            .bind(&input.status)
            .bind(input.total_value)
            .bind(input.valid_until)
            .bind(&input.event_name)
            .bind(input.event_date)
            .bind(input.guest_count)
            .bind(&input.cuisine_type)
            .bind(&input.venue_name)
            .bind(&input.venue_address)
            .bind(&input.venue_city)
            .bind(&input.venue_state)
            .bind(&input.venue_zip_code)
            .bind(&input.dietary_restrictions)
            .bind(&input.notes)
            .fetch_one(&mut *tx)
            .await?;
        if let Some(items) = &input.items {
            Self::insert_items(&mut tx, budget.id, items).await?;
        }
        let items = Self::items_in_tx(&mut tx, budget.id).await?;
        let client_name = Self::client_name_in_tx(&mut tx, budget.client_id).await?;
        tx.commit().await?;
        Ok(BudgetWithItems {
            budget,
            client_name,
            items,
        })
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BudgetWithItems>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM budgets WHERE id = $1");
        let Some(budget) = sqlx::query_as::<_, Budget>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };
        let client_name = Self::client_name(pool, budget.client_id).await?;
        let items = Self::items_for(pool, id).await?;
        Ok(Some(BudgetWithItems {
            budget,
            client_name,
            items,
        }))
    }

    /// List budgets newest first, each with client name and items.
    pub async fn list(pool: &PgPool) -> Result<Vec<BudgetWithItems>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM budgets ORDER BY created_at DESC");
        let budgets = sqlx::query_as::<_, Budget>(&query).fetch_all(pool).await?;
        let mut result = Vec::with_capacity(budgets.len());
        for budget in budgets {
            let client_name = Self::client_name(pool, budget.client_id).await?;
            let items = Self::items_for(pool, budget.id).await?;
            result.push(BudgetWithItems {
                budget,
                client_name,
                items,
            });
        }
        Ok(result)
    }

    /// Update a budget. A present item list replaces every line item,
    /// inside the same transaction.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBudget,
    ) -> Result<Option<BudgetWithItems>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "UPDATE budgets SET
                client_id = COALESCE($2, client_id),
                total_value = COALESCE($3, total_value),
                valid_until = COALESCE($4, valid_until),
                event_name = COALESCE($5, event_name),
                event_date = COALESCE($6, event_date),
                guest_count = COALESCE($7, guest_count),
                cuisine_type = COALESCE($8, cuisine_type),
                venue_name = COALESCE($9, venue_name),
                venue_address = COALESCE($10, venue_address),
                venue_city = COALESCE($11, venue_city),
                venue_state = COALESCE($12, venue_state),
                venue_zip_code = COALESCE($13, venue_zip_code),
                dietary_restrictions = COALESCE($14, dietary_restrictions),
                notes = COALESCE($15, notes),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let Some(budget) = sqlx::query_as::<_, Budget>(&query)
            .bind(id)
            .bind(input.client_id)
            .bind(input.total_value)
            .bind(input.valid_until)
            .bind(&input.event_name)
            .bind(input.event_date)
            .bind(input.guest_count)
            .bind(&input.cuisine_type)
            .bind(&input.venue_name)
            .bind(&input.venue_address)
            .bind(&input.venue_city)
            .bind(&input.venue_state)
            .bind(&input.venue_zip_code)
            .bind(&input.dietary_restrictions)
            .bind(&input.notes)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };
        if let Some(items) = &input.items {
            sqlx::query("DELETE FROM budget_items WHERE budget_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            Self::insert_items(&mut tx, id, items).await?;
        }
        let items = Self::items_in_tx(&mut tx, id).await?;
        let client_name = Self::client_name_in_tx(&mut tx, budget.client_id).await?;
        tx.commit().await?;
        Ok(Some(BudgetWithItems {
            budget,
            client_name,
            items,
        }))
    }

    /// Move a budget to another funnel status. Status validity is checked by
    /// the caller.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Budget>, sqlx::Error> {
        let query = format!(
            "UPDATE budgets SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Budget>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM budgets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn items_for(pool: &PgPool, budget_id: DbId) -> Result<Vec<BudgetItem>, sqlx::Error> {
        let query =
            format!("SELECT {ITEM_COLUMNS} FROM budget_items WHERE budget_id = $1 ORDER BY id");
        sqlx::query_as::<_, BudgetItem>(&query)
            .bind(budget_id)
            .fetch_all(pool)
            .await
    }

    async fn client_name(pool: &PgPool, client_id: DbId) -> Result<String, sqlx::Error> {
        let (name,): (String,) = sqlx::query_as("SELECT name FROM clients WHERE id = $1")
            .bind(client_id)
            .fetch_one(pool)
            .await?;
        Ok(name)
    }

    async fn client_name_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        client_id: DbId,
    ) -> Result<String, sqlx::Error> {
        let (name,): (String,) = sqlx::query_as("SELECT name FROM clients WHERE id = $1")
            .bind(client_id)
            .fetch_one(&mut **tx)
            .await?;
        Ok(name)
    }

    async fn items_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        budget_id: DbId,
    ) -> Result<Vec<BudgetItem>, sqlx::Error> {
        let query =
            format!("SELECT {ITEM_COLUMNS} FROM budget_items WHERE budget_id = $1 ORDER BY id");
        sqlx::query_as::<_, BudgetItem>(&query)
            .bind(budget_id)
            .fetch_all(&mut **tx)
            .await
    }

    async fn insert_items(
        tx: &mut Transaction<'_, Postgres>,
        budget_id: DbId,
        items: &[BudgetItemInput],
    ) -> Result<(), sqlx::Error> {
        for item in items {
            sqlx::query(
                "INSERT INTO budget_items (budget_id, service_id, description, quantity, unit_price)
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(budget_id)
            .bind(item.service_id)
            .bind(&item.description)
            .bind(item.quantity)
            .bind(item.unit_price)
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }
}
