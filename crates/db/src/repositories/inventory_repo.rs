//! Repository for the `inventory_items` and `inventory_movements` tables.

use festa_core::status::MOVEMENT_INBOUND;
use festa_core::types::DbId;
use sqlx::PgPool;

use crate::models::inventory::{
    CreateInventoryItem, CreateMovement, InventoryFilter, InventoryItem, InventoryItemSlim,
    InventoryMovement, StockStatus, UpdateInventoryItem,
};

const COLUMNS: &str = "id, name, sku, category, description, quantity, min_stock, unit_value, \
                       image_url, supplier_id, created_at, updated_at";

const MOVEMENT_COLUMNS: &str = "id, item_id, kind, quantity, note, created_at";

/// Provides CRUD and stock-movement operations for inventory items.
pub struct InventoryRepo;

impl InventoryRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateInventoryItem,
    ) -> Result<InventoryItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO inventory_items (name, sku, category, description, quantity, min_stock,
                                          unit_value, supplier_id)
             VALUES ($1, $2, $3, $4, COALESCE($5, 0), COALESCE($6, 0), COALESCE($7, 0), $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InventoryItem>(&query)
            .bind(&input.name)
            .bind(&input.sku)
            .bind(&input.category)
            .bind(&input.description)
            .bind(input.quantity)
            .bind(input.min_stock)
            .bind(input.unit_value)
            .bind(input.supplier_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<InventoryItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inventory_items WHERE id = $1");
        sqlx::query_as::<_, InventoryItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List items, optionally filtered by a search term (name or sku),
    /// category, and stock-status bucket.
    pub async fn list(
        pool: &PgPool,
        filter: &InventoryFilter,
    ) -> Result<Vec<InventoryItem>, sqlx::Error> {
        let stock_clause = match filter.stock_status {
            Some(StockStatus::OutOfStock) => "AND quantity = 0",
            Some(StockStatus::Low) => "AND quantity > 0 AND quantity <= min_stock",
            Some(StockStatus::InStock) => "AND quantity > min_stock",
            None => "",
        };
        let query = format!(
            "SELECT {COLUMNS} FROM inventory_items
             WHERE ($1::TEXT IS NULL OR name ILIKE '%' || $1 || '%' OR sku ILIKE '%' || $1 || '%')
               AND ($2::TEXT IS NULL OR category = $2)
               {stock_clause}
             ORDER BY name"
        );
        sqlx::query_as::<_, InventoryItem>(&query)
            .bind(&filter.search)
            .bind(&filter.category)
            .fetch_all(pool)
            .await
    }

    /// Slim projection for budget composition and reservation pickers.
    pub async fn list_slim(pool: &PgPool) -> Result<Vec<InventoryItemSlim>, sqlx::Error> {
        sqlx::query_as::<_, InventoryItemSlim>(
            "SELECT id, name, quantity, unit_value FROM inventory_items ORDER BY name",
        )
        .fetch_all(pool)
        .await
    }

    /// Distinct non-null categories in use.
    pub async fn list_categories(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT DISTINCT category FROM inventory_items
             WHERE category IS NOT NULL ORDER BY category",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|(c,)| c).collect())
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInventoryItem,
    ) -> Result<Option<InventoryItem>, sqlx::Error> {
        let query = format!(
            "UPDATE inventory_items SET
                name = COALESCE($2, name),
                sku = COALESCE($3, sku),
                category = COALESCE($4, category),
                description = COALESCE($5, description),
                min_stock = COALESCE($6, min_stock),
                unit_value = COALESCE($7, unit_value),
                supplier_id = COALESCE($8, supplier_id),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InventoryItem>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.sku)
            .bind(&input.category)
            .bind(&input.description)
            .bind(input.min_stock)
            .bind(input.unit_value)
            .bind(input.supplier_id)
            .fetch_optional(pool)
            .await
    }

    /// Replace the stored image path, returning the previous one so the
    /// caller can clean up the old file.
    pub async fn set_image_url(
        pool: &PgPool,
        id: DbId,
        image_url: Option<&str>,
    ) -> Result<Option<Option<String>>, sqlx::Error> {
        let row: Option<(Option<String>,)> = sqlx::query_as(
            "UPDATE inventory_items i SET image_url = $2, updated_at = NOW()
             FROM (SELECT id, image_url AS previous FROM inventory_items WHERE id = $1) old
             WHERE i.id = old.id
             RETURNING old.previous",
        )
        .bind(id)
        .bind(image_url)
        .fetch_optional(pool)
        .await?;
        Ok(row.map(|(previous,)| previous))
    }

    /// Delete an item, returning its image path (if any) for file cleanup.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Option<String>>, sqlx::Error> {
        let row: Option<(Option<String>,)> =
            sqlx::query_as("DELETE FROM inventory_items WHERE id = $1 RETURNING image_url")
                .bind(id)
                .fetch_optional(pool)
                .await?;
        Ok(row.map(|(image_url,)| image_url))
    }

    /// Apply a stock movement: adjust the quantity and record the movement
    /// in one transaction.
    ///
    /// Returns `Ok(None)` when the adjustment would drive the quantity
    /// negative; nothing is persisted in that case. The table's CHECK
    /// constraint backs this guard up.
    pub async fn apply_movement(
        pool: &PgPool,
        item_id: DbId,
        input: &CreateMovement,
    ) -> Result<Option<(InventoryItem, InventoryMovement)>, sqlx::Error> {
        // Callers validate the kind; anything that is not inbound removes
        // stock.
        let delta = if input.kind == MOVEMENT_INBOUND {
            input.quantity
        } else {
            -input.quantity
        };
        let mut tx = pool.begin().await?;
        let query = format!(
            "UPDATE inventory_items SET quantity = quantity + $2, updated_at = NOW()
             WHERE id = $1 AND quantity + $2 >= 0
             RETURNING {COLUMNS}"
        );
        let Some(item) = sqlx::query_as::<_, InventoryItem>(&query)
            .bind(item_id)
            .bind(delta)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };
        let query = format!(
            "INSERT INTO inventory_movements (item_id, kind, quantity, note)
             VALUES ($1, $2, $3, $4)
             RETURNING {MOVEMENT_COLUMNS}"
        );
        let movement = sqlx::query_as::<_, InventoryMovement>(&query)
            .bind(item_id)
            .bind(&input.kind)
            .bind(input.quantity)
            .bind(&input.note)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(Some((item, movement)))
    }

    pub async fn list_movements(
        pool: &PgPool,
        item_id: DbId,
    ) -> Result<Vec<InventoryMovement>, sqlx::Error> {
        let query = format!(
            "SELECT {MOVEMENT_COLUMNS} FROM inventory_movements
             WHERE item_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, InventoryMovement>(&query)
            .bind(item_id)
            .fetch_all(pool)
            .await
    }
}
