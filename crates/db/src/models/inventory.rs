//! Inventory item and movement models.

use festa_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An inventory item row from the `inventory_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InventoryItem {
    pub id: DbId,
    pub name: String,
    pub sku: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub quantity: i32,
    pub min_stock: i32,
    pub unit_value: f64,
    pub image_url: Option<String>,
    pub supplier_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Slim projection used when composing budgets and event reservations.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InventoryItemSlim {
    pub id: DbId,
    pub name: String,
    pub quantity: i32,
    pub unit_value: f64,
}

/// A stock movement row from the `inventory_movements` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InventoryMovement {
    pub id: DbId,
    pub item_id: DbId,
    pub kind: String,
    pub quantity: i32,
    pub note: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating an inventory item.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInventoryItem {
    pub name: String,
    pub sku: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<i32>,
    pub min_stock: Option<i32>,
    pub unit_value: Option<f64>,
    pub supplier_id: Option<DbId>,
}

/// DTO for updating an inventory item. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateInventoryItem {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub min_stock: Option<i32>,
    pub unit_value: Option<f64>,
    pub supplier_id: Option<DbId>,
}

/// DTO for recording a stock movement against an item.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovement {
    /// `inbound` or `outbound`.
    pub kind: String,
    pub quantity: i32,
    pub note: Option<String>,
}

/// Stock status bucket used by the inventory listing filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    OutOfStock,
    Low,
    InStock,
}

/// Filters accepted by the inventory listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InventoryFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub stock_status: Option<StockStatus>,
}
