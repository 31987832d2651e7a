//! Supplier entity model and DTOs.

use festa_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A supplier row from the `suppliers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Supplier {
    pub id: DbId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub category: Option<String>,
    pub document: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub notes: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a supplier.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSupplier {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub category: Option<String>,
    pub document: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub notes: Option<String>,
    pub status: Option<String>,
}

/// DTO for updating a supplier. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSupplier {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub category: Option<String>,
    pub document: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub notes: Option<String>,
    pub status: Option<String>,
}

/// Filters accepted by the supplier listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SupplierFilter {
    pub category: Option<String>,
    pub status: Option<String>,
    pub search: Option<String>,
}
