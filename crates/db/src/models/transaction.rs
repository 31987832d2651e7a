//! Financial transaction models and DTOs.

use festa_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A transaction row from the `transactions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Transaction {
    pub id: DbId,
    pub description: String,
    pub amount: f64,
    /// `revenue` or `expense`.
    pub kind: String,
    pub status: String,
    pub method: Option<String>,
    pub category: Option<String>,
    pub occurred_at: Option<Timestamp>,
    pub due_date: Option<Timestamp>,
    pub client_id: Option<DbId>,
    pub supplier_id: Option<DbId>,
    pub event_id: Option<DbId>,
    pub document_number: Option<String>,
    pub receipt_url: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a transaction.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTransaction {
    pub description: String,
    pub amount: f64,
    pub kind: String,
    pub status: Option<String>,
    pub method: Option<String>,
    pub category: Option<String>,
    pub occurred_at: Option<Timestamp>,
    pub due_date: Option<Timestamp>,
    pub client_id: Option<DbId>,
    pub supplier_id: Option<DbId>,
    pub event_id: Option<DbId>,
    pub document_number: Option<String>,
    pub receipt_url: Option<String>,
    pub notes: Option<String>,
}

/// DTO for updating a transaction. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTransaction {
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub kind: Option<String>,
    pub method: Option<String>,
    pub category: Option<String>,
    pub occurred_at: Option<Timestamp>,
    pub due_date: Option<Timestamp>,
    pub client_id: Option<DbId>,
    pub supplier_id: Option<DbId>,
    pub event_id: Option<DbId>,
    pub document_number: Option<String>,
    pub receipt_url: Option<String>,
    pub notes: Option<String>,
}

/// DTO for the status transition endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTransactionStatus {
    pub status: String,
}

/// Filters accepted by the transaction listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionFilter {
    pub start: Option<Timestamp>,
    pub end: Option<Timestamp>,
    pub kind: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}
