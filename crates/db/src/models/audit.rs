//! Audit log models.
//!
//! Audit logs are append-only: there is no update DTO and no `updated_at`
//! column.

use festa_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single audit log entry, with the acting user's name joined.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AuditLog {
    pub id: DbId,
    pub action: String,
    pub entity_type: String,
    pub entity_id: String,
    pub user_id: Option<DbId>,
    pub user_name: Option<String>,
    pub details: Option<serde_json::Value>,
    pub created_at: Timestamp,
}

/// DTO for inserting an audit log entry.
#[derive(Debug, Clone)]
pub struct CreateAuditLog {
    pub action: String,
    pub entity_type: String,
    pub entity_id: String,
    pub user_id: Option<DbId>,
    pub details: Option<serde_json::Value>,
}

/// Pagination parameters for the audit listing.
#[derive(Debug, Clone, Deserialize)]
pub struct AuditQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// One page of audit log entries plus the total row count.
#[derive(Debug, Clone, Serialize)]
pub struct AuditLogPage {
    pub items: Vec<AuditLog>,
    pub total: i64,
}
