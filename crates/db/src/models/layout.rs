//! Layout template model and DTOs.

use festa_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A floor-plan template row from the `layout_templates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LayoutTemplate {
    pub id: DbId,
    pub name: String,
    /// Opaque editor document; never interpreted server-side.
    pub layout_json: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a template. Both fields are checked in the handler so a
/// missing one comes back as a validation error.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLayoutTemplate {
    pub name: Option<String>,
    pub layout_json: Option<serde_json::Value>,
}

/// DTO for updating a template.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLayoutTemplate {
    pub name: Option<String>,
    pub layout_json: Option<serde_json::Value>,
}
