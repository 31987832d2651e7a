//! Document template model and DTOs.

use festa_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A template row from the `document_templates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DocumentTemplate {
    pub id: DbId,
    pub name: String,
    /// `contract`, `budget`, etc. Free-form kind used for grouping.
    pub kind: String,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a template.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDocumentTemplate {
    pub name: String,
    pub kind: String,
    pub content: String,
}

/// DTO for updating a template.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDocumentTemplate {
    pub name: Option<String>,
    pub kind: Option<String>,
    pub content: Option<String>,
}
