//! Event feedback model and DTOs.

use festa_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A feedback row from the `feedback` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Feedback {
    pub id: DbId,
    pub event_id: DbId,
    pub rating: Option<i32>,
    pub comment: Option<String>,
    pub allows_testimonial: bool,
    pub created_at: Timestamp,
}

/// DTO for creating feedback.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFeedback {
    pub event_id: DbId,
    pub rating: Option<i32>,
    pub comment: Option<String>,
    #[serde(default)]
    pub allows_testimonial: bool,
}

/// DTO for updating feedback.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFeedback {
    pub rating: Option<i32>,
    pub comment: Option<String>,
    pub allows_testimonial: Option<bool>,
}
