//! Budget entity model and DTOs.
//!
//! Budgets are the entry point of the sales pipeline. They carry the
//! proposed event details that a signed contract later materializes into a
//! real event.

use festa_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A budget row from the `budgets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Budget {
    pub id: DbId,
    pub code: String,
    pub client_id: DbId,
    pub status: String,
    pub total_value: f64,
    pub valid_until: Option<Timestamp>,
    pub event_name: Option<String>,
    pub event_date: Option<Timestamp>,
    pub guest_count: Option<i32>,
    pub cuisine_type: Option<String>,
    pub venue_name: Option<String>,
    pub venue_address: Option<String>,
    pub venue_city: Option<String>,
    pub venue_state: Option<String>,
    pub venue_zip_code: Option<String>,
    pub dietary_restrictions: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A line item belonging to a budget.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BudgetItem {
    pub id: DbId,
    pub budget_id: DbId,
    pub service_id: Option<DbId>,
    pub description: String,
    pub quantity: i32,
    pub unit_price: f64,
}

/// A budget with its client name and line items attached.
#[derive(Debug, Clone, Serialize)]
pub struct BudgetWithItems {
    #[serde(flatten)]
    pub budget: Budget,
    pub client_name: String,
    pub items: Vec<BudgetItem>,
}

/// Line item payload used on create and on the wholesale replace during
/// update.
#[derive(Debug, Clone, Deserialize)]
pub struct BudgetItemInput {
    pub service_id: Option<DbId>,
    pub description: String,
    pub quantity: i32,
    pub unit_price: f64,
}

/// DTO for creating a budget.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBudget {
    pub client_id: DbId,
    pub status: Option<String>,
    pub total_value: Option<f64>,
    pub valid_until: Option<Timestamp>,
    pub event_name: Option<String>,
    pub event_date: Option<Timestamp>,
    pub guest_count: Option<i32>,
    pub cuisine_type: Option<String>,
    pub venue_name: Option<String>,
    pub venue_address: Option<String>,
    pub venue_city: Option<String>,
    pub venue_state: Option<String>,
    pub venue_zip_code: Option<String>,
    pub dietary_restrictions: Option<String>,
    pub notes: Option<String>,
    pub items: Option<Vec<BudgetItemInput>>,
}

/// DTO for updating a budget. A present `items` replaces the line items
/// wholesale.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBudget {
    pub client_id: Option<DbId>,
    pub total_value: Option<f64>,
    pub valid_until: Option<Timestamp>,
    pub event_name: Option<String>,
    pub event_date: Option<Timestamp>,
    pub guest_count: Option<i32>,
    pub cuisine_type: Option<String>,
    pub venue_name: Option<String>,
    pub venue_address: Option<String>,
    pub venue_city: Option<String>,
    pub venue_state: Option<String>,
    pub venue_zip_code: Option<String>,
    pub dietary_restrictions: Option<String>,
    pub notes: Option<String>,
    pub items: Option<Vec<BudgetItemInput>>,
}
