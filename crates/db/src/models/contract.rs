//! Contract entity model and DTOs.

use festa_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A contract row from the `contracts` table, with client and budget
/// context joined.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Contract {
    pub id: DbId,
    pub code: String,
    pub budget_id: DbId,
    pub client_id: DbId,
    pub event_id: Option<DbId>,
    pub status: String,
    pub value: f64,
    pub content: Option<String>,
    pub issued_at: Timestamp,
    pub signed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A contract with its client name and budget code joined for listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContractWithContext {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub contract: Contract,
    pub client_name: String,
    pub budget_code: String,
}

/// DTO for creating a contract with custom content.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContract {
    pub budget_id: Option<DbId>,
    pub content: Option<String>,
}

/// DTO for the funnel shortcut that derives the contract from a budget.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContractFromBudget {
    pub budget_id: DbId,
}

/// DTO for replacing a contract's content.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateContractContent {
    pub content: Option<String>,
}

/// DTO for the status transition endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateContractStatus {
    pub status: String,
}
