//! Client entity model and DTOs.

use festa_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A client row from the `clients` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Client {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// `person` or `company`.
    pub kind: String,
    pub company_document: Option<String>,
    pub personal_document: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub state_registration: Option<String>,
    pub business_sector: Option<String>,
    pub event_preferences: Option<String>,
    pub origin: Option<String>,
    pub birthday: Option<Timestamp>,
    pub company_founded_at: Option<Timestamp>,
    pub notes: Option<String>,
    pub tags: Vec<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A secondary contact person attached to a client.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ClientContact {
    pub id: DbId,
    pub client_id: DbId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub is_primary: bool,
}

/// A client with its contacts attached, primary contact first.
#[derive(Debug, Clone, Serialize)]
pub struct ClientWithContacts {
    #[serde(flatten)]
    pub client: Client,
    pub contacts: Vec<ClientContact>,
}

/// Contact payload used on create and on the wholesale replace during update.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactInput {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub position: Option<String>,
    #[serde(default)]
    pub is_primary: bool,
}

/// DTO for creating a client.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateClient {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub kind: Option<String>,
    pub company_document: Option<String>,
    pub personal_document: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub state_registration: Option<String>,
    pub business_sector: Option<String>,
    pub event_preferences: Option<String>,
    pub origin: Option<String>,
    pub birthday: Option<Timestamp>,
    pub company_founded_at: Option<Timestamp>,
    pub notes: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: Option<String>,
    pub contacts: Option<Vec<ContactInput>>,
}

/// DTO for updating a client. A present `contacts` replaces the contact
/// list wholesale.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateClient {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub kind: Option<String>,
    pub company_document: Option<String>,
    pub personal_document: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub state_registration: Option<String>,
    pub business_sector: Option<String>,
    pub event_preferences: Option<String>,
    pub origin: Option<String>,
    pub birthday: Option<Timestamp>,
    pub company_founded_at: Option<Timestamp>,
    pub notes: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: Option<String>,
    pub contacts: Option<Vec<ContactInput>>,
}
