//! Event entity model, child models, and DTOs.
//!
//! Events own three child collections (checklist tasks, staff assignments,
//! inventory reservations) that are replaced wholesale on update.

use festa_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An event row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub title: String,
    pub client_id: DbId,
    pub start_at: Timestamp,
    pub end_at: Option<Timestamp>,
    pub guest_count: i32,
    pub total_value: f64,
    pub status: String,
    pub event_type: Option<String>,
    pub event_theme: Option<String>,
    pub venue_name: Option<String>,
    pub venue_address: Option<String>,
    pub venue_city: Option<String>,
    pub venue_state: Option<String>,
    pub venue_zip_code: Option<String>,
    pub setup_start: Option<Timestamp>,
    pub setup_end: Option<Timestamp>,
    pub teardown_start: Option<Timestamp>,
    pub teardown_end: Option<Timestamp>,
    pub specific_requirements: Option<String>,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A checklist entry belonging to an event.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventTask {
    pub id: DbId,
    pub event_id: DbId,
    pub description: String,
    pub done: bool,
}

/// A staff assignment, with the user's name joined for display.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventStaff {
    pub user_id: DbId,
    pub user_name: String,
}

/// A reservation line: either an inventory item picked by hand or a service
/// line carried over from the source budget. `item_name` is the inventory
/// item's name when one is referenced, the line's own description otherwise.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventItem {
    pub id: DbId,
    pub event_id: DbId,
    pub inventory_item_id: Option<DbId>,
    pub service_id: Option<DbId>,
    pub item_name: String,
    pub reserved_quantity: i32,
}

/// An event with its client name and child collections attached.
#[derive(Debug, Clone, Serialize)]
pub struct EventWithDetails {
    #[serde(flatten)]
    pub event: Event,
    pub client_name: String,
    pub tasks: Vec<EventTask>,
    pub staff: Vec<EventStaff>,
    pub items: Vec<EventItem>,
}

/// A team-calendar entry: the event with its client name and staff, without
/// the heavier child collections.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarEvent {
    #[serde(flatten)]
    pub event: Event,
    pub client_name: String,
    pub staff: Vec<EventStaff>,
}

/// Total reserved quantity for one inventory item across upcoming events.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ItemReservation {
    pub inventory_item_id: DbId,
    pub total_reserved: i64,
}

/// Checklist payload used on create and on the wholesale replace.
#[derive(Debug, Clone, Deserialize)]
pub struct EventTaskInput {
    pub description: String,
    #[serde(default)]
    pub done: bool,
}

/// Reservation payload used on create and on the wholesale replace.
#[derive(Debug, Clone, Deserialize)]
pub struct EventItemInput {
    pub inventory_item_id: DbId,
    pub reserved_quantity: i32,
}

/// DTO for creating an event.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEvent {
    pub title: String,
    pub client_id: DbId,
    pub start_at: Timestamp,
    pub end_at: Option<Timestamp>,
    pub guest_count: Option<i32>,
    pub total_value: Option<f64>,
    pub status: Option<String>,
    pub event_type: Option<String>,
    pub event_theme: Option<String>,
    pub venue_name: Option<String>,
    pub venue_address: Option<String>,
    pub venue_city: Option<String>,
    pub venue_state: Option<String>,
    pub venue_zip_code: Option<String>,
    pub setup_start: Option<Timestamp>,
    pub setup_end: Option<Timestamp>,
    pub teardown_start: Option<Timestamp>,
    pub teardown_end: Option<Timestamp>,
    pub specific_requirements: Option<String>,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub notes: Option<String>,
    pub tasks: Option<Vec<EventTaskInput>>,
    pub staff_ids: Option<Vec<DbId>>,
    pub items: Option<Vec<EventItemInput>>,
}

/// DTO for updating an event. Present child collections are replaced
/// wholesale.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEvent {
    pub title: Option<String>,
    pub client_id: Option<DbId>,
    pub start_at: Option<Timestamp>,
    pub end_at: Option<Timestamp>,
    pub guest_count: Option<i32>,
    pub total_value: Option<f64>,
    pub status: Option<String>,
    pub event_type: Option<String>,
    pub event_theme: Option<String>,
    pub venue_name: Option<String>,
    pub venue_address: Option<String>,
    pub venue_city: Option<String>,
    pub venue_state: Option<String>,
    pub venue_zip_code: Option<String>,
    pub setup_start: Option<Timestamp>,
    pub setup_end: Option<Timestamp>,
    pub teardown_start: Option<Timestamp>,
    pub teardown_end: Option<Timestamp>,
    pub specific_requirements: Option<String>,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub notes: Option<String>,
    pub tasks: Option<Vec<EventTaskInput>>,
    pub staff_ids: Option<Vec<DbId>>,
    pub items: Option<Vec<EventItemInput>>,
}

/// DTO for converting a budget straight into an event.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEventFromBudget {
    pub budget_id: DbId,
}
