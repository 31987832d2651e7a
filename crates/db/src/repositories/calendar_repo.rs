//! Read-only queries behind the team calendar view.

use festa_core::types::Timestamp;
use sqlx::PgPool;

use crate::models::event::{CalendarEvent, Event, EventStaff, ItemReservation};

const EVENT_COLUMNS: &str = "id, title, client_id, start_at, end_at, guest_count, total_value, \
                             status, event_type, event_theme, venue_name, venue_address, \
                             venue_city, venue_state, venue_zip_code, setup_start, setup_end, \
                             teardown_start, teardown_end, specific_requirements, contact_name, \
                             contact_phone, contact_email, notes, created_at, updated_at";

/// Provides the calendar listing and the future-reservation aggregate.
pub struct CalendarRepo;

impl CalendarRepo {
    /// All events soonest first, each with its client name and staff.
    pub async fn events(pool: &PgPool) -> Result<Vec<CalendarEvent>, sqlx::Error> {
        let query = format!("SELECT {EVENT_COLUMNS} FROM events ORDER BY start_at");
        let events = sqlx::query_as::<_, Event>(&query).fetch_all(pool).await?;
        let mut entries = Vec::with_capacity(events.len());
        for event in events {
            let (client_name,): (String,) =
                sqlx::query_as("SELECT name FROM clients WHERE id = $1")
                    .bind(event.client_id)
                    .fetch_one(pool)
                    .await?;
            let staff = sqlx::query_as::<_, EventStaff>(
                "SELECT es.user_id, u.name AS user_name FROM event_staff es
                 JOIN users u ON u.id = es.user_id
                 WHERE es.event_id = $1 ORDER BY u.name",
            )
            .bind(event.id)
            .fetch_all(pool)
            .await?;
            entries.push(CalendarEvent {
                event,
                client_name,
                staff,
            });
        }
        Ok(entries)
    }

    /// Reserved quantities summed per inventory item across events starting
    /// at or after `from`. Service-line reservations carry no inventory
    /// reference and are left out.
    pub async fn future_reservations(
        pool: &PgPool,
        from: Timestamp,
    ) -> Result<Vec<ItemReservation>, sqlx::Error> {
        sqlx::query_as::<_, ItemReservation>(
            "SELECT ei.inventory_item_id, SUM(ei.reserved_quantity) AS total_reserved
             FROM event_items ei
             JOIN events e ON e.id = ei.event_id
             WHERE ei.inventory_item_id IS NOT NULL AND e.start_at >= $1
             GROUP BY ei.inventory_item_id
             ORDER BY ei.inventory_item_id",
        )
        .bind(from)
        .fetch_all(pool)
        .await
    }
}
