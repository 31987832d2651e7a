//! Repository for the `events` table and its child collections.
//!
//! Checklist tasks, staff assignments, and inventory reservations are owned
//! wholesale: updates that carry a child list replace it entirely inside the
//! same transaction. Event deletion relies on the cascade constraints, which
//! also cover the event's transactions and feedback.

use festa_core::status::EVENT_PLANNED;
use festa_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::event::{
    CreateEvent, Event, EventItem, EventItemInput, EventStaff, EventTask, EventTaskInput,
    EventWithDetails, UpdateEvent,
};

const COLUMNS: &str = "id, title, client_id, start_at, end_at, guest_count, total_value, status, \
                       event_type, event_theme, venue_name, venue_address, venue_city, \
                       venue_state, venue_zip_code, setup_start, setup_end, teardown_start, \
                       teardown_end, specific_requirements, contact_name, contact_phone, \
                       contact_email, notes, created_at, updated_at";

/// Provides CRUD operations for events and their children.
pub struct EventRepo;

impl EventRepo {
    /// Insert an event and its child collections in one transaction.
    pub async fn create(pool: &PgPool, input: &CreateEvent) -> Result<EventWithDetails, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "INSERT INTO events (title, client_id, start_at, end_at, guest_count, total_value,
                                 status, event_type, event_theme, venue_name, venue_address,
                                 venue_city, venue_state, venue_zip_code, setup_start, setup_end,
                                 teardown_start, teardown_end, specific_requirements, contact_name,
                                 contact_phone, contact_email, notes)
             VALUES ($1, $2, $3, $4, COALESCE($5, 0), COALESCE($6, 0), COALESCE($7, $8), $9, $10,
                     $11, $12, $13, $14, $15, $16, $17, $18, $19, $20, $21, $22, $23, $24)
             RETURNING {COLUMNS}"
        );
        let event = sqlx::query_as::<_, Event>(&query)
            .bind(&input.title)
            .bind(input.client_id)
            .bind(input.start_at)
            .bind(input.end_at)
            .bind(input.guest_count)
            .bind(input.total_value)
            .bind(&input.status)
            .bind(EVENT_PLANNED)
            .bind(&input.event_type)
            .bind(&input.event_theme)
            .bind(&input.venue_name)
            .bind(&input.venue_address)
            .bind(&input.venue_city)
            .bind(&input.venue_state)
            .bind(&input.venue_zip_code)
            .bind(input.setup_start)
            .bind(input.setup_end)
            .bind(input.teardown_start)
            .bind(input.teardown_end)
            .bind(&input.specific_requirements)
            .bind(&input.contact_name)
            .bind(&input.contact_phone)
            .bind(&input.contact_email)
            .bind(&input.notes)
            .fetch_one(&mut *tx)
            .await?;
        if let Some(tasks) = &input.tasks {
            Self::insert_tasks(&mut tx, event.id, tasks).await?;
        }
        if let Some(staff_ids) = &input.staff_ids {
            Self::insert_staff(&mut tx, event.id, staff_ids).await?;
        }
        if let Some(items) = &input.items {
            Self::insert_items(&mut tx, event.id, items).await?;
        }
        let details = Self::details(&mut *tx, event).await?;
        tx.commit().await?;
        Ok(details)
    }

    /// Create an event straight from a budget's event-intent fields.
    ///
    /// Returns `None` when the budget does not exist. The budget's line
    /// items are carried over 1:1 as reservation lines, in the same
    /// transaction as the event insert.
    pub async fn create_from_budget(
        pool: &PgPool,
        budget_id: DbId,
    ) -> Result<Option<Event>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "INSERT INTO events (title, client_id, start_at, end_at, guest_count, total_value,
                                 status, venue_name, venue_address, venue_city, venue_state,
                                 venue_zip_code, notes)
             SELECT COALESCE(b.event_name, 'Evento para ' || cl.name),
                    b.client_id,
                    COALESCE(b.event_date, NOW()),
                    b.event_date + INTERVAL '4 hours',
                    COALESCE(b.guest_count, 0),
                    b.total_value,
                    $2,
                    b.venue_name, b.venue_address, b.venue_city, b.venue_state, b.venue_zip_code,
                    b.notes
             FROM budgets b JOIN clients cl ON cl.id = b.client_id
             WHERE b.id = $1
             RETURNING {COLUMNS}"
        );
        let Some(event) = sqlx::query_as::<_, Event>(&query)
            .bind(budget_id)
            .bind(EVENT_PLANNED)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };
        Self::copy_budget_items(&mut tx, event.id, budget_id).await?;
        tx.commit().await?;
        Ok(Some(event))
    }

    /// Copy a budget's line items onto an event as reservation lines.
    pub async fn copy_budget_items(
        tx: &mut Transaction<'_, Postgres>,
        event_id: DbId,
        budget_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO event_items (event_id, service_id, description, reserved_quantity)
             SELECT $1, bi.service_id, bi.description, bi.quantity
             FROM budget_items bi
             WHERE bi.budget_id = $2
             ORDER BY bi.id",
        )
        .bind(event_id)
        .bind(budget_id)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<EventWithDetails>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        let Some(event) = sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };
        Ok(Some(Self::details(&mut *pool.acquire().await?, event).await?))
    }

    /// List events soonest first, each with client name and children.
    pub async fn list(pool: &PgPool) -> Result<Vec<EventWithDetails>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events ORDER BY start_at DESC");
        let events = sqlx::query_as::<_, Event>(&query).fetch_all(pool).await?;
        let mut result = Vec::with_capacity(events.len());
        for event in events {
            let mut conn = pool.acquire().await?;
            result.push(Self::details(&mut conn, event).await?);
        }
        Ok(result)
    }

    /// Update an event. Present child collections are replaced wholesale,
    /// inside the same transaction.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEvent,
    ) -> Result<Option<EventWithDetails>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "UPDATE events SET
                title = COALESCE($2, title),
                client_id = COALESCE($3, client_id),
                start_at = COALESCE($4, start_at),
                end_at = COALESCE($5, end_at),
                guest_count = COALESCE($6, guest_count),
                total_value = COALESCE($7, total_value),
                status = COALESCE($8, status),
                event_type = COALESCE($9, event_type),
                event_theme = COALESCE($10, event_theme),
                venue_name = COALESCE($11, venue_name),
                venue_address = COALESCE($12, venue_address),
                venue_city = COALESCE($13, venue_city),
                venue_state = COALESCE($14, venue_state),
                venue_zip_code = COALESCE($15, venue_zip_code),
                setup_start = COALESCE($16, setup_start),
                setup_end = COALESCE($17, setup_end),
                teardown_start = COALESCE($18, teardown_start),
                teardown_end = COALESCE($19, teardown_end),
                specific_requirements = COALESCE($20, specific_requirements),
                contact_name = COALESCE($21, contact_name),
                contact_phone = COALESCE($22, contact_phone),
                contact_email = COALESCE($23, contact_email),
                notes = COALESCE($24, notes),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let Some(event) = sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.client_id)
            .bind(input.start_at)
            .bind(input.end_at)
            .bind(input.guest_count)
            .bind(input.total_value)
            .bind(&input.status)
            .bind(&input.event_type)
            .bind(&input.event_theme)
            .bind(&input.venue_name)
            .bind(&input.venue_address)
            .bind(&input.venue_city)
            .bind(&input.venue_state)
            .bind(&input.venue_zip_code)
            .bind(input.setup_start)
            .bind(input.setup_end)
            .bind(input.teardown_start)
            .bind(input.teardown_end)
            .bind(&input.specific_requirements)
            .bind(&input.contact_name)
            .bind(&input.contact_phone)
            .bind(&input.contact_email)
            .bind(&input.notes)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };
        if let Some(tasks) = &input.tasks {
            sqlx::query("DELETE FROM event_tasks WHERE event_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            Self::insert_tasks(&mut tx, id, tasks).await?;
        }
        if let Some(staff_ids) = &input.staff_ids {
            sqlx::query("DELETE FROM event_staff WHERE event_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            Self::insert_staff(&mut tx, id, staff_ids).await?;
        }
        if let Some(items) = &input.items {
            sqlx::query("DELETE FROM event_items WHERE event_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            Self::insert_items(&mut tx, id, items).await?;
        }
        let details = Self::details(&mut *tx, event).await?;
        tx.commit().await?;
        Ok(Some(details))
    }

    /// Move an event to another status (used by `finalize` and status
    /// updates).
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Delete an event. Children, transactions, and feedback go with it via
    /// the cascade constraints.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn details(
        conn: &mut sqlx::PgConnection,
        event: Event,
    ) -> Result<EventWithDetails, sqlx::Error> {
        let (client_name,): (String,) = sqlx::query_as("SELECT name FROM clients WHERE id = $1")
            .bind(event.client_id)
            .fetch_one(&mut *conn)
            .await?;
        let tasks = sqlx::query_as::<_, EventTask>(
            "SELECT id, event_id, description, done FROM event_tasks
             WHERE event_id = $1 ORDER BY id",
        )
        .bind(event.id)
        .fetch_all(&mut *conn)
        .await?;
        let staff = sqlx::query_as::<_, EventStaff>(
            "SELECT es.user_id, u.name AS user_name FROM event_staff es
             JOIN users u ON u.id = es.user_id
             WHERE es.event_id = $1 ORDER BY u.name",
        )
        .bind(event.id)
        .fetch_all(&mut *conn)
        .await?;
        let items = sqlx::query_as::<_, EventItem>(
            "SELECT ei.id, ei.event_id, ei.inventory_item_id, ei.service_id,
                    COALESCE(i.name, ei.description) AS item_name, ei.reserved_quantity
             FROM event_items ei
             LEFT JOIN inventory_items i ON i.id = ei.inventory_item_id
             WHERE ei.event_id = $1 ORDER BY ei.id",
        )
        .bind(event.id)
        .fetch_all(&mut *conn)
        .await?;
        Ok(EventWithDetails {
            event,
            client_name,
            tasks,
            staff,
            items,
        })
    }

    async fn insert_tasks(
        tx: &mut Transaction<'_, Postgres>,
        event_id: DbId,
        tasks: &[EventTaskInput],
    ) -> Result<(), sqlx::Error> {
        for task in tasks {
            sqlx::query("INSERT INTO event_tasks (event_id, description, done) VALUES ($1, $2, $3)")
                .bind(event_id)
                .bind(&task.description)
                .bind(task.done)
                .execute(&mut **tx)
                .await?;
        }
        Ok(())
    }

    async fn insert_staff(
        tx: &mut Transaction<'_, Postgres>,
        event_id: DbId,
        staff_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        for user_id in staff_ids {
            sqlx::query("INSERT INTO event_staff (event_id, user_id) VALUES ($1, $2)")
                .bind(event_id)
                .bind(user_id)
                .execute(&mut **tx)
                .await?;
        }
        Ok(())
    }

    async fn insert_items(
        tx: &mut Transaction<'_, Postgres>,
        event_id: DbId,
        items: &[EventItemInput],
    ) -> Result<(), sqlx::Error> {
        for item in items {
            sqlx::query(
                "INSERT INTO event_items (event_id, inventory_item_id, reserved_quantity)
                 VALUES ($1, $2, $3)",
            )
            .bind(event_id)
            .bind(item.inventory_item_id)
            .bind(item.reserved_quantity)
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }
}
