//! Repository for the `contracts` table and the contract-signing pipeline.
//!
//! Contract codes are sequential (`CTR-001`, ...); the next suffix is
//! computed inside the inserting statement and `uq_contracts_code` is the
//! backstop if two inserts race. `uq_contracts_budget_id` enforces the
//! one-contract-per-budget rule at the same level.

use festa_core::status::{CONTRACT_CODE_PREFIX, CONTRACT_SIGNED, EVENT_PLANNED};
use festa_core::types::DbId;
use sqlx::PgPool;

use crate::models::contract::{Contract, ContractWithContext};
use crate::models::event::Event;
use crate::repositories::event_repo::EventRepo;

const COLUMNS: &str = "id, code, budget_id, client_id, event_id, status, value, content, \
                       issued_at, signed_at, created_at, updated_at";

const EVENT_COLUMNS: &str = "id, title, client_id, start_at, end_at, guest_count, total_value, \
                             status, event_type, event_theme, venue_name, venue_address, \
                             venue_city, venue_state, venue_zip_code, setup_start, setup_end, \
                             teardown_start, teardown_end, specific_requirements, contact_name, \
                             contact_phone, contact_email, notes, created_at, updated_at";

/// Provides CRUD and signing operations for contracts.
pub struct ContractRepo;

impl ContractRepo {
    /// Insert a contract for a budget, deriving the code from the current
    /// maximum suffix and copying the budget's client and total.
    ///
    /// Returns `None` when the budget does not exist. A budget that already
    /// has a contract surfaces as a unique violation on
    /// `uq_contracts_budget_id`.
    pub async fn create(
        pool: &PgPool,
        budget_id: DbId,
        content: Option<&str>,
    ) -> Result<Option<Contract>, sqlx::Error> {
        let query = format!(
            "INSERT INTO contracts (code, budget_id, client_id, value, content)
             SELECT $2 || LPAD(next.n::TEXT, GREATEST(3, LENGTH(next.n::TEXT)), '0'),
                    b.id, b.client_id, b.total_value, $3
             FROM budgets b,
                  (SELECT COALESCE(MAX(SUBSTRING(code FROM LENGTH($2) + 1)::BIGINT), 0) + 1 AS n
                   FROM contracts) next
             WHERE b.id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contract>(&query)
            .bind(budget_id)
            .bind(CONTRACT_CODE_PREFIX)
            .bind(content)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Contract>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contracts WHERE id = $1");
        sqlx::query_as::<_, Contract>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_budget(
        pool: &PgPool,
        budget_id: DbId,
    ) -> Result<Option<Contract>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contracts WHERE budget_id = $1");
        sqlx::query_as::<_, Contract>(&query)
            .bind(budget_id)
            .fetch_optional(pool)
            .await
    }

    /// List contracts newest first, with client name and budget code joined.
    pub async fn list(pool: &PgPool) -> Result<Vec<ContractWithContext>, sqlx::Error> {
        sqlx::query_as::<_, ContractWithContext>(
            "SELECT ct.id, ct.code, ct.budget_id, ct.client_id, ct.event_id, ct.status, ct.value,
                    ct.content, ct.issued_at, ct.signed_at, ct.created_at, ct.updated_at,
                    cl.name AS client_name, b.code AS budget_code
             FROM contracts ct
             JOIN clients cl ON cl.id = ct.client_id
             JOIN budgets b ON b.id = ct.budget_id
             ORDER BY ct.created_at DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// Replace a contract's content.
    pub async fn update_content(
        pool: &PgPool,
        id: DbId,
        content: &str,
    ) -> Result<Option<Contract>, sqlx::Error> {
        let query = format!(
            "UPDATE contracts SET content = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contract>(&query)
            .bind(id)
            .bind(content)
            .fetch_optional(pool)
            .await
    }

    /// Transition a contract to a new status.
    ///
    /// Every transition to `signed` stamps `signed_at`. The first one also
    /// creates the Event from the contract's budget, copies the budget's
    /// line items onto it as reservations, and back-fills `event_id`; status
    /// write, event insert, item copy, and back-fill all commit or roll back
    /// together. Re-signing a contract whose `event_id` is already set
    /// performs only the status write.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<(Contract, Option<Event>)>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "UPDATE contracts SET
                status = $2,
                signed_at = CASE WHEN $2 = $3 THEN NOW() ELSE signed_at END,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let Some(mut contract) = sqlx::query_as::<_, Contract>(&query)
            .bind(id)
            .bind(status)
            .bind(CONTRACT_SIGNED)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let mut event = None;
        if status == CONTRACT_SIGNED && contract.event_id.is_none() {
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
                        b.venue_name, b.venue_address, b.venue_city, b.venue_state,
                        b.venue_zip_code, b.notes
                 FROM budgets b JOIN clients cl ON cl.id = b.client_id
                 WHERE b.id = $1
                 RETURNING {EVENT_COLUMNS}"
            );
            let created = sqlx::query_as::<_, Event>(&query)
                .bind(contract.budget_id)
                .bind(EVENT_PLANNED)
                .fetch_one(&mut *tx)
                .await?;
            EventRepo::copy_budget_items(&mut tx, created.id, contract.budget_id).await?;
            sqlx::query("UPDATE contracts SET event_id = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(created.id)
                .execute(&mut *tx)
                .await?;
            contract.event_id = Some(created.id);
            event = Some(created);
        }

        tx.commit().await?;
        Ok(Some((contract, event)))
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contracts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
