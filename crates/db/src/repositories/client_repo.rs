//! Repository for the `clients` and `client_contacts` tables.
//!
//! Contacts are owned wholesale: updates that carry a contact list replace
//! every existing contact inside the same transaction as the field update.

use festa_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::client::{
    Client, ClientContact, ClientWithContacts, ContactInput, CreateClient, UpdateClient,
};

const COLUMNS: &str = "id, name, email, phone, kind, company_document, personal_document, \
                       address, city, state, zip_code, state_registration, business_sector, \
                       event_preferences, origin, birthday, company_founded_at, notes, tags, \
                       status, created_at, updated_at";

const CONTACT_COLUMNS: &str = "id, client_id, name, email, phone, position, is_primary";

/// Provides CRUD operations for clients and their contacts.
pub struct ClientRepo;

impl ClientRepo {
    /// Insert a client and its contacts in one transaction.
    pub async fn create(pool: &PgPool, input: &CreateClient) -> Result<ClientWithContacts, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "INSERT INTO clients (name, email, phone, kind, company_document, personal_document,
                                  address, city, state, zip_code, state_registration,
                                  business_sector, event_preferences, origin, birthday,
                                  company_founded_at, notes, tags, status)
             VALUES ($1, $2, $3, COALESCE($4, 'person'), $5, $6, $7, $8, $9, $10, $11, $12, $13,
                     $14, $15, $16, $17, COALESCE($18, '{{}}'), COALESCE($19, 'active'))
             RETURNING {COLUMNS}"
        );
        let client = sqlx::query_as::<_, Client>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.kind)
            .bind(&input.company_document)
            .bind(&input.personal_document)
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.zip_code)
            .bind(&input.state_registration)
            .bind(&input.business_sector)
            .bind(&input.event_preferences)
            .bind(&input.origin)
            .bind(input.birthday)
            .bind(input.company_founded_at)
            .bind(&input.notes)
            .bind(&input.tags)
            .bind(&input.status)
            .fetch_one(&mut *tx)
            .await?;
        if let Some(contacts) = &input.contacts {
            Self::insert_contacts(&mut tx, client.id, contacts).await?;
        }
        let contacts = Self::contacts_in_tx(&mut tx, client.id).await?;
        tx.commit().await?;
        Ok(ClientWithContacts { client, contacts })
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ClientWithContacts>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE id = $1");
        let Some(client) = sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };
        let contacts = Self::contacts_for(pool, id).await?;
        Ok(Some(ClientWithContacts { client, contacts }))
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients ORDER BY created_at DESC");
        sqlx::query_as::<_, Client>(&query).fetch_all(pool).await
    }

    /// Update a client. A present contact list replaces every existing
    /// contact, inside the same transaction.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateClient,
    ) -> Result<Option<ClientWithContacts>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "UPDATE clients SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone),
                kind = COALESCE($5, kind),
                company_document = COALESCE($6, company_document),
                personal_document = COALESCE($7, personal_document),
                address = COALESCE($8, address),
                city = COALESCE($9, city),
                state = COALESCE($10, state),
                zip_code = COALESCE($11, zip_code),
                state_registration = COALESCE($12, state_registration),
                business_sector = COALESCE($13, business_sector),
                event_preferences = COALESCE($14, event_preferences),
                origin = COALESCE($15, origin),
                birthday = COALESCE($16, birthday),
                company_founded_at = COALESCE($17, company_founded_at),
                notes = COALESCE($18, notes),
                tags = COALESCE($19, tags),
                status = COALESCE($20, status),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let Some(client) = sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.kind)
            .bind(&input.company_document)
            .bind(&input.personal_document)
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.zip_code)
            .bind(&input.state_registration)
            .bind(&input.business_sector)
            .bind(&input.event_preferences)
            .bind(&input.origin)
            .bind(input.birthday)
            .bind(input.company_founded_at)
            .bind(&input.notes)
            .bind(&input.tags)
            .bind(&input.status)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };
        if let Some(contacts) = &input.contacts {
            sqlx::query("DELETE FROM client_contacts WHERE client_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            Self::insert_contacts(&mut tx, id, contacts).await?;
        }
        let contacts = Self::contacts_in_tx(&mut tx, id).await?;
        tx.commit().await?;
        Ok(Some(ClientWithContacts { client, contacts }))
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Contacts for a client, primary contact ordered first.
    pub async fn contacts_for(pool: &PgPool, client_id: DbId) -> Result<Vec<ClientContact>, sqlx::Error> {
        let query = format!(
            "SELECT {CONTACT_COLUMNS} FROM client_contacts
             WHERE client_id = $1 ORDER BY is_primary DESC, id"
        );
        sqlx::query_as::<_, ClientContact>(&query)
            .bind(client_id)
            .fetch_all(pool)
            .await
    }

    async fn contacts_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        client_id: DbId,
    ) -> Result<Vec<ClientContact>, sqlx::Error> {
        let query = format!(
            "SELECT {CONTACT_COLUMNS} FROM client_contacts
             WHERE client_id = $1 ORDER BY is_primary DESC, id"
        );
        sqlx::query_as::<_, ClientContact>(&query)
            .bind(client_id)
            .fetch_all(&mut **tx)
            .await
    }

    async fn insert_contacts(
        tx: &mut Transaction<'_, Postgres>,
        client_id: DbId,
        contacts: &[ContactInput],
    ) -> Result<(), sqlx::Error> {
        for contact in contacts {
            sqlx::query(
                "INSERT INTO client_contacts (client_id, name, email, phone, position, is_primary)
                 VALUES ($1, $2, $3, $4, $5, $6)",
            )
            .bind(client_id)
            .bind(&contact.name)
            .bind(&contact.email)
            .bind(&contact.phone)
            .bind(&contact.position)
            .bind(contact.is_primary)
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }
}
