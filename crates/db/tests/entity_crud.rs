//! Integration tests for entity CRUD with owned child collections.

use festa_db::models::audit::CreateAuditLog;
use festa_db::models::client::{ContactInput, CreateClient, UpdateClient};
use festa_db::models::task::{CreateTask, SubTaskInput, TaskFilter, UpdateTask};
use festa_db::repositories::{AuditLogRepo, ClientRepo, TaskRepo, UserRepo};
use sqlx::PgPool;

fn contact(name: &str, is_primary: bool) -> ContactInput {
    ContactInput {
        name: name.to_string(),
        email: None,
        phone: None,
        position: None,
        is_primary,
    }
}

fn new_client(name: &str, email: &str, contacts: Vec<ContactInput>) -> CreateClient {
    CreateClient {
        name: name.to_string(),
        email: email.to_string(),
        phone: None,
        kind: None,
        company_document: None,
        personal_document: None,
        address: None,
        city: None,
        state: None,
        zip_code: None,
        state_registration: None,
        business_sector: None,
        event_preferences: None,
        origin: None,
        birthday: None,
        company_founded_at: None,
        notes: None,
        tags: None,
        status: None,
        contacts: Some(contacts),
    }
}

fn update_contacts(contacts: Vec<ContactInput>) -> UpdateClient {
    UpdateClient {
        name: None,
        email: None,
        phone: None,
        kind: None,
        company_document: None,
        personal_document: None,
        address: None,
        city: None,
        state: None,
        zip_code: None,
        state_registration: None,
        business_sector: None,
        event_preferences: None,
        origin: None,
        birthday: None,
        company_founded_at: None,
        notes: None,
        tags: None,
        status: None,
        contacts: Some(contacts),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_client_contacts_primary_first(pool: PgPool) {
    let created = ClientRepo::create(
        &pool,
        &new_client(
            "Acme Events",
            "acme@example.com",
            vec![contact("Secondary", false), contact("Primary", true)],
        ),
    )
    .await
    .unwrap();

    assert_eq!(created.contacts.len(), 2);
    assert_eq!(created.contacts[0].name, "Primary");
    assert!(created.contacts[0].is_primary);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_client_contact_replace_is_wholesale(pool: PgPool) {
    let created = ClientRepo::create(
        &pool,
        &new_client(
            "Acme Events",
            "acme@example.com",
            vec![contact("Old A", true), contact("Old B", false)],
        ),
    )
    .await
    .unwrap();

    let updated = ClientRepo::update(
        &pool,
        created.client.id,
        &update_contacts(vec![contact("New", true)]),
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.contacts.len(), 1);
    assert_eq!(updated.contacts[0].name, "New");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_client_email_conflicts(pool: PgPool) {
    ClientRepo::create(&pool, &new_client("First", "dup@example.com", vec![]))
        .await
        .unwrap();
    let err = ClientRepo::create(&pool, &new_client("Second", "dup@example.com", vec![]))
        .await
        .unwrap_err();
    let db_err = err.as_database_error().unwrap();
    assert_eq!(db_err.constraint(), Some("uq_clients_email"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_task_sub_task_replace_and_overdue_filter(pool: PgPool) {
    let task = TaskRepo::create(
        &pool,
        &CreateTask {
            title: "Order flowers".to_string(),
            description: None,
            status: None,
            priority: None,
            due_date: Some("2020-01-01T00:00:00Z".parse().unwrap()),
            assigned_to_id: None,
            client_id: None,
            event_id: None,
            tags: None,
            sub_tasks: Some(vec![SubTaskInput {
                text: "Pick vendor".to_string(),
                is_done: false,
            }]),
        },
    )
    .await
    .unwrap();
    assert_eq!(task.sub_tasks.len(), 1);

    let overdue = TaskRepo::list(
        &pool,
        &TaskFilter {
            overdue: Some(true),
            ..TaskFilter::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(overdue.len(), 1);

    // Completing the task takes it out of the overdue bucket.
    TaskRepo::update(
        &pool,
        task.task.id,
        &UpdateTask {
            title: None,
            description: None,
            status: Some("done".to_string()),
            priority: None,
            due_date: None,
            assigned_to_id: None,
            client_id: None,
            event_id: None,
            tags: None,
            sub_tasks: Some(vec![]),
        },
    )
    .await
    .unwrap()
    .unwrap();

    let overdue = TaskRepo::list(
        &pool,
        &TaskFilter {
            overdue: Some(true),
            ..TaskFilter::default()
        },
    )
    .await
    .unwrap();
    assert!(overdue.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_user_rows_carry_role_name(pool: PgPool) {
    let user = UserRepo::create(&pool, "Marina", "marina@example.com", "$argon2$fake", None)
        .await
        .unwrap();
    assert_eq!(user.role_name, "member");

    let fetched = UserRepo::find_by_email(&pool, "marina@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.id, user.id);
    assert!(!fetched.two_factor_enabled);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_audit_log_pages_newest_first(pool: PgPool) {
    for i in 0..3 {
        AuditLogRepo::insert(
            &pool,
            &CreateAuditLog {
                action: "CREATE".to_string(),
                entity_type: "Client".to_string(),
                entity_id: i.to_string(),
                user_id: None,
                details: None,
            },
        )
        .await
        .unwrap();
    }

    let page = AuditLogRepo::list(&pool, 1, 2).await.unwrap();
    assert_eq!(page.total, 3);
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].entity_id, "2");
}
