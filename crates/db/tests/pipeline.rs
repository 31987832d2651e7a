//! Integration tests for the budget -> contract -> event pipeline.
//!
//! Exercises the repository layer against a real database:
//! - Sequential code generation for budgets and contracts
//! - One-contract-per-budget enforcement
//! - Signing a contract spawns its event exactly once
//! - Event deletion cascades to children, transactions, and feedback

use festa_core::status;
use festa_db::models::budget::{BudgetItemInput, CreateBudget};
use festa_db::models::client::CreateClient;
use festa_db::models::event::CreateEvent;
use festa_db::models::feedback::CreateFeedback;
use festa_db::models::service::CreateService;
use festa_db::models::transaction::CreateTransaction;
use festa_db::repositories::{
    BudgetRepo, ClientRepo, ContractRepo, EventRepo, FeedbackRepo, ServiceRepo, TransactionRepo,
};
use sqlx::PgPool;

fn new_client(name: &str, email: &str) -> CreateClient {
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
        contacts: None,
    }
}

fn new_budget(client_id: i64) -> CreateBudget {
    CreateBudget {
        client_id,
        status: None,
        total_value: Some(4800.0),
        valid_until: None,
        event_name: Some("Garden Wedding".to_string()),
        event_date: Some("2026-10-03T18:00:00Z".parse().unwrap()),
        guest_count: Some(120),
        cuisine_type: None,
        venue_name: Some("Rosewood Hall".to_string()),
        venue_address: None,
        venue_city: None,
        venue_state: None,
        venue_zip_code: None,
        dietary_restrictions: None,
        notes: None,
        items: Some(vec![BudgetItemInput {
            service_id: None,
            description: "Full catering".to_string(),
            quantity: 120,
            unit_price: 40.0,
        }]),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_budget_codes_are_sequential(pool: PgPool) {
    let client = ClientRepo::create(&pool, &new_client("Ana", "ana@example.com"))
        .await
        .unwrap();

    let first = BudgetRepo::create(&pool, &new_budget(client.client.id))
        .await
        .unwrap();
    let second = BudgetRepo::create(&pool, &new_budget(client.client.id))
        .await
        .unwrap();

    assert_eq!(first.budget.code, "BDG-001");
    assert_eq!(second.budget.code, "BDG-002");
    assert_eq!(first.items.len(), 1);
    assert_eq!(first.client_name, "Ana");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_one_contract_per_budget(pool: PgPool) {
    let client = ClientRepo::create(&pool, &new_client("Bruno", "bruno@example.com"))
        .await
        .unwrap();
    let budget = BudgetRepo::create(&pool, &new_budget(client.client.id))
        .await
        .unwrap();

    let contract = ContractRepo::create(&pool, budget.budget.id, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(contract.code, "CTR-001");
    assert_eq!(contract.value, 4800.0);
    assert_eq!(contract.client_id, client.client.id);
    assert_eq!(contract.status, status::CONTRACT_AWAITING_SIGNATURE);

    // A second contract for the same budget violates uq_contracts_budget_id.
    let err = ContractRepo::create(&pool, budget.budget.id, Some("custom"))
        .await
        .unwrap_err();
    let db_err = err.as_database_error().unwrap();
    assert_eq!(db_err.constraint(), Some("uq_contracts_budget_id"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_contract_for_missing_budget(pool: PgPool) {
    let created = ContractRepo::create(&pool, 9999, None).await.unwrap();
    assert!(created.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signing_spawns_event_once(pool: PgPool) {
    let client = ClientRepo::create(&pool, &new_client("Carla", "carla@example.com"))
        .await
        .unwrap();
    let budget = BudgetRepo::create(&pool, &new_budget(client.client.id))
        .await
        .unwrap();
    let contract = ContractRepo::create(&pool, budget.budget.id, None)
        .await
        .unwrap()
        .unwrap();

    let (signed, event) = ContractRepo::update_status(&pool, contract.id, status::CONTRACT_SIGNED)
        .await
        .unwrap()
        .unwrap();
    let event = event.unwrap();

    assert_eq!(signed.status, status::CONTRACT_SIGNED);
    assert!(signed.signed_at.is_some());
    assert_eq!(signed.event_id, Some(event.id));
    assert_eq!(event.title, "Garden Wedding");
    assert_eq!(event.status, status::EVENT_PLANNED);
    assert_eq!(event.guest_count, 120);
    assert_eq!(event.total_value, 4800.0);
    // Proposed date present, so the event runs four hours.
    let end = event.end_at.unwrap();
    assert_eq!((end - event.start_at).num_hours(), 4);

    // The budget's line item rides along as a reservation.
    let details = EventRepo::find_by_id(&pool, event.id).await.unwrap().unwrap();
    assert_eq!(details.items.len(), 1);
    assert_eq!(details.items[0].item_name, "Full catering");
    assert_eq!(details.items[0].reserved_quantity, 120);

    // Re-signing is idempotent by guard: no second event, but signed_at is
    // stamped again.
    let (resigned, second) =
        ContractRepo::update_status(&pool, contract.id, status::CONTRACT_SIGNED)
            .await
            .unwrap()
            .unwrap();
    assert!(second.is_none());
    assert_eq!(resigned.event_id, Some(event.id));
    assert!(resigned.signed_at.unwrap() > signed.signed_at.unwrap());

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM events")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_event_delete_cascades(pool: PgPool) {
    let client = ClientRepo::create(&pool, &new_client("Diego", "diego@example.com"))
        .await
        .unwrap();
    let budget = BudgetRepo::create(&pool, &new_budget(client.client.id))
        .await
        .unwrap();
    let event = EventRepo::create_from_budget(&pool, budget.budget.id)
        .await
        .unwrap()
        .unwrap();

    TransactionRepo::create(
        &pool,
        &CreateTransaction {
            description: "Deposit".to_string(),
            amount: 1000.0,
            kind: status::TRANSACTION_REVENUE.to_string(),
            status: None,
            method: None,
            category: None,
            occurred_at: None,
            due_date: None,
            client_id: Some(client.client.id),
            supplier_id: None,
            event_id: Some(event.id),
            document_number: None,
            receipt_url: None,
            notes: None,
        },
    )
    .await
    .unwrap();
    FeedbackRepo::create(
        &pool,
        &CreateFeedback {
            event_id: event.id,
            rating: Some(5),
            comment: None,
            allows_testimonial: true,
        },
    )
    .await
    .unwrap();

    assert!(EventRepo::delete(&pool, event.id).await.unwrap());

    let (transactions,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM transactions")
        .fetch_one(&pool)
        .await
        .unwrap();
    let (feedback,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM feedback")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(transactions, 0);
    assert_eq!(feedback, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_budget_item_replace_is_wholesale(pool: PgPool) {
    let client = ClientRepo::create(&pool, &new_client("Elisa", "elisa@example.com"))
        .await
        .unwrap();
    let budget = BudgetRepo::create(&pool, &new_budget(client.client.id))
        .await
        .unwrap();

    let updated = BudgetRepo::update(
        &pool,
        budget.budget.id,
        &festa_db::models::budget::UpdateBudget {
            client_id: None,
            total_value: Some(600.0),
            valid_until: None,
            event_name: None,
            event_date: None,
            guest_count: None,
            cuisine_type: None,
            venue_name: None,
            venue_address: None,
            venue_city: None,
            venue_state: None,
            venue_zip_code: None,
            dietary_restrictions: None,
            notes: None,
            items: Some(vec![
                BudgetItemInput {
                    service_id: None,
                    description: "Buffet".to_string(),
                    quantity: 1,
                    unit_price: 400.0,
                },
                BudgetItemInput {
                    service_id: None,
                    description: "Staff".to_string(),
                    quantity: 2,
                    unit_price: 100.0,
                },
            ]),
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.budget.total_value, 600.0);
    assert_eq!(updated.items.len(), 2);
    assert_eq!(updated.items[0].description, "Buffet");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_budget_items_become_event_reservations(pool: PgPool) {
    let client = ClientRepo::create(&pool, &new_client("Fabio", "fabio@example.com"))
        .await
        .unwrap();
    let service = ServiceRepo::create(
        &pool,
        &CreateService {
            name: "Catering".to_string(),
            description: None,
            unit_price: Some(40.0),
        },
    )
    .await
    .unwrap();

    let mut input = new_budget(client.client.id);
    input.items = Some(vec![
        BudgetItemInput {
            service_id: Some(service.id),
            description: "Full catering".to_string(),
            quantity: 120,
            unit_price: 40.0,
        },
        BudgetItemInput {
            service_id: None,
            description: "Valet parking".to_string(),
            quantity: 2,
            unit_price: 300.0,
        },
    ]);
    let budget = BudgetRepo::create(&pool, &input).await.unwrap();

    let event = EventRepo::create_from_budget(&pool, budget.budget.id)
        .await
        .unwrap()
        .unwrap();

    let details = EventRepo::find_by_id(&pool, event.id).await.unwrap().unwrap();
    assert_eq!(details.items.len(), 2);
    assert_eq!(details.items[0].service_id, Some(service.id));
    assert_eq!(details.items[0].item_name, "Full catering");
    assert_eq!(details.items[0].reserved_quantity, 120);
    assert!(details.items[0].inventory_item_id.is_none());
    assert_eq!(details.items[1].item_name, "Valet parking");
    assert_eq!(details.items[1].reserved_quantity, 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_direct_event_create_minimal(pool: PgPool) {
    let client = ClientRepo::create(&pool, &new_client("Gina", "gina@example.com"))
        .await
        .unwrap();

    // Only the required fields; everything else falls back to defaults.
    let created = EventRepo::create(
        &pool,
        &CreateEvent {
            title: "Tasting Session".to_string(),
            client_id: client.client.id,
            start_at: "2026-11-05T18:00:00Z".parse().unwrap(),
            end_at: None,
            guest_count: None,
            total_value: None,
            status: None,
            event_type: None,
            event_theme: None,
            venue_name: None,
            venue_address: None,
            venue_city: None,
            venue_state: None,
            venue_zip_code: None,
            setup_start: None,
            setup_end: None,
            teardown_start: None,
            teardown_end: None,
            specific_requirements: None,
            contact_name: None,
            contact_phone: None,
            contact_email: None,
            notes: None,
            tasks: None,
            staff_ids: None,
            items: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(created.event.title, "Tasting Session");
    assert_eq!(created.event.status, status::EVENT_PLANNED);
    assert_eq!(created.event.guest_count, 0);
    assert_eq!(created.event.total_value, 0.0);
    assert!(created.event.notes.is_none());
    assert_eq!(created.client_name, "Gina");
}
