//! Integration tests for inventory stock movements.

use festa_core::status::{MOVEMENT_INBOUND, MOVEMENT_OUTBOUND};
use festa_db::models::inventory::{CreateInventoryItem, CreateMovement};
use festa_db::repositories::InventoryRepo;
use sqlx::PgPool;

fn new_item(name: &str, quantity: i32) -> CreateInventoryItem {
    CreateInventoryItem {
        name: name.to_string(),
        sku: None,
        category: Some("tableware".to_string()),
        description: None,
        quantity: Some(quantity),
        min_stock: Some(5),
        unit_value: Some(2.5),
        supplier_id: None,
    }
}

fn movement(kind: &str, quantity: i32) -> CreateMovement {
    CreateMovement {
        kind: kind.to_string(),
        quantity,
        note: None,
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_movements_adjust_stock(pool: PgPool) {
    let item = InventoryRepo::create(&pool, &new_item("Plates", 10))
        .await
        .unwrap();

    let (item, record) = InventoryRepo::apply_movement(&pool, item.id, &movement(MOVEMENT_INBOUND, 15))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(item.quantity, 25);
    assert_eq!(record.kind, MOVEMENT_INBOUND);
    assert_eq!(record.quantity, 15);

    let (item, _) = InventoryRepo::apply_movement(&pool, item.id, &movement(MOVEMENT_OUTBOUND, 20))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(item.quantity, 5);

    let movements = InventoryRepo::list_movements(&pool, item.id).await.unwrap();
    assert_eq!(movements.len(), 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_negative_stock_is_rejected(pool: PgPool) {
    let item = InventoryRepo::create(&pool, &new_item("Glasses", 3))
        .await
        .unwrap();

    let rejected = InventoryRepo::apply_movement(&pool, item.id, &movement(MOVEMENT_OUTBOUND, 4))
        .await
        .unwrap();
    assert!(rejected.is_none());

    // Nothing persisted: quantity unchanged, no movement row.
    let item = InventoryRepo::find_by_id(&pool, item.id).await.unwrap().unwrap();
    assert_eq!(item.quantity, 3);
    let movements = InventoryRepo::list_movements(&pool, item.id).await.unwrap();
    assert!(movements.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_stock_status_filter(pool: PgPool) {
    use festa_db::models::inventory::{InventoryFilter, StockStatus};

    InventoryRepo::create(&pool, &new_item("Empty", 0)).await.unwrap();
    InventoryRepo::create(&pool, &new_item("Low", 4)).await.unwrap();
    InventoryRepo::create(&pool, &new_item("Full", 50)).await.unwrap();

    let out = InventoryRepo::list(
        &pool,
        &InventoryFilter {
            stock_status: Some(StockStatus::OutOfStock),
            ..InventoryFilter::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].name, "Empty");

    let low = InventoryRepo::list(
        &pool,
        &InventoryFilter {
            stock_status: Some(StockStatus::Low),
            ..InventoryFilter::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(low.len(), 1);
    assert_eq!(low[0].name, "Low");

    let in_stock = InventoryRepo::list(
        &pool,
        &InventoryFilter {
            stock_status: Some(StockStatus::InStock),
            ..InventoryFilter::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(in_stock.len(), 1);
    assert_eq!(in_stock[0].name, "Full");
}
