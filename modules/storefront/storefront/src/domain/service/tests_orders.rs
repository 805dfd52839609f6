#![allow(clippy::unwrap_used, clippy::expect_used)]

use storefront_sdk::{OrderItemRequest, OrderQuery, OrderSortField, SortOrder};
use tracing_test::traced_test;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::test_support::{dec, seed_product, seed_user, test_services};

fn item(product_id: Uuid, quantity: i32) -> OrderItemRequest {
    OrderItemRequest {
        product_id,
        quantity,
    }
}

#[tokio::test]
async fn create_order_totals_snapshots_and_decrements_stock() {
    let (db, services) = test_services().await;
    let user = seed_user(&db, "buyer@example.com", false).await;
    let mouse = seed_product(&services, "Mouse", "19.99", 10, "Peripherals").await;
    let pad = seed_product(&services, "Mouse Pad", "5.50", 4, "Peripherals").await;

    let order = services
        .orders
        .create_order(user.id, &[item(mouse.id, 2), item(pad.id, 1)])
        .await
        .unwrap();

    assert_eq!(order.total, dec("45.48"));
    assert_eq!(order.user_id, user.id);
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.items[0].price, dec("19.99"));
    assert_eq!(order.items[0].product.as_ref().unwrap().name, "Mouse");

    assert_eq!(services.products.get_product(mouse.id).await.unwrap().stock, 8);
    assert_eq!(services.products.get_product(pad.id).await.unwrap().stock, 3);
}

#[tokio::test]
async fn insufficient_stock_rolls_back_everything() {
    let (db, services) = test_services().await;
    let user = seed_user(&db, "buyer@example.com", false).await;
    let mouse = seed_product(&services, "Mouse", "19.99", 10, "Peripherals").await;
    let pad = seed_product(&services, "Mouse Pad", "5.50", 1, "Peripherals").await;

    let err = services
        .orders
        .create_order(user.id, &[item(mouse.id, 2), item(pad.id, 3)])
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::BadRequest(_)));
    assert_eq!(
        err.to_string(),
        "Insufficient stock for product \"Mouse Pad\". Available: 1, Requested: 3"
    );
    assert_eq!(services.products.get_product(mouse.id).await.unwrap().stock, 10);
    assert_eq!(services.products.get_product(pad.id).await.unwrap().stock, 1);

    let history = services
        .orders
        .list_user_orders_page(user.id, &OrderQuery::default())
        .await
        .unwrap();
    assert_eq!(history.page_info.total_items, 0);
}

#[tokio::test]
#[traced_test]
async fn unknown_product_rolls_back_everything() {
    let (db, services) = test_services().await;
    let user = seed_user(&db, "buyer@example.com", false).await;
    let mouse = seed_product(&services, "Mouse", "19.99", 10, "Peripherals").await;
    let missing = Uuid::now_v7();

    let err = services
        .orders
        .create_order(user.id, &[item(mouse.id, 1), item(missing, 1)])
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::NotFound(ref m) if *m == format!("Product with ID {missing} not found")));
    assert_eq!(services.products.get_product(mouse.id).await.unwrap().stock, 10);
    assert!(logs_contain("Order rejected, rolling back"));
}

#[tokio::test]
async fn repeated_lines_share_the_available_stock() {
    let (db, services) = test_services().await;
    let user = seed_user(&db, "buyer@example.com", false).await;
    let mouse = seed_product(&services, "Mouse", "19.99", 3, "Peripherals").await;

    let err = services
        .orders
        .create_order(user.id, &[item(mouse.id, 2), item(mouse.id, 2)])
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Insufficient stock for product \"Mouse\". Available: 1, Requested: 2"
    );
    assert_eq!(services.products.get_product(mouse.id).await.unwrap().stock, 3);
}

#[tokio::test]
async fn exact_stock_can_be_ordered() {
    let (db, services) = test_services().await;
    let user = seed_user(&db, "buyer@example.com", false).await;
    let lamp = seed_product(&services, "Lamp", "10.00", 2, "Lighting").await;

    services
        .orders
        .create_order(user.id, &[item(lamp.id, 2)])
        .await
        .unwrap();
    assert_eq!(services.products.get_product(lamp.id).await.unwrap().stock, 0);
}

#[tokio::test]
async fn empty_order_is_rejected() {
    let (db, services) = test_services().await;
    let user = seed_user(&db, "buyer@example.com", false).await;

    let err = services.orders.create_order(user.id, &[]).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
}

#[tokio::test]
async fn price_snapshot_survives_product_update() {
    let (db, services) = test_services().await;
    let user = seed_user(&db, "buyer@example.com", false).await;
    let lamp = seed_product(&services, "Lamp", "10.00", 5, "Lighting").await;

    let order = services
        .orders
        .create_order(user.id, &[item(lamp.id, 2)])
        .await
        .unwrap();
    services
        .products
        .update_product(
            lamp.id,
            storefront_sdk::ProductPatch {
                price: Some(dec("99.00")),
                ..storefront_sdk::ProductPatch::default()
            },
        )
        .await
        .unwrap();

    let detail = services
        .orders
        .get_order(order.id, user.id, false)
        .await
        .unwrap();
    assert_eq!(detail.total, dec("20.00"));
    assert_eq!(detail.items[0].price, dec("10.00"));
    assert_eq!(detail.items[0].subtotal(), dec("20.00"));
    assert_eq!(detail.owner.as_ref().unwrap().email, "buyer@example.com");
    assert_eq!(
        detail.items[0].product.as_ref().unwrap().description.as_deref(),
        Some("Lamp description")
    );
}

#[tokio::test]
async fn order_detail_access_policy() {
    let (db, services) = test_services().await;
    let owner = seed_user(&db, "owner@example.com", false).await;
    let other = seed_user(&db, "other@example.com", false).await;
    let admin = seed_user(&db, "admin@example.com", true).await;
    let lamp = seed_product(&services, "Lamp", "10.00", 5, "Lighting").await;
    let order = services
        .orders
        .create_order(owner.id, &[item(lamp.id, 1)])
        .await
        .unwrap();

    assert!(services.orders.get_order(order.id, owner.id, false).await.is_ok());
    assert!(services.orders.get_order(order.id, admin.id, true).await.is_ok());

    let err = services
        .orders
        .get_order(order.id, other.id, false)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden(ref m) if m == "You can only access your own orders"));

    let err = services
        .orders
        .get_order(Uuid::now_v7(), owner.id, false)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn user_history_is_scoped_and_sorted() {
    let (db, services) = test_services().await;
    let alice = seed_user(&db, "alice@example.com", false).await;
    let bob = seed_user(&db, "bob@example.com", false).await;
    let lamp = seed_product(&services, "Lamp", "10.00", 50, "Lighting").await;

    for qty in [3, 1, 2] {
        services
            .orders
            .create_order(alice.id, &[item(lamp.id, qty)])
            .await
            .unwrap();
    }
    services
        .orders
        .create_order(bob.id, &[item(lamp.id, 5)])
        .await
        .unwrap();

    let query = OrderQuery {
        sort_by: OrderSortField::Total,
        sort_order: SortOrder::Asc,
        ..OrderQuery::default()
    };
    let page = services
        .orders
        .list_user_orders_page(alice.id, &query)
        .await
        .unwrap();

    let totals: Vec<_> = page.items.iter().map(|o| o.total).collect();
    assert_eq!(totals, vec![dec("10.00"), dec("20.00"), dec("30.00")]);
    assert!(page.items.iter().all(|o| o.user_id == alice.id));
    assert!(page.items.iter().all(|o| o.owner.is_none()));
    assert_eq!(page.items[0].items.len(), 1);
    assert_eq!(page.page_info.total_items, 3);

    let all = services
        .orders
        .list_all_orders_page(&OrderQuery::default())
        .await
        .unwrap();
    assert_eq!(all.page_info.total_items, 4);
    assert!(all.items.iter().all(|o| o.owner.is_some()));
}

#[tokio::test]
async fn stats_are_zero_without_orders() {
    let (_db, services) = test_services().await;

    let stats = services.orders.order_stats().await.unwrap();
    assert_eq!(stats.total_orders, 0);
    assert_eq!(stats.total_revenue, dec("0"));
    assert_eq!(stats.avg_order_value, dec("0"));
}

#[tokio::test]
async fn stats_sum_and_average() {
    let (db, services) = test_services().await;
    let user = seed_user(&db, "buyer@example.com", false).await;
    let lamp = seed_product(&services, "Lamp", "10.00", 50, "Lighting").await;
    let bulb = seed_product(&services, "Bulb", "0.35", 50, "Lighting").await;

    services
        .orders
        .create_order(user.id, &[item(lamp.id, 1)])
        .await
        .unwrap();
    services
        .orders
        .create_order(user.id, &[item(lamp.id, 1), item(bulb.id, 1)])
        .await
        .unwrap();
    services
        .orders
        .create_order(user.id, &[item(bulb.id, 1)])
        .await
        .unwrap();

    let stats = services.orders.order_stats().await.unwrap();
    assert_eq!(stats.total_orders, 3);
    assert_eq!(stats.total_revenue, dec("20.70"));
    assert_eq!(stats.avg_order_value, dec("6.90"));
}
