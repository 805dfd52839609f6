#![allow(clippy::unwrap_used, clippy::expect_used)]

use storefront_sdk::{
    OrderItemRequest, ProductPatch, ProductQuery, ProductSortField, SortOrder,
};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::test_support::{dec, seed_product, seed_user, test_services};

#[tokio::test]
async fn create_trims_and_get_round_trips() {
    let (_db, services) = test_services().await;

    let created = services
        .products
        .create_product(storefront_sdk::NewProduct {
            name: "  Desk Lamp ".to_owned(),
            description: Some(" Warm light ".to_owned()),
            price: dec("24.50"),
            stock: 7,
            category: " Lighting ".to_owned(),
        })
        .await
        .unwrap();
    assert_eq!(created.name, "Desk Lamp");
    assert_eq!(created.category, "Lighting");

    let fetched = services.products.get_product(created.id).await.unwrap();
    assert_eq!(fetched.name, "Desk Lamp");
    assert_eq!(fetched.description.as_deref(), Some("Warm light"));
    assert_eq!(fetched.price, dec("24.50"));
    assert_eq!(fetched.stock, 7);
}

#[tokio::test]
async fn get_missing_product_is_not_found() {
    let (_db, services) = test_services().await;
    let id = Uuid::now_v7();

    let err = services.products.get_product(id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(ref m) if *m == format!("Product with ID {id} not found")));
}

#[tokio::test]
async fn list_filters_by_price_range_and_category() {
    let (_db, services) = test_services().await;
    seed_product(&services, "Cheap Mouse", "5.00", 10, "Peripherals").await;
    seed_product(&services, "Keyboard", "49.99", 10, "Peripherals").await;
    seed_product(&services, "Monitor", "199.00", 10, "Displays").await;

    let query = ProductQuery {
        category: Some("periph".to_owned()),
        min_price: Some(dec("5.00")),
        max_price: Some(dec("49.99")),
        sort_by: ProductSortField::Price,
        sort_order: SortOrder::Asc,
        ..ProductQuery::default()
    };
    let page = services.products.list_products_page(&query).await.unwrap();

    let names: Vec<_> = page.items.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Cheap Mouse", "Keyboard"]);
    assert_eq!(page.page_info.total_items, 2);
}

#[tokio::test]
async fn search_matches_name_or_description_case_insensitively() {
    let (_db, services) = test_services().await;
    seed_product(&services, "Oak Desk", "120.00", 2, "Furniture").await;
    seed_product(&services, "Chair", "60.00", 2, "Furniture").await;
    services
        .products
        .create_product(storefront_sdk::NewProduct {
            name: "Shelf".to_owned(),
            description: Some("Matches any DESK setup".to_owned()),
            price: dec("30.00"),
            stock: 1,
            category: "Furniture".to_owned(),
        })
        .await
        .unwrap();

    let query = ProductQuery {
        search: Some("desk".to_owned()),
        sort_by: ProductSortField::Name,
        sort_order: SortOrder::Asc,
        ..ProductQuery::default()
    };
    let page = services.products.list_products_page(&query).await.unwrap();

    let names: Vec<_> = page.items.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Oak Desk", "Shelf"]);
}

#[tokio::test]
async fn search_treats_wildcards_literally() {
    let (_db, services) = test_services().await;
    seed_product(&services, "100% Cotton Tee", "15.00", 5, "Apparel").await;
    seed_product(&services, "Plain Tee", "12.00", 5, "Apparel").await;

    let query = ProductQuery {
        search: Some("%".to_owned()),
        ..ProductQuery::default()
    };
    let page = services.products.list_products_page(&query).await.unwrap();

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].name, "100% Cotton Tee");
}

#[tokio::test]
async fn search_and_category_fold_non_ascii_case() {
    let (_db, services) = test_services().await;
    seed_product(&services, "Écran Large", "199.00", 3, "ÉLECTRONIQUE").await;
    seed_product(&services, "Ecran Plain", "99.00", 3, "Office").await;

    let query = ProductQuery {
        search: Some("écran".to_owned()),
        ..ProductQuery::default()
    };
    let page = services.products.list_products_page(&query).await.unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].name, "Écran Large");

    let query = ProductQuery {
        category: Some("électro".to_owned()),
        ..ProductQuery::default()
    };
    let page = services.products.list_products_page(&query).await.unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].category, "ÉLECTRONIQUE");
}

#[tokio::test]
async fn renamed_product_is_found_under_new_name() {
    let (_db, services) = test_services().await;
    let lamp = seed_product(&services, "Lamp", "20.00", 4, "Lighting").await;
    services
        .products
        .update_product(
            lamp.id,
            ProductPatch {
                name: Some("Öl Lantern".to_owned()),
                ..ProductPatch::default()
            },
        )
        .await
        .unwrap();

    let query = ProductQuery {
        search: Some("öl".to_owned()),
        ..ProductQuery::default()
    };
    let page = services.products.list_products_page(&query).await.unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, lamp.id);
}

#[tokio::test]
async fn page_beyond_addressable_rows_is_empty() {
    let (_db, services) = test_services().await;
    seed_product(&services, "Only", "1.00", 1, "Misc").await;

    let query = ProductQuery {
        page: u64::MAX,
        ..ProductQuery::default()
    };
    let page = services.products.list_products_page(&query).await.unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.page_info.total_items, 1);
    assert_eq!(page.page_info.current_page, u64::MAX);
    assert!(!page.page_info.has_next_page);
}

#[tokio::test]
async fn pagination_caps_page_size_and_counts_pages() {
    let (_db, services) = test_services().await;
    for i in 0..12 {
        seed_product(&services, &format!("Item {i:02}"), "1.00", 1, "Misc").await;
    }

    let query = ProductQuery {
        page: 2,
        limit: Some(5),
        sort_by: ProductSortField::Name,
        sort_order: SortOrder::Asc,
        ..ProductQuery::default()
    };
    let page = services.products.list_products_page(&query).await.unwrap();
    let names: Vec<_> = page.items.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Item 05", "Item 06", "Item 07", "Item 08", "Item 09"]);
    assert_eq!(page.page_info.total_pages, 3);
    assert!(page.page_info.has_next_page);
    assert!(page.page_info.has_prev_page);

    let query = ProductQuery {
        limit: Some(500),
        ..ProductQuery::default()
    };
    let page = services.products.list_products_page(&query).await.unwrap();
    assert_eq!(page.page_info.items_per_page, 50);
    assert_eq!(page.items.len(), 12);
}

#[tokio::test]
async fn update_applies_only_present_fields() {
    let (_db, services) = test_services().await;
    let product = seed_product(&services, "Lamp", "10.00", 3, "Lighting").await;

    let updated = services
        .products
        .update_product(
            product.id,
            ProductPatch {
                price: Some(dec("12.50")),
                ..ProductPatch::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.price, dec("12.50"));
    assert_eq!(updated.name, "Lamp");
    assert_eq!(updated.stock, 3);
    assert!(updated.updated_at >= product.updated_at);

    let fetched = services.products.get_product(product.id).await.unwrap();
    assert_eq!(fetched.price, dec("12.50"));
    assert_eq!(fetched.category, "Lighting");
}

#[tokio::test]
async fn update_missing_product_is_not_found() {
    let (_db, services) = test_services().await;

    let err = services
        .products
        .update_product(Uuid::now_v7(), ProductPatch::default())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn delete_unreferenced_product() {
    let (_db, services) = test_services().await;
    let product = seed_product(&services, "Lamp", "10.00", 3, "Lighting").await;

    services.products.delete_product(product.id).await.unwrap();

    let err = services.products.get_product(product.id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn delete_is_blocked_by_order_reference() {
    let (db, services) = test_services().await;
    let user = seed_user(&db, "buyer@example.com", false).await;
    let product = seed_product(&services, "Lamp", "10.00", 3, "Lighting").await;
    services
        .orders
        .create_order(
            user.id,
            &[OrderItemRequest {
                product_id: product.id,
                quantity: 1,
            }],
        )
        .await
        .unwrap();

    let err = services.products.delete_product(product.id).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Cannot delete product that exists in orders. Consider updating stock to 0 instead."
    );
    assert!(services.products.get_product(product.id).await.is_ok());
}

#[tokio::test]
async fn categories_are_distinct_and_sorted() {
    let (_db, services) = test_services().await;
    seed_product(&services, "Lamp", "10.00", 3, "Lighting").await;
    seed_product(&services, "Desk", "90.00", 3, "Furniture").await;
    seed_product(&services, "Bulb", "2.00", 3, "Lighting").await;

    let categories = services.products.list_categories().await.unwrap();
    assert_eq!(categories, vec!["Furniture", "Lighting"]);
}
