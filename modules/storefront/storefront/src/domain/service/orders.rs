use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use storefront_sdk::{
    Order, OrderItemRequest, OrderLine, OrderQuery, OrderStats, OrderedProduct, Page,
};
use time::OffsetDateTime;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::repos::{OrderScope, OrdersRepository, ProductsRepository};
use crate::domain::service::ServiceConfig;

/// Order placement, history and statistics.
pub struct OrdersService<R: OrdersRepository, P: ProductsRepository> {
    db: DatabaseConnection,
    repo: Arc<R>,
    products: Arc<P>,
    config: ServiceConfig,
}

impl<R: OrdersRepository, P: ProductsRepository> OrdersService<R, P> {
    pub fn new(
        db: DatabaseConnection,
        repo: Arc<R>,
        products: Arc<P>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            db,
            repo,
            products,
            config,
        }
    }
}

// Business logic methods
impl<R: OrdersRepository, P: ProductsRepository> OrdersService<R, P> {
    /// Places an order in one transaction. Any failure rolls back every write.
    #[instrument(skip(self, items), fields(user_id = %user_id, lines = items.len()))]
    pub async fn create_order(
        &self,
        user_id: Uuid,
        items: &[OrderItemRequest],
    ) -> Result<Order, DomainError> {
        info!("Creating new order");

        if items.is_empty() {
            return Err(DomainError::validation(
                "items",
                "items must contain at least 1 element",
            ));
        }

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| DomainError::from(e).or_bad_request("Failed to create order"))?;

        match self.place_order(&txn, user_id, items).await {
            Ok(order) => {
                txn.commit()
                    .await
                    .map_err(|e| DomainError::from(e).or_bad_request("Failed to create order"))?;
                info!("Successfully created order with id={}", order.id);
                Ok(order)
            }
            Err(err) => {
                debug!(error = %err, "Order rejected, rolling back");
                if let Err(rollback_err) = txn.rollback().await {
                    warn!(error = %rollback_err, "Rollback failed");
                }
                Err(err.or_bad_request("Failed to create order"))
            }
        }
    }

    async fn place_order<C: ConnectionTrait>(
        &self,
        txn: &C,
        user_id: Uuid,
        items: &[OrderItemRequest],
    ) -> Result<Order, DomainError> {
        let mut total = Decimal::ZERO;
        let mut lines = Vec::with_capacity(items.len());
        // Quantity already claimed by earlier lines of this order, per product.
        let mut claimed: HashMap<Uuid, i32> = HashMap::new();

        for item in items {
            let product = self
                .products
                .get(txn, item.product_id)
                .await?
                .ok_or_else(|| DomainError::not_found("Product", item.product_id))?;

            let already = claimed.get(&product.id).copied().unwrap_or(0);
            let available = product.stock.saturating_sub(already);
            if available < item.quantity {
                return Err(DomainError::insufficient_stock(
                    &product.name,
                    available,
                    item.quantity,
                ));
            }
            claimed.insert(product.id, already + item.quantity);

            total += product.price * Decimal::from(item.quantity);
            lines.push(OrderLine {
                id: Uuid::now_v7(),
                product_id: product.id,
                quantity: item.quantity,
                price: product.price,
                product: Some(OrderedProduct {
                    id: product.id,
                    name: product.name,
                    description: product.description,
                    category: product.category,
                }),
            });
        }

        let now = OffsetDateTime::now_utc();
        let order = Order {
            id: Uuid::now_v7(),
            user_id,
            total,
            created_at: now,
            updated_at: now,
            items: lines,
            owner: None,
        };

        self.repo.create(txn, &order).await?;

        // No row lock: a concurrent order may pass the same stock check before this commits.
        for line in &order.items {
            self.products
                .decrement_stock(txn, line.product_id, line.quantity)
                .await?;
        }

        Ok(order)
    }

    #[instrument(skip(self, query), fields(user_id = %user_id, page = query.page))]
    pub async fn list_user_orders_page(
        &self,
        user_id: Uuid,
        query: &OrderQuery,
    ) -> Result<Page<Order>, DomainError> {
        debug!("Listing orders of user");

        let page_size = self.config.page_size(query.limit);
        let page = self
            .repo
            .list_page(&self.db, OrderScope::Owner(user_id), query, page_size)
            .await
            .map_err(|e| e.or_bad_request("Failed to fetch orders"))?;

        debug!("Successfully listed {} orders in page", page.items.len());
        Ok(page)
    }

    #[instrument(skip(self, query), fields(page = query.page))]
    pub async fn list_all_orders_page(&self, query: &OrderQuery) -> Result<Page<Order>, DomainError> {
        debug!("Listing all orders");

        let page_size = self.config.page_size(query.limit);
        self.repo
            .list_page(&self.db, OrderScope::All, query, page_size)
            .await
            .map_err(|e| e.or_bad_request("Failed to fetch orders"))
    }

    /// Owners see their own orders; admins see any.
    #[instrument(skip(self), fields(order_id = %id, user_id = %user_id))]
    pub async fn get_order(
        &self,
        id: Uuid,
        user_id: Uuid,
        is_admin: bool,
    ) -> Result<Order, DomainError> {
        debug!("Getting order by id");

        let order = self
            .repo
            .get(&self.db, id)
            .await
            .map_err(|e| e.or_bad_request("Invalid order ID"))?
            .ok_or_else(|| DomainError::not_found("Order", id))?;

        if order.user_id != user_id && !is_admin {
            debug!("Order belongs to another user");
            return Err(DomainError::foreign_order());
        }

        Ok(order)
    }

    #[instrument(skip(self))]
    pub async fn order_stats(&self) -> Result<OrderStats, DomainError> {
        debug!("Computing order statistics");

        self.repo
            .stats(&self.db)
            .await
            .map_err(|e| e.or_bad_request("Failed to fetch order statistics"))
    }
}
