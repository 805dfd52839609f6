//! Repository ports. Implementations live in `infra::storage`.
//!
//! Every method takes the connection explicitly so the same repository runs
//! against the pool or inside a transaction.

use async_trait::async_trait;
use sea_orm::ConnectionTrait;
use storefront_sdk::{
    Order, OrderQuery, OrderStats, Page, Product, ProductQuery, User,
};
use uuid::Uuid;

use crate::domain::error::DomainError;

/// A user row together with its password hash. Never leaves the domain layer.
#[derive(Debug, Clone)]
pub struct StoredUser {
    pub user: User,
    pub password_hash: String,
}

#[async_trait]
pub trait UsersRepository: Send + Sync {
    async fn find_by_email<C: ConnectionTrait>(
        &self,
        conn: &C,
        email: &str,
    ) -> Result<Option<StoredUser>, DomainError>;

    async fn get<C: ConnectionTrait>(&self, conn: &C, id: Uuid)
    -> Result<Option<User>, DomainError>;

    /// Fails with `Conflict` when the email is already taken.
    async fn create<C: ConnectionTrait>(
        &self,
        conn: &C,
        user: StoredUser,
    ) -> Result<(), DomainError>;
}

#[async_trait]
pub trait ProductsRepository: Send + Sync {
    async fn get<C: ConnectionTrait>(
        &self,
        conn: &C,
        id: Uuid,
    ) -> Result<Option<Product>, DomainError>;

    async fn list_page<C: ConnectionTrait>(
        &self,
        conn: &C,
        query: &ProductQuery,
        page_size: u64,
    ) -> Result<Page<Product>, DomainError>;

    async fn create<C: ConnectionTrait>(&self, conn: &C, product: &Product)
    -> Result<(), DomainError>;

    async fn update<C: ConnectionTrait>(&self, conn: &C, product: &Product)
    -> Result<(), DomainError>;

    async fn delete<C: ConnectionTrait>(&self, conn: &C, id: Uuid) -> Result<bool, DomainError>;

    /// Number of order lines pointing at the product.
    async fn count_order_references<C: ConnectionTrait>(
        &self,
        conn: &C,
        id: Uuid,
    ) -> Result<u64, DomainError>;

    /// Distinct categories, ascending.
    async fn categories<C: ConnectionTrait>(&self, conn: &C) -> Result<Vec<String>, DomainError>;

    async fn decrement_stock<C: ConnectionTrait>(
        &self,
        conn: &C,
        id: Uuid,
        quantity: i32,
    ) -> Result<(), DomainError>;
}

/// Which owner projection a listing should carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderScope {
    /// Orders of one user, no owner projection.
    Owner(Uuid),
    /// Every order, each with its owner projection.
    All,
}

#[async_trait]
pub trait OrdersRepository: Send + Sync {
    /// Persists the order row and its lines. Product projections are ignored.
    async fn create<C: ConnectionTrait>(&self, conn: &C, order: &Order) -> Result<(), DomainError>;

    /// Full detail: lines with product projections and the owner.
    async fn get<C: ConnectionTrait>(&self, conn: &C, id: Uuid)
    -> Result<Option<Order>, DomainError>;

    async fn list_page<C: ConnectionTrait>(
        &self,
        conn: &C,
        scope: OrderScope,
        query: &OrderQuery,
        page_size: u64,
    ) -> Result<Page<Order>, DomainError>;

    async fn stats<C: ConnectionTrait>(&self, conn: &C) -> Result<OrderStats, DomainError>;
}
