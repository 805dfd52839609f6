//! Domain service layer: business logic and rules.
//!
//! Per-resource submodules:
//! - `auth` - registration, login and principal lookup
//! - `products` - catalog CRUD, filtering and categories
//! - `orders` - transactional order placement, history and statistics
//!
//! Services own the connection pool. Handlers call service methods with
//! business parameters only and never touch database objects.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use storefront_auth::{PasswordHasher, TokenIssuer};

use crate::domain::repos::{OrdersRepository, ProductsRepository, UsersRepository};

mod auth;
mod orders;
mod products;

pub use auth::{AuthService, AuthSession};
pub use orders::OrdersService;
pub use products::ProductsService;

/// Configuration for the domain services.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub default_page_size: u64,
    pub max_page_size: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: 50,
        }
    }
}

impl ServiceConfig {
    /// Effective page size for a listing request.
    #[must_use]
    pub fn page_size(&self, requested: Option<u64>) -> u64 {
        let max = self.max_page_size.max(1);
        requested.unwrap_or(self.default_page_size).clamp(1, max)
    }
}

// DI container: aggregates all domain services.
pub struct AppServices<UR, PR, OR>
where
    UR: UsersRepository + 'static,
    PR: ProductsRepository + 'static,
    OR: OrdersRepository + 'static,
{
    pub auth: AuthService<UR>,
    pub products: ProductsService<PR>,
    pub orders: OrdersService<OR, PR>,
}

#[cfg(test)]
mod tests_auth;

#[cfg(test)]
mod tests_orders;

#[cfg(test)]
mod tests_products;

impl<UR, PR, OR> AppServices<UR, PR, OR>
where
    UR: UsersRepository + 'static,
    PR: ProductsRepository + 'static,
    OR: OrdersRepository + 'static,
{
    pub fn new(
        users_repo: UR,
        products_repo: PR,
        orders_repo: OR,
        db: DatabaseConnection,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenIssuer>,
        config: ServiceConfig,
    ) -> Self {
        let products_repo = Arc::new(products_repo);

        Self {
            auth: AuthService::new(db.clone(), Arc::new(users_repo), hasher, tokens),
            products: ProductsService::new(db.clone(), Arc::clone(&products_repo), config.clone()),
            orders: OrdersService::new(db, Arc::new(orders_repo), products_repo, config),
        }
    }
}
