use std::sync::Arc;

use axum::Router;
use sea_orm::DatabaseConnection;
use storefront_auth::{AuthConfig, BcryptPasswordHasher, Hs256TokenService};
use tracing::info;

use crate::api::rest::routes::{self, ApiState};
use crate::config::StorefrontConfig;
use crate::domain::service::AppServices;
use crate::infra::storage::{OrmOrdersRepository, OrmProductsRepository, OrmUsersRepository};

pub type ConcreteAppServices =
    AppServices<OrmUsersRepository, OrmProductsRepository, OrmOrdersRepository>;

/// Wired storefront module: services over the given pool plus the REST router.
pub struct Storefront {
    state: ApiState,
}

impl Storefront {
    /// Builds the module. The schema must already be migrated.
    pub fn new(
        db: DatabaseConnection,
        config: &StorefrontConfig,
        auth: &AuthConfig,
    ) -> anyhow::Result<Self> {
        let tokens = Arc::new(Hs256TokenService::from_config(auth)?);
        let hasher = Arc::new(BcryptPasswordHasher::new(auth.bcrypt_cost)?);

        let services = Arc::new(AppServices::new(
            OrmUsersRepository,
            OrmProductsRepository,
            OrmOrdersRepository,
            db,
            hasher,
            tokens.clone(),
            config.service_config(),
        ));

        info!(
            default_page_size = config.default_page_size,
            max_page_size = config.max_page_size,
            "Storefront module initialized"
        );

        Ok(Self {
            state: ApiState::new(services, tokens),
        })
    }

    /// REST router with guards and request tracing applied.
    pub fn router(&self) -> Router {
        routes::router(self.state.clone())
    }
}
