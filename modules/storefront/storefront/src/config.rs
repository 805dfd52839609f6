use serde::Deserialize;

use crate::domain::service::ServiceConfig;

/// Catalog and order-history paging settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorefrontConfig {
    /// Page size used when a listing request carries no `limit`.
    pub default_page_size: u64,
    /// Upper bound applied to every requested page size.
    pub max_page_size: u64,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: 50,
        }
    }
}

impl StorefrontConfig {
    #[must_use]
    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            default_page_size: self.default_page_size,
            max_page_size: self.max_page_size,
        }
    }
}

/// Relational store connection settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    /// `SeaORM` connection URL, e.g. `postgres://...` or `sqlite://storefront.db?mode=rwc`.
    pub url: String,
    pub max_conns: u32,
    pub min_conns: u32,
    pub connect_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://storefront.db?mode=rwc".to_owned(),
            max_conns: 10,
            min_conns: 1,
            connect_timeout_secs: 10,
        }
    }
}
