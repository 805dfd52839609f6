//! Storefront module: accounts, product catalog and order placement.
//!
//! Layout follows the usual module split:
//! - `domain` holds services, repository traits and errors,
//! - `infra` holds the `SeaORM` entities, migrations and repositories,
//! - `api` holds the REST surface (DTOs, guards, handlers, router).

pub mod api;
pub mod config;
pub mod domain;
pub mod infra;
pub mod module;

#[cfg(test)]
mod test_support;

pub use config::{DatabaseConfig, StorefrontConfig};
pub use module::Storefront;
pub use storefront_sdk as sdk;
