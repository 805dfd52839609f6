#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, EntityTrait, Set};
use storefront_auth::password::MIN_COST;
use storefront_auth::{AuthConfig, BcryptPasswordHasher, Hs256TokenService};
use storefront_sdk::{NewProduct, Product, User};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::config::DatabaseConfig;
use crate::domain::service::{AppServices, ServiceConfig};
use crate::infra::storage::{
    OrmOrdersRepository, OrmProductsRepository, OrmUsersRepository, connect, run_migrations,
};
use crate::module::ConcreteAppServices;

pub const TEST_SECRET: &str = "storefront-test-secret";

/// Create an in-memory database with the schema applied.
pub async fn inmem_db() -> DatabaseConnection {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".to_owned(),
        max_conns: 1,
        min_conns: 1,
        connect_timeout_secs: 5,
    };
    let db = connect(&cfg)
        .await
        .expect("Failed to connect to in-memory database");
    run_migrations(&db).await.expect("Failed to run migrations");
    db
}

pub fn token_service() -> Arc<Hs256TokenService> {
    Arc::new(Hs256TokenService::from_config(&AuthConfig::with_secret(TEST_SECRET)).unwrap())
}

pub fn build_services(db: DatabaseConnection, config: ServiceConfig) -> ConcreteAppServices {
    AppServices::new(
        OrmUsersRepository,
        OrmProductsRepository,
        OrmOrdersRepository,
        db,
        Arc::new(BcryptPasswordHasher::new(MIN_COST).unwrap()),
        token_service(),
        config,
    )
}

pub async fn test_services() -> (DatabaseConnection, ConcreteAppServices) {
    let db = inmem_db().await;
    let services = build_services(db.clone(), ServiceConfig::default());
    (db, services)
}

pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Inserts a user row directly; the password hash is not a real bcrypt hash.
pub async fn seed_user(db: &DatabaseConnection, email: &str, is_admin: bool) -> User {
    use crate::infra::storage::entity::user::{ActiveModel, Entity};

    let now = OffsetDateTime::now_utc();
    let id = Uuid::now_v7();
    let row = ActiveModel {
        id: Set(id),
        name: Set(email.split('@').next().unwrap_or(email).to_owned()),
        email: Set(email.to_owned()),
        password: Set("not-a-hash".to_owned()),
        is_admin: Set(is_admin),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Entity::insert(row)
        .exec_without_returning(db)
        .await
        .expect("Failed to seed user");

    User {
        id,
        name: email.split('@').next().unwrap_or(email).to_owned(),
        email: email.to_owned(),
        is_admin,
        created_at: now,
        updated_at: now,
    }
}

pub async fn seed_product(
    services: &ConcreteAppServices,
    name: &str,
    price: &str,
    stock: i32,
    category: &str,
) -> Product {
    services
        .products
        .create_product(NewProduct {
            name: name.to_owned(),
            description: Some(format!("{name} description")),
            price: dec(price),
            stock,
            category: category.to_owned(),
        })
        .await
        .expect("Failed to seed product")
}
