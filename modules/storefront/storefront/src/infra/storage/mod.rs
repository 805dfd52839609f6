//! `SeaORM` persistence: entities, migrations and repository implementations.

use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::config::DatabaseConfig;

pub mod entity;
mod mapper;
pub mod migrations;
mod orders_repo;
mod products_repo;
mod users_repo;

pub use orders_repo::OrmOrdersRepository;
pub use products_repo::OrmProductsRepository;
pub use users_repo::OrmUsersRepository;

/// Opens the connection pool described by `cfg`.
pub async fn connect(cfg: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opts = ConnectOptions::new(cfg.url.clone());
    opts.max_connections(cfg.max_conns)
        .min_connections(cfg.min_conns)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .sqlx_logging(false);

    let db = Database::connect(opts).await?;
    info!(backend = ?db.get_database_backend(), "Database connected");
    Ok(db)
}

/// Applies every pending migration.
pub async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    migrations::Migrator::up(db, None).await?;
    info!("Database migrations applied");
    Ok(())
}
