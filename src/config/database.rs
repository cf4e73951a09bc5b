//! Database configuration module.
//!
//! Connection URLs travel in an explicit [`DatabaseConfig`] injected at store
//! construction rather than being read ambiently. Table creation uses
//! `SeaORM`'s `Schema::create_table_from_entity` so the database schema always
//! matches the entity definitions without hand-written SQL.

use crate::entities::{LedgerEntry, Order, Product, Warehouse};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use serde::Deserialize;

/// Default local database location when nothing else is configured.
const DEFAULT_DATABASE_URL: &str = "sqlite://data/stockroom.sqlite";

/// Connection settings for the relational store.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// `SeaORM` connection URL, e.g. `sqlite://data/stockroom.sqlite`
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
        }
    }
}

impl DatabaseConfig {
    /// Builds a config from the `DATABASE_URL` environment variable, falling
    /// back to the default local `SQLite` path.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
        }
    }

    /// Opens a connection to the configured database.
    pub async fn connect(&self) -> Result<DatabaseConnection> {
        Database::connect(&self.url).await.map_err(Into::into)
    }
}

/// Creates all necessary database tables from the entity definitions.
///
/// Tables are created in dependency order so foreign keys resolve: products
/// and warehouses first, then orders, then ledger entries. The ledger table
/// carries the unique index on `order_id` declared on the entity.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let product_table = schema.create_table_from_entity(Product);
    let warehouse_table = schema.create_table_from_entity(Warehouse);
    let order_table = schema.create_table_from_entity(Order);
    let ledger_table = schema.create_table_from_entity(LedgerEntry);

    db.execute(builder.build(&product_table)).await?;
    db.execute(builder.build(&warehouse_table)).await?;
    db.execute(builder.build(&order_table)).await?;
    db.execute(builder.build(&ledger_table)).await?;

    Ok(())
}
