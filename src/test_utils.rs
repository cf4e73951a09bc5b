//! Shared test utilities for `Stockroom`.
//!
//! This module provides common helper functions for setting up test databases
//! and seeding the records fulfillment reads: products, warehouses, and open
//! orders. Ledger entries are deliberately absent here - in tests, as in
//! production, they are written through the store layer.

use crate::{
    config::database::create_tables,
    entities::{order, product, warehouse},
    errors::Result,
};
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
///
/// The pool is capped at a single connection so every caller, including
/// concurrent test tasks, shares the same in-memory database.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1);
    let db = Database::connect(options).await?;
    create_tables(&db).await?;
    Ok(db)
}

/// Inserts a product with the given unit price.
pub async fn create_test_product(
    db: &DatabaseConnection,
    name: &str,
    price: f64,
) -> Result<product::Model> {
    product::ActiveModel {
        name: Set(name.to_string()),
        description: Set(format!("{name} (test)")),
        price: Set(price),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Inserts a warehouse with a placeholder address.
pub async fn create_test_warehouse(
    db: &DatabaseConnection,
    name: &str,
) -> Result<warehouse::Model> {
    warehouse::ActiveModel {
        name: Set(name.to_string()),
        address: Set("1 Depot Road".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Inserts an open order (no `fulfilled_at`) for the given product.
pub async fn create_test_order(
    db: &DatabaseConnection,
    product_id: i64,
    amount: i32,
    created_at: DateTime<Utc>,
) -> Result<order::Model> {
    order::ActiveModel {
        product_id: Set(product_id),
        amount: Set(amount),
        created_at: Set(created_at),
        fulfilled_at: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Sets up a complete test environment ready to fulfill: a product priced
/// 10.0, a warehouse, and an open order for 5 units created an hour in the
/// past so requests stamped "now" pass the event-ordering check.
///
/// Returns (db, product, warehouse, order).
pub async fn setup_fulfillable_order() -> Result<(
    DatabaseConnection,
    product::Model,
    warehouse::Model,
    order::Model,
)> {
    let db = setup_test_db().await?;
    let product = create_test_product(&db, "Test Product", 10.0).await?;
    let warehouse = create_test_warehouse(&db, "Test Warehouse").await?;
    let order = create_test_order(&db, product.id, 5, Utc::now() - Duration::hours(1)).await?;
    Ok((db, product, warehouse, order))
}
