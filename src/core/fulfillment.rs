//! Fulfillment workflow - decides whether a request may fulfill an order and
//! applies the resulting writes atomically.
//!
//! The workflow performs no I/O of its own beyond the store layer: it reads
//! the product, warehouse, order, and ledger state, evaluates the
//! preconditions in a fixed sequence, and on success hands the write pair to
//! [`crate::db::ledger::record_fulfillment`]. Every rejection is a typed
//! error with no side effects, so callers may safely retry the whole call
//! after an infrastructure failure.

use crate::{
    db,
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use tracing::info;

/// A request to fulfill an open order by delivering a product to a warehouse.
#[derive(Debug, Clone, PartialEq)]
pub struct FulfillmentRequest {
    /// Product to deliver
    pub product_id: i64,
    /// Destination warehouse
    pub warehouse_id: i64,
    /// Requested quantity; must exactly match an open order's amount
    pub amount: i32,
    /// Client-supplied time the request was made. Used only to check event
    /// ordering against the order's creation time; the fulfillment instant
    /// itself is always server-assigned.
    pub created_at: DateTime<Utc>,
}

/// Validates a fulfillment request and, when every check passes, marks the
/// matching order fulfilled and appends a ledger entry in one transaction.
///
/// Preconditions are checked in order, each with its own error variant:
/// positive amount, product exists, warehouse exists, an order matches the
/// (product, amount) pair, the order predates the request, and the order has
/// no ledger entry yet. Returns the id of the new ledger entry.
pub async fn fulfill_order(db: &DatabaseConnection, request: &FulfillmentRequest) -> Result<i64> {
    if request.amount <= 0 {
        return Err(Error::InvalidAmount {
            amount: request.amount,
        });
    }

    let product = db::products::get_product_by_id(db, request.product_id)
        .await?
        .ok_or(Error::ProductNotFound {
            id: request.product_id,
        })?;

    db::warehouses::get_warehouse_by_id(db, request.warehouse_id)
        .await?
        .ok_or(Error::WarehouseNotFound {
            id: request.warehouse_id,
        })?;

    let order =
        db::orders::find_order_by_product_and_amount(db, request.product_id, request.amount)
            .await?
            .ok_or(Error::OrderNotFound {
                product_id: request.product_id,
                amount: request.amount,
            })?;

    // Sanity check on event ordering: an order created at or after the
    // request time cannot be the one the request meant.
    if order.created_at >= request.created_at {
        return Err(Error::StaleRequest { order_id: order.id });
    }

    if db::ledger::get_entry_for_order(db, order.id)
        .await?
        .is_some()
    {
        return Err(Error::AlreadyFulfilled { order_id: order.id });
    }

    // The order lookup was keyed on the requested amount, so pricing off the
    // order's amount and recording the request's amount agree by
    // construction.
    let total_price = product.price * f64::from(order.amount);
    let now = Utc::now();

    let entry_id = db::ledger::record_fulfillment(
        db,
        now,
        db::ledger::NewLedgerEntry {
            warehouse_id: request.warehouse_id,
            product_id: product.id,
            order_id: order.id,
            amount: request.amount,
            total_price,
        },
    )
    .await?;

    info!(
        order_id = order.id,
        ledger_entry_id = entry_id,
        total_price,
        "order fulfilled"
    );

    Ok(entry_id)
}
