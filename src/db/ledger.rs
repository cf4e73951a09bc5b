//! Fulfillment ledger access.
//!
//! Ledger entries are append-only: one row is the durable witness that an
//! order was fulfilled. [`record_fulfillment`] is the only write path in the
//! crate and keeps the order update and the ledger insert in a single
//! transaction; the two writes are never callable separately.

use crate::{
    entities::{LedgerEntry, Order, ledger_entry, order},
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{ConnectionTrait, DatabaseConnection, Set, SqlErr, TransactionTrait, prelude::*};
use tracing::debug;

/// Field values for a ledger entry about to be written.
///
/// Assembled by the workflow from the request and the records it matched;
/// `created_at` is stamped by [`record_fulfillment`] so the ledger entry and
/// the order's `fulfilled_at` carry the same instant.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLedgerEntry {
    /// Destination warehouse
    pub warehouse_id: i64,
    /// Delivered product
    pub product_id: i64,
    /// The order being fulfilled
    pub order_id: i64,
    /// Delivered quantity
    pub amount: i32,
    /// Unit price times order amount, computed at fulfillment time
    pub total_price: f64,
}

/// Retrieves the ledger entry recorded for an order, if any.
pub async fn get_entry_for_order<C>(db: &C, order_id: i64) -> Result<Option<ledger_entry::Model>>
where
    C: ConnectionTrait,
{
    LedgerEntry::find()
        .filter(ledger_entry::Column::OrderId.eq(order_id))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Stamps the order fulfilled and appends its ledger entry as one atomic
/// unit, returning the new entry's id.
///
/// Both writes commit together or not at all. The order update is guarded on
/// `fulfilled_at IS NULL` and the ledger table carries a unique index on
/// `order_id`, so when two callers race on the same order exactly one commit
/// wins; the loser rolls back and surfaces [`Error::AlreadyFulfilled`]. Any
/// other store failure rolls back and propagates as [`Error::Database`].
pub async fn record_fulfillment(
    db: &DatabaseConnection,
    fulfilled_at: DateTime<Utc>,
    entry: NewLedgerEntry,
) -> Result<i64> {
    let txn = db.begin().await?;

    let updated = Order::update_many()
        .col_expr(order::Column::FulfilledAt, Expr::value(fulfilled_at))
        .filter(order::Column::Id.eq(entry.order_id))
        .filter(order::Column::FulfilledAt.is_null())
        .exec(&txn)
        .await?;

    if updated.rows_affected == 0 {
        // The order was fulfilled between our precondition check and now
        debug!(order_id = entry.order_id, "order already stamped, aborting");
        txn.rollback().await?;
        return Err(Error::AlreadyFulfilled {
            order_id: entry.order_id,
        });
    }

    let ledger_row = ledger_entry::ActiveModel {
        warehouse_id: Set(entry.warehouse_id),
        product_id: Set(entry.product_id),
        order_id: Set(entry.order_id),
        amount: Set(entry.amount),
        total_price: Set(entry.total_price),
        created_at: Set(fulfilled_at),
        ..Default::default()
    };

    let inserted = match LedgerEntry::insert(ledger_row).exec(&txn).await {
        Ok(inserted) => inserted,
        Err(err) => {
            let conflict = matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)));
            txn.rollback().await?;
            return Err(if conflict {
                Error::AlreadyFulfilled {
                    order_id: entry.order_id,
                }
            } else {
                err.into()
            });
        }
    };

    txn.commit().await?;
    Ok(inserted.last_insert_id)
}
