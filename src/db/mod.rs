//! Store layer - relational lookups and the fulfillment write transaction.
//!
//! The fulfillment workflow talks to the database exclusively through these
//! functions, so tests can swap in `MockDatabase` or an in-memory `SQLite`
//! store without touching the decision logic. Reads are plain lookups; the
//! only write path is [`ledger::record_fulfillment`], which keeps the order
//! update and the ledger insert in one transaction.

pub mod ledger;
pub mod orders;
pub mod products;
pub mod warehouses;

pub use ledger::{NewLedgerEntry, get_entry_for_order, record_fulfillment};
pub use orders::find_order_by_product_and_amount;
pub use products::get_product_by_id;
pub use warehouses::get_warehouse_by_id;
