//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod ledger_entry;
pub mod order;
pub mod product;
pub mod warehouse;

// Re-export specific types to avoid conflicts
pub use ledger_entry::{
    Column as LedgerEntryColumn, Entity as LedgerEntry, Model as LedgerEntryModel,
};
pub use order::{Column as OrderColumn, Entity as Order, Model as OrderModel};
pub use product::{Column as ProductColumn, Entity as Product, Model as ProductModel};
pub use warehouse::{Column as WarehouseColumn, Entity as Warehouse, Model as WarehouseModel};
