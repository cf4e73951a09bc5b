//! Ledger entry entity - Append-only record of fulfilled orders.
//!
//! One row is the durable witness that an order was fulfilled: which
//! warehouse received it, what was delivered, and the total price computed at
//! fulfillment time. Rows are only ever inserted, never updated or deleted.
//! The unique index on `order_id` is what makes "at most one fulfillment per
//! order" hold even when two requests race on the same order.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Ledger entry database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ledger_entries")]
pub struct Model {
    /// Unique identifier for the ledger entry
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Warehouse the product was delivered to
    pub warehouse_id: i64,
    /// Delivered product
    pub product_id: i64,
    /// Fulfilled order; unique so an order can be fulfilled at most once
    #[sea_orm(unique)]
    pub order_id: i64,
    /// Delivered quantity, equal to the order's amount
    pub amount: i32,
    /// Product unit price times the order amount, fixed at fulfillment time
    pub total_price: f64,
    /// When the fulfillment was recorded
    pub created_at: DateTimeUtc,
}

/// Defines relationships between LedgerEntry and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Destination warehouse
    #[sea_orm(
        belongs_to = "super::warehouse::Entity",
        from = "Column::WarehouseId",
        to = "super::warehouse::Column::Id"
    )]
    Warehouse,
    /// Delivered product
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id"
    )]
    Product,
    /// The order this entry fulfilled
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id"
    )]
    Order,
}

impl Related<super::warehouse::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Warehouse.def()
    }
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
