//! Order entity - Represents requests to move an amount of a product.
//!
//! Orders are created upstream and arrive here open (`fulfilled_at` unset).
//! The fulfillment workflow mutates an order exactly once, transitioning
//! `fulfilled_at` from `None` to the fulfillment instant; it is never cleared
//! or moved earlier afterwards.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Order database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    /// Unique identifier for the order
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the ordered product
    pub product_id: i64,
    /// Ordered quantity, always positive
    pub amount: i32,
    /// When the order was placed
    pub created_at: DateTimeUtc,
    /// When the order was fulfilled; `None` while the order is open
    pub fulfilled_at: Option<DateTimeUtc>,
}

/// Defines relationships between Order and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each order is for one product
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id"
    )]
    Product,
    /// At most one ledger entry witnesses the fulfillment
    #[sea_orm(has_many = "super::ledger_entry::Entity")]
    LedgerEntry,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl Related<super::ledger_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LedgerEntry.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
