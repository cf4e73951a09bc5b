//! Warehouse entity - Represents delivery destinations.
//!
//! The fulfillment workflow only ever checks that a warehouse exists before
//! recording a ledger entry against it.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Warehouse database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "warehouses")]
pub struct Model {
    /// Unique identifier for the warehouse
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name of the warehouse
    pub name: String,
    /// Street address
    pub address: String,
}

/// Defines relationships between Warehouse and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Fulfillments recorded against this warehouse
    #[sea_orm(has_many = "super::ledger_entry::Entity")]
    LedgerEntry,
}

impl Related<super::ledger_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LedgerEntry.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
