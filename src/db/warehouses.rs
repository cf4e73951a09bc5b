//! Warehouse lookups.

use crate::{
    entities::{Warehouse, warehouse},
    errors::Result,
};
use sea_orm::{ConnectionTrait, prelude::*};

/// Retrieves a warehouse by its unique ID, returning `None` when it does not
/// exist. Existence is the only fact fulfillment needs about a warehouse.
pub async fn get_warehouse_by_id<C>(db: &C, warehouse_id: i64) -> Result<Option<warehouse::Model>>
where
    C: ConnectionTrait,
{
    Warehouse::find_by_id(warehouse_id)
        .one(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_get_warehouse_by_id() -> Result<()> {
        let db = setup_test_db().await?;
        let warehouse = create_test_warehouse(&db, "North Depot").await?;

        let found = get_warehouse_by_id(&db, warehouse.id).await?;
        assert!(found.is_some());
        assert_eq!(found.unwrap().name, "North Depot");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_warehouse_by_id_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        let found = get_warehouse_by_id(&db, 999).await?;
        assert!(found.is_none());

        Ok(())
    }
}
