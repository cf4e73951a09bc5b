//! Order lookups.
//!
//! Orders are created upstream; fulfillment only reads them here and stamps
//! `fulfilled_at` inside the ledger transaction.

use crate::{
    entities::{Order, order},
    errors::Result,
};
use sea_orm::{ConnectionTrait, QueryOrder, prelude::*};

/// Finds the order a fulfillment request targets, matched by product and
/// exact amount.
///
/// Several orders can share the same (product, amount) pair. The earliest
/// `created_at` wins, ties broken by lowest id, so repeated calls always see
/// the same order rather than whichever row the store happens to return
/// first.
pub async fn find_order_by_product_and_amount<C>(
    db: &C,
    product_id: i64,
    amount: i32,
) -> Result<Option<order::Model>>
where
    C: ConnectionTrait,
{
    Order::find()
        .filter(order::Column::ProductId.eq(product_id))
        .filter(order::Column::Amount.eq(amount))
        .order_by_asc(order::Column::CreatedAt)
        .order_by_asc(order::Column::Id)
        .one(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use chrono::{Duration, Utc};

    #[tokio::test]
    async fn test_find_order_by_product_and_amount() -> Result<()> {
        let db = setup_test_db().await?;
        let product = create_test_product(&db, "Crate", 4.0).await?;
        let order = create_test_order(&db, product.id, 12, Utc::now()).await?;

        let found = find_order_by_product_and_amount(&db, product.id, 12).await?;
        assert!(found.is_some());
        assert_eq!(found.unwrap().id, order.id);

        Ok(())
    }

    #[tokio::test]
    async fn test_no_match_on_different_amount() -> Result<()> {
        let db = setup_test_db().await?;
        let product = create_test_product(&db, "Crate", 4.0).await?;
        create_test_order(&db, product.id, 12, Utc::now()).await?;

        // Same product, wrong amount
        let found = find_order_by_product_and_amount(&db, product.id, 13).await?;
        assert!(found.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_no_match_on_different_product() -> Result<()> {
        let db = setup_test_db().await?;
        let product = create_test_product(&db, "Crate", 4.0).await?;
        let other = create_test_product(&db, "Barrel", 9.0).await?;
        create_test_order(&db, product.id, 12, Utc::now()).await?;

        let found = find_order_by_product_and_amount(&db, other.id, 12).await?;
        assert!(found.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_earliest_created_order_wins() -> Result<()> {
        let db = setup_test_db().await?;
        let product = create_test_product(&db, "Crate", 4.0).await?;

        let now = Utc::now();
        // Insert the newer order first so insertion order disagrees with
        // creation order
        let newer = create_test_order(&db, product.id, 12, now).await?;
        let older = create_test_order(&db, product.id, 12, now - Duration::hours(2)).await?;
        assert!(newer.id < older.id);

        let found = find_order_by_product_and_amount(&db, product.id, 12)
            .await?
            .unwrap();
        assert_eq!(found.id, older.id);

        Ok(())
    }
}
