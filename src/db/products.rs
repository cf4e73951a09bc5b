//! Product lookups.

use crate::{
    entities::{Product, product},
    errors::Result,
};
use sea_orm::{ConnectionTrait, prelude::*};

/// Retrieves a product by its unique ID, returning `None` when it does not
/// exist. Products are read-only inputs to fulfillment.
pub async fn get_product_by_id<C>(db: &C, product_id: i64) -> Result<Option<product::Model>>
where
    C: ConnectionTrait,
{
    Product::find_by_id(product_id)
        .one(db)
        .await
        .map_err(Into::into)
}
