use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::OrderResult;
use crate::models::{CreateOrder, OrderCategory, OrderRecord, PricedProduct};

/// Repository trait for order persistence
///
/// Orders are create-and-read only; no update or delete exists.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert an order with its final total, returning the generated id
    async fn create(&self, input: CreateOrder, total_price: f64) -> OrderResult<ObjectId>;

    /// List up to `limit` orders
    async fn list(&self, limit: i64) -> OrderResult<Vec<OrderRecord>>;
}

/// Read-only product access used for server-side order pricing
///
/// Kept separate from [`OrderRepository`] so pricing can be mocked
/// independently of order persistence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductLookup: Send + Sync {
    /// Fetch the price view of a product by (category, id).
    ///
    /// Returns `Ok(None)` when no such document exists.
    async fn find_priced(
        &self,
        category: OrderCategory,
        id: ObjectId,
    ) -> OrderResult<Option<PricedProduct>>;
}
