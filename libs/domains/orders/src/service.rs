//! Order Service - Business logic layer
//!
//! Owns the server-side pricing rule: a caller-supplied `total_price` is
//! trusted verbatim; when absent, the referenced product is resolved and
//! the total derived as `price * quantity`.

use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{OrderError, OrderResult};
use crate::models::{CreateOrder, OrderListQuery, OrderReceipt, OrderRecord, OrderStatus};
use crate::repository::{OrderRepository, ProductLookup};

/// Order service combining order persistence with product lookup
pub struct OrderService<R: OrderRepository, P: ProductLookup> {
    repository: Arc<R>,
    products: Arc<P>,
}

impl<R: OrderRepository, P: ProductLookup> OrderService<R, P> {
    /// Create a new OrderService
    pub fn new(repository: R, products: P) -> Self {
        Self {
            repository: Arc::new(repository),
            products: Arc::new(products),
        }
    }

    /// Create an order, deriving the total server-side when the caller
    /// did not supply one
    #[instrument(skip(self, input), fields(category = %input.category, product_id = %input.product_id))]
    pub async fn create_order(&self, input: CreateOrder) -> OrderResult<OrderReceipt> {
        input
            .validate()
            .map_err(|e| OrderError::Validation(e.to_string()))?;

        let total_price = match input.total_price {
            Some(total) => total,
            None => self.derive_total(&input).await?,
        };

        let id = self.repository.create(input, total_price).await?;

        Ok(OrderReceipt {
            id: id.to_hex(),
            status: OrderStatus::Pending,
            total_price,
        })
    }

    async fn derive_total(&self, input: &CreateOrder) -> OrderResult<f64> {
        let product_id = ObjectId::parse_str(&input.product_id)
            .map_err(|_| OrderError::InvalidProductId(input.product_id.clone()))?;

        let product = self
            .products
            .find_priced(input.category, product_id)
            .await?
            .ok_or(OrderError::ProductNotFound)?;

        let price = product.price.ok_or_else(|| {
            tracing::warn!(
                category = %input.category,
                product_id = %input.product_id,
                "Product document has no usable numeric price, rejecting order"
            );
            OrderError::UnpricedProduct(format!(
                "product {} has no usable price",
                input.product_id
            ))
        })?;

        Ok(price * input.quantity as f64)
    }

    /// List stored orders
    #[instrument(skip(self))]
    pub async fn list_orders(&self, query: OrderListQuery) -> OrderResult<Vec<OrderRecord>> {
        self.repository.list(query.limit).await
    }
}

impl<R: OrderRepository, P: ProductLookup> Clone for OrderService<R, P> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            products: Arc::clone(&self.products),
        }
    }
}
