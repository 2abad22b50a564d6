//! MongoDB implementations of order persistence and product lookup

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Bson, Document, doc};
use mongodb::{Collection, Database};
use tracing::instrument;

use crate::ORDER_COLLECTION;
use crate::error::{OrderError, OrderResult};
use crate::models::{CreateOrder, OrderCategory, OrderRecord, PricedProduct};
use crate::repository::{OrderRepository, ProductLookup};

/// MongoDB implementation of the OrderRepository
///
/// The order document is the creation payload plus the final
/// `total_price`; absent optional fields are not stored at all.
pub struct MongoOrderRepository {
    db: Database,
}

impl MongoOrderRepository {
    /// Create a new MongoOrderRepository
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderRepository for MongoOrderRepository {
    #[instrument(skip(self, input), fields(category = %input.category, total_price))]
    async fn create(&self, input: CreateOrder, total_price: f64) -> OrderResult<ObjectId> {
        let mut document = mongodb::bson::to_document(&input)
            .map_err(|e| OrderError::Internal(format!("order serialization failed: {}", e)))?;
        document.insert("total_price", total_price);

        let collection: Collection<Document> = self.db.collection(ORDER_COLLECTION);
        let result = collection.insert_one(document).await?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            OrderError::Internal(format!(
                "insert into '{}' did not return an ObjectId",
                ORDER_COLLECTION
            ))
        })?;

        tracing::info!(order_id = %id, "Order created");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn list(&self, limit: i64) -> OrderResult<Vec<OrderRecord>> {
        let collection: Collection<OrderRecord> = self.db.collection(ORDER_COLLECTION);
        let cursor = collection.find(doc! {}).limit(limit).await?;
        let orders: Vec<OrderRecord> = cursor.try_collect().await?;
        Ok(orders)
    }
}

/// MongoDB implementation of ProductLookup
///
/// Reads raw documents rather than the catalog record types so a product
/// with a missing or non-numeric `price` field surfaces as
/// `PricedProduct { price: None }` instead of a deserialization error.
pub struct MongoProductLookup {
    db: Database,
}

impl MongoProductLookup {
    /// Create a new MongoProductLookup
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductLookup for MongoProductLookup {
    #[instrument(skip(self), fields(category = %category, product_id = %id))]
    async fn find_priced(
        &self,
        category: OrderCategory,
        id: ObjectId,
    ) -> OrderResult<Option<PricedProduct>> {
        let collection: Collection<Document> = self.db.collection(category.collection_name());
        let document = collection.find_one(doc! { "_id": id }).await?;

        Ok(document.map(|doc| PricedProduct {
            price: numeric_price(&doc),
        }))
    }
}

/// Extract a numeric `price` from a raw product document.
///
/// Integer prices occur when documents were written by other tooling,
/// so Int32 and Int64 are accepted alongside Double.
fn numeric_price(document: &Document) -> Option<f64> {
    match document.get("price") {
        Some(Bson::Double(value)) => Some(*value),
        Some(Bson::Int32(value)) => Some(f64::from(*value)),
        Some(Bson::Int64(value)) => Some(*value as f64),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrderStatus;

    #[test]
    fn test_numeric_price_accepts_double_and_integers() {
        assert_eq!(numeric_price(&doc! { "price": 20000.0 }), Some(20000.0));
        assert_eq!(numeric_price(&doc! { "price": 5000i32 }), Some(5000.0));
        assert_eq!(numeric_price(&doc! { "price": 5000i64 }), Some(5000.0));
    }

    #[test]
    fn test_numeric_price_rejects_missing_or_non_numeric() {
        assert_eq!(numeric_price(&doc! { "name": "no price" }), None);
        assert_eq!(numeric_price(&doc! { "price": "20000" }), None);
        assert_eq!(numeric_price(&doc! { "price": Bson::Null }), None);
    }

    async fn test_database() -> Database {
        let url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let client = mongodb::Client::with_uri_str(&url).await.unwrap();
        client.database("topup_test")
    }

    fn sample_order() -> CreateOrder {
        CreateOrder {
            category: OrderCategory::Topup,
            product_id: ObjectId::new().to_hex(),
            quantity: 2,
            target: "uid123".to_string(),
            contact_email: None,
            note: None,
            status: OrderStatus::Pending,
            total_price: None,
        }
    }

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_create_then_list_orders() {
        let db = test_database().await;
        let repo = MongoOrderRepository::new(db);

        let id = repo.create(sample_order(), 40000.0).await.unwrap();

        let listed = repo.list(50).await.unwrap();
        let stored = listed.iter().find(|o| o.id == id).unwrap();
        assert_eq!(stored.total_price, 40000.0);
        assert_eq!(stored.quantity, 2);
    }

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_list_caps_results_at_limit() {
        let db = test_database().await;
        let repo = MongoOrderRepository::new(db);

        repo.create(sample_order(), 40000.0).await.unwrap();
        repo.create(sample_order(), 40000.0).await.unwrap();

        let listed = repo.list(1).await.unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_find_priced_reads_category_collection() {
        let db = test_database().await;

        let products: Collection<Document> =
            db.collection(OrderCategory::Topup.collection_name());
        let inserted = products
            .insert_one(doc! { "name": "ML 86 Diamonds", "price": 20000.0 })
            .await
            .unwrap();
        let product_id = inserted.inserted_id.as_object_id().unwrap();

        let lookup = MongoProductLookup::new(db);
        let priced = lookup
            .find_priced(OrderCategory::Topup, product_id)
            .await
            .unwrap();
        assert_eq!(priced, Some(PricedProduct { price: Some(20000.0) }));

        let missing = lookup
            .find_priced(OrderCategory::Sosmed, ObjectId::new())
            .await
            .unwrap();
        assert_eq!(missing, None);
    }
}
