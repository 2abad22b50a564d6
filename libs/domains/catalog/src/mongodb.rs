//! MongoDB implementation of CatalogRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Document, doc};
use mongodb::{Collection, Database};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{
    EmptyNumber, EmptyNumberRecord, SosmedService, SosmedServiceRecord, TopupProduct,
    TopupProductRecord,
};
use crate::repository::CatalogRepository;
use crate::{NUMBER_COLLECTION, SOSMED_COLLECTION, TOPUP_COLLECTION};

/// MongoDB implementation of the CatalogRepository
///
/// Holds the database handle and addresses the three product collections
/// by name. Documents are inserted without an `_id`, letting the server
/// generate one; reads deserialize `_id` into the record's `id` field.
pub struct MongoCatalogRepository {
    db: Database,
}

impl MongoCatalogRepository {
    /// Create a new MongoCatalogRepository
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let db = client.database("topup");
    /// let repo = MongoCatalogRepository::new(db);
    /// ```
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    async fn insert<T: Serialize + Send + Sync>(
        &self,
        collection_name: &str,
        document: &T,
    ) -> CatalogResult<ObjectId> {
        let collection: Collection<T> = self.db.collection(collection_name);
        let result = collection.insert_one(document).await?;

        result.inserted_id.as_object_id().ok_or_else(|| {
            CatalogError::Internal(format!(
                "insert into '{}' did not return an ObjectId",
                collection_name
            ))
        })
    }

    async fn find<T: DeserializeOwned + Send + Sync>(
        &self,
        collection_name: &str,
        filter: Document,
        limit: i64,
    ) -> CatalogResult<Vec<T>> {
        let collection: Collection<T> = self.db.collection(collection_name);
        let cursor = collection.find(filter).limit(limit).await?;
        let records: Vec<T> = cursor.try_collect().await?;
        Ok(records)
    }
}

#[async_trait]
impl CatalogRepository for MongoCatalogRepository {
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    async fn create_topup(&self, input: TopupProduct) -> CatalogResult<ObjectId> {
        let id = self.insert(TOPUP_COLLECTION, &input).await?;
        tracing::info!(product_id = %id, "Top-up product created");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn list_topup(&self, limit: i64) -> CatalogResult<Vec<TopupProductRecord>> {
        self.find(TOPUP_COLLECTION, doc! {}, limit).await
    }

    #[instrument(skip(self, input), fields(service_name = %input.name))]
    async fn create_sosmed(&self, input: SosmedService) -> CatalogResult<ObjectId> {
        let id = self.insert(SOSMED_COLLECTION, &input).await?;
        tracing::info!(service_id = %id, "Sosmed service created");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn list_sosmed(&self, limit: i64) -> CatalogResult<Vec<SosmedServiceRecord>> {
        self.find(SOSMED_COLLECTION, doc! {}, limit).await
    }

    #[instrument(skip(self, input), fields(number = %input.number))]
    async fn create_number(&self, input: EmptyNumber) -> CatalogResult<ObjectId> {
        let id = self.insert(NUMBER_COLLECTION, &input).await?;
        tracing::info!(number_id = %id, "Empty number created");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn list_available_numbers(&self, limit: i64) -> CatalogResult<Vec<EmptyNumberRecord>> {
        // Sold-out numbers are never listed
        self.find(NUMBER_COLLECTION, doc! { "available": true }, limit)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_repository() -> MongoCatalogRepository {
        let url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let client = mongodb::Client::with_uri_str(&url).await.unwrap();
        MongoCatalogRepository::new(client.database("topup_test"))
    }

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_create_then_list_topup() {
        let repo = test_repository().await;

        let id = repo
            .create_topup(TopupProduct {
                name: "ML 86 Diamonds".to_string(),
                game: "Mobile Legends".to_string(),
                amount: 86,
                price: 20000.0,
                is_active: true,
            })
            .await
            .unwrap();

        let listed = repo.list_topup(100).await.unwrap();
        assert!(listed.iter().any(|p| p.id == id && p.amount == 86));
    }

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_unavailable_numbers_are_not_listed() {
        let repo = test_repository().await;

        repo.create_number(EmptyNumber {
            provider: "Telkomsel".to_string(),
            country: "ID".to_string(),
            number: "+62812xxxx999".to_string(),
            price: 5000.0,
            available: false,
        })
        .await
        .unwrap();

        let listed = repo.list_available_numbers(100).await.unwrap();
        assert!(listed.iter().all(|n| n.available));
    }
}
