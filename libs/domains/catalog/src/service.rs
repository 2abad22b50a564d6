//! Catalog Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{
    EmptyNumber, EmptyNumberRecord, SosmedService, SosmedServiceRecord, TopupProduct,
    TopupProductRecord,
};
use crate::repository::CatalogRepository;

/// Maximum number of documents returned by a catalog listing
const LIST_LIMIT: i64 = 100;

/// Catalog service providing validation and list limits on top of the
/// repository. Validation always runs before any store access.
pub struct CatalogService<R: CatalogRepository> {
    repository: Arc<R>,
}

impl<R: CatalogRepository> CatalogService<R> {
    /// Create a new CatalogService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new top-up product
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_topup(&self, input: TopupProduct) -> CatalogResult<mongodb::bson::oid::ObjectId> {
        input
            .validate()
            .map_err(|e| CatalogError::Validation(e.to_string()))?;

        self.repository.create_topup(input).await
    }

    /// List top-up products
    #[instrument(skip(self))]
    pub async fn list_topup(&self) -> CatalogResult<Vec<TopupProductRecord>> {
        self.repository.list_topup(LIST_LIMIT).await
    }

    /// Create a new social-media boost service
    #[instrument(skip(self, input), fields(service_name = %input.name))]
    pub async fn create_sosmed(&self, input: SosmedService) -> CatalogResult<mongodb::bson::oid::ObjectId> {
        input
            .validate()
            .map_err(|e| CatalogError::Validation(e.to_string()))?;

        self.repository.create_sosmed(input).await
    }

    /// List social-media boost services
    #[instrument(skip(self))]
    pub async fn list_sosmed(&self) -> CatalogResult<Vec<SosmedServiceRecord>> {
        self.repository.list_sosmed(LIST_LIMIT).await
    }

    /// Create a new virtual number
    #[instrument(skip(self, input))]
    pub async fn create_number(&self, input: EmptyNumber) -> CatalogResult<mongodb::bson::oid::ObjectId> {
        input
            .validate()
            .map_err(|e| CatalogError::Validation(e.to_string()))?;

        self.repository.create_number(input).await
    }

    /// List numbers still available for sale
    #[instrument(skip(self))]
    pub async fn list_numbers(&self) -> CatalogResult<Vec<EmptyNumberRecord>> {
        self.repository.list_available_numbers(LIST_LIMIT).await
    }
}

impl<R: CatalogRepository> Clone for CatalogService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockCatalogRepository;
    use mongodb::bson::oid::ObjectId;

    fn valid_topup() -> TopupProduct {
        TopupProduct {
            name: "ML 86 Diamonds".to_string(),
            game: "Mobile Legends".to_string(),
            amount: 86,
            price: 20000.0,
            is_active: true,
        }
    }

    #[tokio::test]
    async fn test_create_topup_inserts_valid_product() {
        let mut mock_repo = MockCatalogRepository::new();
        let id = ObjectId::new();

        mock_repo
            .expect_create_topup()
            .returning(move |_| Ok(id))
            .times(1);

        let service = CatalogService::new(mock_repo);
        let created = service.create_topup(valid_topup()).await.unwrap();
        assert_eq!(created, id);
    }

    #[tokio::test]
    async fn test_create_topup_rejects_invalid_amount_before_store_access() {
        let mut mock_repo = MockCatalogRepository::new();
        // The repository must never be reached for an invalid payload
        mock_repo.expect_create_topup().times(0);

        let service = CatalogService::new(mock_repo);
        let result = service
            .create_topup(TopupProduct {
                amount: 0,
                ..valid_topup()
            })
            .await;

        assert!(matches!(result, Err(CatalogError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_sosmed_rejects_negative_price() {
        let mut mock_repo = MockCatalogRepository::new();
        mock_repo.expect_create_sosmed().times(0);

        let service = CatalogService::new(mock_repo);
        let result = service
            .create_sosmed(SosmedService {
                name: "Instagram Followers +100".to_string(),
                platform: "instagram".to_string(),
                unit: crate::models::SosmedUnit::Followers,
                quantity: 100,
                price: -5.0,
                is_active: true,
            })
            .await;

        assert!(matches!(result, Err(CatalogError::Validation(_))));
    }

    #[tokio::test]
    async fn test_list_topup_uses_catalog_limit() {
        let mut mock_repo = MockCatalogRepository::new();
        mock_repo
            .expect_list_topup()
            .with(mockall::predicate::eq(100i64))
            .returning(|_| Ok(vec![]))
            .times(1);

        let service = CatalogService::new(mock_repo);
        assert!(service.list_topup().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_numbers_queries_available_only() {
        let mut mock_repo = MockCatalogRepository::new();
        mock_repo
            .expect_list_available_numbers()
            .with(mockall::predicate::eq(100i64))
            .returning(|_| Ok(vec![]))
            .times(1);

        let service = CatalogService::new(mock_repo);
        assert!(service.list_numbers().await.unwrap().is_empty());
    }
}
