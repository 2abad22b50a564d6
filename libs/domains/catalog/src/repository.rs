use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::CatalogResult;
use crate::models::{
    EmptyNumber, EmptyNumberRecord, SosmedService, SosmedServiceRecord, TopupProduct,
    TopupProductRecord,
};

/// Repository trait for catalog persistence
///
/// Defines the data access interface for the three product collections.
/// The catalog is create-and-read only; no update or delete exists.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Insert a top-up product, returning its generated id
    async fn create_topup(&self, input: TopupProduct) -> CatalogResult<ObjectId>;

    /// List up to `limit` top-up products
    async fn list_topup(&self, limit: i64) -> CatalogResult<Vec<TopupProductRecord>>;

    /// Insert a social-media boost service, returning its generated id
    async fn create_sosmed(&self, input: SosmedService) -> CatalogResult<ObjectId>;

    /// List up to `limit` social-media boost services
    async fn list_sosmed(&self, limit: i64) -> CatalogResult<Vec<SosmedServiceRecord>>;

    /// Insert a virtual number, returning its generated id
    async fn create_number(&self, input: EmptyNumber) -> CatalogResult<ObjectId>;

    /// List up to `limit` numbers that are still available for sale
    async fn list_available_numbers(&self, limit: i64) -> CatalogResult<Vec<EmptyNumberRecord>>;
}
