//! Catalog Domain
//!
//! Domain implementation for the three product kinds sold by the service:
//! game top-up products, social-media boost packages, and virtual phone
//! numbers. Each kind is independently persisted in its own MongoDB
//! collection and supports exactly two operations: list and create.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, list limits
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_catalog::{CatalogService, MongoCatalogRepository, handlers};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("topup");
//!
//! let repository = MongoCatalogRepository::new(db);
//! let service = CatalogService::new(repository);
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{CatalogError, CatalogResult};
pub use handlers::ApiDoc;
pub use models::{
    CreatedResponse, EmptyNumber, EmptyNumberRecord, SosmedService, SosmedServiceRecord,
    SosmedUnit, TopupProduct, TopupProductRecord,
};
pub use mongodb::MongoCatalogRepository;
pub use repository::CatalogRepository;
pub use service::CatalogService;

/// Collection holding game top-up products
pub const TOPUP_COLLECTION: &str = "topupproduct";
/// Collection holding social-media boost packages
pub const SOSMED_COLLECTION: &str = "sosmedservice";
/// Collection holding virtual phone numbers
pub const NUMBER_COLLECTION: &str = "emptynumber";
