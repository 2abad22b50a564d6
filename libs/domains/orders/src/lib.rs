//! Orders Domain
//!
//! Order creation and listing for the catalog-and-order API. This is the one
//! place in the system with real business logic: when a caller omits
//! `total_price`, the referenced product is resolved by (category, id),
//! validated, and the total derived as `price * quantity`.
//!
//! Layering mirrors the catalog domain: models → repository traits
//! (order persistence and product lookup) → MongoDB implementations →
//! service → axum handlers.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_orders::{MongoOrderRepository, MongoProductLookup, OrderService, handlers};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("topup");
//!
//! let repository = MongoOrderRepository::new(db.clone());
//! let products = MongoProductLookup::new(db);
//! let service = OrderService::new(repository, products);
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
pub use error::{OrderError, OrderResult};
pub use handlers::ApiDoc;
pub use models::{
    CreateOrder, OrderCategory, OrderListQuery, OrderReceipt, OrderRecord, OrderStatus,
    PricedProduct,
};
pub use mongodb::{MongoOrderRepository, MongoProductLookup};
pub use repository::{OrderRepository, ProductLookup};
pub use service::OrderService;

/// Collection holding placed orders
pub const ORDER_COLLECTION: &str = "order";
