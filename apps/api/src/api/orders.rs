//! Orders API routes
//!
//! Exposes order placement and listing from the orders domain.

use axum::Router;
use domain_orders::{MongoOrderRepository, MongoProductLookup, OrderService, handlers};

use crate::state::AppState;

/// Create orders router
pub fn router(state: &AppState) -> Router {
    let repository = MongoOrderRepository::new(state.db.clone());
    let products = MongoProductLookup::new(state.db.clone());
    let service = OrderService::new(repository, products);

    handlers::router(service)
}
