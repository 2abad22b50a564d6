//! Catalog API routes
//!
//! Exposes /topup, /sosmed and /numbers from the catalog domain.

use axum::Router;
use domain_catalog::{CatalogService, MongoCatalogRepository, handlers};

use crate::state::AppState;

/// Create catalog router
pub fn router(state: &AppState) -> Router {
    let repository = MongoCatalogRepository::new(state.db.clone());
    let service = CatalogService::new(repository);

    handlers::router(service)
}
