//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Top-up & Sosmed Services API",
        version = "0.1.0",
        description = "Catalog and order API for game top-ups, social-media boosts, and virtual numbers",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    nest(
        (path = "/api", api = domain_catalog::ApiDoc),
        (path = "/api/orders", api = domain_orders::ApiDoc)
    ),
    tags(
        (name = "Catalog", description = "Product catalog endpoints (MongoDB)"),
        (name = "Orders", description = "Order placement and listing (MongoDB)")
    )
)]
pub struct ApiDoc;
