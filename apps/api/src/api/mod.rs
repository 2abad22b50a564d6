//! API routes module
//!
//! Wires the catalog and orders domains to HTTP routes.

pub mod catalog;
pub mod diagnostics;
pub mod health;
pub mod orders;

use axum::Router;
use axum_helpers::create_permissive_cors_layer;

use crate::state::AppState;

/// Create all API routes
/// Note: These are nested under /api by axum_helpers::create_router
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(catalog::router(state))
        .nest("/orders", orders::router(state))
}

/// Create the routes merged outside /api: `/`, `/test`, `/health`, `/ready`.
///
/// These sit next to the documented API router, whose middleware stack
/// only covers routes registered before it, so CORS is applied here too.
pub fn top_level_routes(state: &AppState) -> Router {
    Router::new()
        .merge(diagnostics::router(state.clone()))
        .merge(health::router(state.clone()))
        .merge(axum_helpers::health_router(state.config.app.clone()))
        .layer(create_permissive_cors_layer())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use core_config::{app_info, server::ServerConfig};
    use database::mongodb::MongoConfig;
    use tower::ServiceExt;

    use crate::config::{Config, Environment};

    // Client construction is lazy, so no server is needed for routes
    // that never touch the database
    async fn test_state() -> AppState {
        let mongo_client = mongodb::Client::with_uri_str("mongodb://localhost:27017")
            .await
            .unwrap();
        let db = mongo_client.database("topup_test");

        AppState {
            config: Config {
                app: app_info!(),
                mongodb: MongoConfig::new("mongodb://localhost:27017"),
                server: ServerConfig::default(),
                environment: Environment::Development,
            },
            mongo_client,
            db,
        }
    }

    #[tokio::test]
    async fn test_top_level_routes_carry_cors_headers() {
        let app = top_level_routes(&test_state().await);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::ORIGIN, "http://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            response
                .headers()
                .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        );
    }

    #[tokio::test]
    async fn test_liveness_is_reachable_with_cors() {
        let app = top_level_routes(&test_state().await);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(header::ORIGIN, "http://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            response
                .headers()
                .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        );
    }
}
