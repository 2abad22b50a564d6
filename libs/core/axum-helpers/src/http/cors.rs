use tower_http::cors::CorsLayer;

/// Creates a permissive CORS layer: any origin, any method, any header.
///
/// The API is public and unauthenticated, so the browser same-origin
/// restrictions are deliberately lifted for every endpoint.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
