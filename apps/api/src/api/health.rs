//! Readiness endpoint
//!
//! Unlike `/health` (pure liveness), `/ready` performs a MongoDB
//! round-trip and answers 503 until the database is reachable, so
//! orchestrators keep traffic away from a pod with a dead connection.

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use database::mongodb::HealthStatus;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    mongodb: bool,
    response_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Create the readiness router (merged at the top level, not under /api)
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Readiness check - verifies MongoDB connection
async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let health = database::mongodb::check_health_detailed(&state.mongo_client).await;
    readiness_response(health)
}

fn readiness_response(health: HealthStatus) -> (StatusCode, Json<ReadinessResponse>) {
    let status_code = if health.healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(ReadinessResponse {
            status: if health.healthy { "ready" } else { "unhealthy" },
            mongodb: health.healthy,
            response_time_ms: health.response_time_ms,
            error: health.message,
        }),
    )
}
