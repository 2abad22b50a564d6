//! Top-level diagnostic endpoints
//!
//! `/` is a plain liveness banner; `/test` reports the state of the
//! MongoDB connection and environment wiring for quick deployment checks.
//! Neither endpoint is nested under `/api`.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use serde_json::{Value, json};

use crate::state::AppState;

/// Collections listed by `/test` are capped so the response stays small
const MAX_COLLECTIONS: usize = 10;

/// Diagnostic errors are truncated so connection strings embedded in
/// driver messages do not leak in full
const MAX_ERROR_LEN: usize = 50;

#[derive(Serialize)]
struct DiagnosticsResponse {
    backend: &'static str,
    database_url: &'static str,
    database_name: String,
    connection_status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    collections: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Create the diagnostics router (merged at the top level, not under /api)
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/test", get(connection_test))
        .with_state(state)
}

/// Liveness banner
async fn root() -> Json<Value> {
    Json(json!({ "message": "Top-up & Sosmed Services API running" }))
}

/// Report MongoDB connectivity and the environment wiring behind it
async fn connection_test(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let database_url = if std::env::var("DATABASE_URL").is_ok() {
        "set"
    } else {
        "not set"
    };
    let database_name = state.db.name().to_string();

    match state.db.list_collection_names().await {
        Ok(mut collections) => {
            collections.truncate(MAX_COLLECTIONS);
            Json(DiagnosticsResponse {
                backend: "running",
                database_url,
                database_name,
                connection_status: "connected",
                collections: Some(collections),
                error: None,
            })
        }
        Err(e) => {
            tracing::warn!(error = %e, "MongoDB connection test failed");
            let mut message = e.to_string();
            message.truncate(MAX_ERROR_LEN);
            Json(DiagnosticsResponse {
                backend: "running",
                database_url,
                database_name,
                connection_status: "failed",
                collections: None,
                error: Some(message),
            })
        }
    }
}
