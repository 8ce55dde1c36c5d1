use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::constants::MSG_RUNNING;
use crate::AppState;

/// Liveness endpoint
pub async fn root() -> &'static str {
    MSG_RUNNING
}

/// Health check endpoint
///
/// Probes the database and the cache. Always answers 200; the body says
/// whether both collaborators are reachable.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let report = state.coordinator.health().await;

    Json(json!({
        "status": if report.is_healthy() { "healthy" } else { "unhealthy" },
        "database": report.database,
        "cache": report.cache,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
