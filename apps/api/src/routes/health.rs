use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Liveness check. Does not touch the store.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "OK",
        "message": "Server is running",
        "timestamp": Utc::now().to_rfc3339(),
        "service": "profile-api",
        "version": env!("CARGO_PKG_VERSION"),
        "environment": state.config.app_env,
    }))
}
