use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version and whether upstream LLM calls are enabled.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "jenga-api",
        "llm_mode": state.config.llm_mode(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
