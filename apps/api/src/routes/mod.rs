pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::planning::handlers::handle_generate_plan;
use crate::recommendation::handlers::handle_generate;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Recommendation proxy; both paths are used by deployed clients
        .route("/generate", post(handle_generate))
        .route("/api/generate", post(handle_generate))
        // Project plan generation
        .route("/api/gemini/generate", post(handle_generate_plan))
        .with_state(state)
}
