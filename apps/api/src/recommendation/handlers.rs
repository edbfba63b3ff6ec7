//! Axum route handlers for the Recommendation API.

use axum::{extract::State, Json};

use crate::models::brief::{ProjectBrief, RecommendationResult};
use crate::state::AppState;

/// POST /generate (also mounted at /api/generate)
///
/// Always answers 200. A missing or malformed body is treated as an empty brief.
pub async fn handle_generate(
    State(state): State<AppState>,
    body: Option<Json<ProjectBrief>>,
) -> Json<RecommendationResult> {
    let brief = body.map(|Json(brief)| brief).unwrap_or_default();
    Json(state.recommender.recommend(&brief).await)
}
