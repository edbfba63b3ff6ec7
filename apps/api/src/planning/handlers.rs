//! Axum route handlers for the Plan API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::prompts::PROJECT_MANAGER_SYSTEM;
use crate::models::plan::{ProjectPlanRequest, ProjectPlanResponse};
use crate::planning::guard::find_blocked_phrase;
use crate::planning::prompts::{build_project_prompt, build_team_summary};
use crate::state::AppState;

/// POST /api/gemini/generate
///
/// Screens the submission, then asks the LLM for a Markdown project plan.
/// Fails with 503 when no API key is configured and 502 on upstream failure.
pub async fn handle_generate_plan(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ProjectPlanResponse>, AppError> {
    let Json(raw) = payload.map_err(|e| {
        AppError::Validation(format!("invalid project submission: {}", e.body_text()))
    })?;

    if let Some(phrase) = find_blocked_phrase(&raw) {
        return Err(AppError::Validation(format!(
            "submission contains a blocked phrase: '{phrase}'"
        )));
    }

    let request: ProjectPlanRequest = serde_json::from_value(raw)
        .map_err(|e| AppError::Validation(format!("invalid project submission: {e}")))?;

    let team_summary = build_team_summary(request.members());
    let prompt = build_project_prompt(&request, &team_summary);

    let plan = state
        .recommender
        .generate_text(&prompt, Some(PROJECT_MANAGER_SYSTEM))
        .await?;

    info!(
        "Generated plan for {} team member(s) ({} chars)",
        request.members().len(),
        plan.len()
    );

    Ok(Json(ProjectPlanResponse { plan }))
}
