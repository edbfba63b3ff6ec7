use crate::llm_client::prompts::ARCHITECT_PERSONA;
use crate::models::brief::ProjectBrief;

/// Builds the instruction sent upstream for a brief.
/// Blank fields fall back to placeholders; blank context is left out entirely.
pub fn build_recommendation_prompt(brief: &ProjectBrief) -> String {
    let mut lines = vec![
        ARCHITECT_PERSONA.to_string(),
        "Generate pragmatic, step-by-step recommendations for a new project.".to_string(),
        "Keep it concise but specific with phased rollout and tech stack tradeoffs.".to_string(),
        format!("Project: {}", brief.display_name()),
        format!("Goal: {}", brief.display_goal()),
    ];
    if let Some(context) = brief.context() {
        lines.push(format!("Context: {context}"));
    }
    lines.join("\n")
}
