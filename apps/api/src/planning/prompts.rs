use crate::models::brief::non_blank;
use crate::models::plan::{ProjectPlanRequest, TeamMember};

const NOT_AVAILABLE: &str = "N/A";

/// One line per member: `- <name>: Language: <lang>, Framework: <framework>`.
pub fn build_team_summary(members: &[TeamMember]) -> String {
    members
        .iter()
        .map(|m| {
            format!(
                "- {}: Language: {}, Framework: {}",
                m.label().unwrap_or("Unknown"),
                non_blank(m.language.as_deref()).unwrap_or(NOT_AVAILABLE),
                non_blank(m.framework.as_deref()).unwrap_or(NOT_AVAILABLE),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn build_project_prompt(request: &ProjectPlanRequest, team_summary: &str) -> String {
    let field = |value: &Option<String>| {
        non_blank(value.as_deref())
            .unwrap_or(NOT_AVAILABLE)
            .to_string()
    };

    format!(
        r#"Analyze the following software project and act as an expert AI Project Manager.

Project Name: {name}
Project Goal: {goal}
Requirements: {requirements}
Budget: {budget}
Timeline: {start} to {end}

Team Members and Skills:
{team_summary}

Your tasks:
1. Recommend the best-fit programming languages, frameworks, and tools for frontend, backend, database, and devops.
2. Assign clear roles to each team member based on their skills (e.g., Backend Developer, Frontend Developer, Full-Stack, DevOps, QA, Tech Lead).
3. Provide a high-level project plan and milestone-based timeline.
4. Mention potential risks and mitigation strategies.

Return a single, well-structured answer in Markdown with clear headings and bullet points."#,
        name = field(&request.name),
        goal = field(&request.goal_description),
        requirements = field(&request.requirement_description),
        budget = request.budget_label(),
        start = request.start().unwrap_or(NOT_AVAILABLE),
        end = request.end().unwrap_or(NOT_AVAILABLE),
    )
}
