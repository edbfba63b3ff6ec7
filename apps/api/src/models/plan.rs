use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::brief::non_blank;

/// A team member as listed on a project submission.
/// Older clients send the member's label under `member` instead of `name`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamMember {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub member: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub framework: Option<String>,
}

impl TeamMember {
    /// `name`, else `member`, whichever is non-blank first.
    pub fn label(&self) -> Option<&str> {
        non_blank(self.name.as_deref()).or(non_blank(self.member.as_deref()))
    }
}

/// Full project submission used for plan generation.
/// Accepts both the snake_case and camelCase spellings the web clients send,
/// possibly both at once; the snake_case value wins when it is non-blank.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectPlanRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub goal_description: Option<String>,
    #[serde(default)]
    pub requirement_description: Option<String>,
    #[serde(default)]
    pub budget: Option<Value>,
    #[serde(default)]
    pub budget_floor: Option<Value>,
    #[serde(default)]
    pub budget_ceiling: Option<Value>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default, rename = "startDate")]
    pub start_date_camel: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default, rename = "endDate")]
    pub end_date_camel: Option<String>,
    #[serde(default)]
    pub team_members: Option<Vec<TeamMember>>,
    #[serde(default, rename = "teamMembers")]
    pub team_members_camel: Option<Vec<TeamMember>>,
}

impl ProjectPlanRequest {
    pub fn start(&self) -> Option<&str> {
        non_blank(self.start_date.as_deref()).or(non_blank(self.start_date_camel.as_deref()))
    }

    pub fn end(&self) -> Option<&str> {
        non_blank(self.end_date.as_deref()).or(non_blank(self.end_date_camel.as_deref()))
    }

    /// `team_members` when non-empty, otherwise `teamMembers`.
    pub fn members(&self) -> &[TeamMember] {
        [&self.team_members, &self.team_members_camel]
            .into_iter()
            .flatten()
            .find(|m| !m.is_empty())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// `budget` when given, otherwise the floor/ceiling range.
    pub fn budget_label(&self) -> String {
        if let Some(budget) = scalar_text(self.budget.as_ref()) {
            return budget;
        }
        format!(
            "{} to {}",
            scalar_text(self.budget_floor.as_ref()).unwrap_or_else(|| "N/A".to_string()),
            scalar_text(self.budget_ceiling.as_ref()).unwrap_or_else(|| "N/A".to_string()),
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectPlanResponse {
    pub plan: String,
}

/// Renders a JSON string or number as plain text; anything else counts as absent.
fn scalar_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => non_blank(Some(s.as_str())).map(str::to_string),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
