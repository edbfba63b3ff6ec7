use serde::{Deserialize, Serialize};

/// Placeholder rendered when a brief carries no project name.
pub const UNTITLED: &str = "Untitled";
/// Placeholder rendered for any other blank field.
pub const NOT_AVAILABLE: &str = "N/A";

/// The minimal description of a project a recommendation is requested for.
/// Every field is optional; `null`, missing and whitespace-only values are all blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectBrief {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ProjectBrief {
    pub fn new(
        name: impl Into<String>,
        goal: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            goal: Some(goal.into()),
            description: Some(description.into()),
        }
    }

    pub fn display_name(&self) -> &str {
        non_blank(self.name.as_deref()).unwrap_or(UNTITLED)
    }

    pub fn display_goal(&self) -> &str {
        non_blank(self.goal.as_deref()).unwrap_or(NOT_AVAILABLE)
    }

    /// Free-text context, if the caller supplied any.
    pub fn context(&self) -> Option<&str> {
        non_blank(self.description.as_deref())
    }
}

/// Where the text of a [`RecommendationResult`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationSource {
    /// Deterministic fallback template.
    Mock,
    /// Text generated by the upstream generative-language API.
    External,
}

impl RecommendationSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationSource::Mock => "mock",
            RecommendationSource::External => "external",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub text: String,
    pub source: RecommendationSource,
}

impl RecommendationResult {
    pub fn mock(text: String) -> Self {
        Self {
            text,
            source: RecommendationSource::Mock,
        }
    }

    pub fn external(text: String) -> Self {
        Self {
            text,
            source: RecommendationSource::External,
        }
    }
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
