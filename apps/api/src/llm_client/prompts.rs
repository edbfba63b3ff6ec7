// Shared prompt constants.
// Each feature that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System instruction for full project plans.
pub const PROJECT_MANAGER_SYSTEM: &str =
    "You are an expert AI Project Manager. Respond with a structured Markdown plan only.";

/// Persona line opening every recommendation prompt.
pub const ARCHITECT_PERSONA: &str = "You are an expert software architect and product strategist.";
