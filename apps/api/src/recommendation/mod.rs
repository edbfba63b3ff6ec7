// Recommendation flow: brief → prompt → upstream LLM, with a deterministic fallback.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod fallback;
pub mod handlers;
pub mod prompts;
pub mod recommender;
