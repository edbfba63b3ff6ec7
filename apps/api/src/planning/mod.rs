// Full project plan generation from a team roster, budget and timeline.
// Unlike the recommendation flow, upstream failures are surfaced to the caller.

pub mod guard;
pub mod handlers;
pub mod prompts;
