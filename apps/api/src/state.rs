use crate::config::Config;
use crate::recommendation::recommender::Recommender;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Upstream LLM access with fallback; mock-only when no API key is configured.
    pub recommender: Recommender,
}

impl AppState {
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let recommender = Recommender::from_config(&config)?;
        Ok(Self {
            config,
            recommender,
        })
    }
}
