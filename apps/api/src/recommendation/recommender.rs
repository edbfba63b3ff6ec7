//! Recommendation orchestrator.
//!
//! Every request ends in exactly one of two states: upstream text (`external`)
//! or the deterministic fallback (`mock`). Upstream failures never reach the caller.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::llm_client::{GeminiClient, LlmError, TextGenerator};
use crate::models::brief::{ProjectBrief, RecommendationResult};
use crate::recommendation::fallback::fallback_recommendation;
use crate::recommendation::prompts::build_recommendation_prompt;

/// Why the upstream path produced no usable text.
#[derive(Debug, Error)]
pub enum FallbackReason {
    #[error("no API key configured")]
    MissingCredential,

    #[error("upstream call failed: {0}")]
    Upstream(#[from] LlmError),

    #[error("upstream returned no usable text")]
    EmptyText,

    #[error("upstream call exceeded deadline of {0:?}")]
    DeadlineExceeded(Duration),
}

#[derive(Clone)]
pub struct Recommender {
    generator: Option<Arc<dyn TextGenerator>>,
    deadline: Duration,
}

impl Recommender {
    pub fn new(generator: Option<Arc<dyn TextGenerator>>, deadline: Duration) -> Self {
        Self {
            generator,
            deadline,
        }
    }

    /// A recommender that always answers with the fallback template.
    pub fn mock_only() -> Self {
        Self::new(None, Duration::from_secs(crate::config::DEFAULT_LLM_TIMEOUT_SECS))
    }

    /// Wires a `GeminiClient` when an API key is configured, mock-only otherwise.
    pub fn from_config(config: &Config) -> Result<Self, LlmError> {
        let generator: Option<Arc<dyn TextGenerator>> = match &config.gemini_api_key {
            Some(key) => Some(Arc::new(GeminiClient::new(
                key.clone(),
                config.gemini_base_url.clone(),
                config.llm_timeout,
            )?)),
            None => None,
        };
        Ok(Self::new(generator, config.llm_timeout))
    }

    pub fn is_external(&self) -> bool {
        self.generator.is_some()
    }

    /// Runs one upstream generation under the configured deadline.
    /// Empty text counts as a failure; any other text is returned untouched.
    pub async fn generate_text(
        &self,
        prompt: &str,
        system: Option<&str>,
    ) -> Result<String, FallbackReason> {
        let generator = self
            .generator
            .as_ref()
            .ok_or(FallbackReason::MissingCredential)?;

        let text = tokio::time::timeout(self.deadline, generator.generate(prompt, system))
            .await
            .map_err(|_| FallbackReason::DeadlineExceeded(self.deadline))??;

        if text.is_empty() {
            return Err(FallbackReason::EmptyText);
        }
        Ok(text)
    }

    /// Never fails: any upstream problem is absorbed into the fallback.
    #[instrument(skip_all, fields(request_id = %Uuid::new_v4(), project = brief.display_name()))]
    pub async fn recommend(&self, brief: &ProjectBrief) -> RecommendationResult {
        if !self.is_external() {
            info!("No API key configured, serving fallback recommendation");
            return RecommendationResult::mock(fallback_recommendation(brief));
        }

        let prompt = build_recommendation_prompt(brief);
        match self.generate_text(&prompt, None).await {
            Ok(text) => {
                info!("Serving external recommendation ({} chars)", text.len());
                RecommendationResult::external(text)
            }
            Err(reason) => {
                warn!("Falling back to mock recommendation: {reason}");
                RecommendationResult::mock(fallback_recommendation(brief))
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::brief::RecommendationSource;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Canned upstream behaviours for exercising the orchestrator.
    #[derive(Clone)]
    pub(crate) enum Script {
        Text(&'static str),
        NoCandidates,
        ServerError,
        Hang,
    }

    pub(crate) struct ScriptedGenerator {
        script: Script,
        pub calls: AtomicUsize,
    }

    impl ScriptedGenerator {
        pub(crate) fn new(script: Script) -> Arc<Self> {
            Arc::new(Self {
                script,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(&self, _prompt: &str, _system: Option<&str>) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.script {
                Script::Text(text) => Ok(text.to_string()),
                Script::NoCandidates => Err(LlmError::EmptyCandidates),
                Script::ServerError => Err(LlmError::Api {
                    status: 503,
                    message: "overloaded".to_string(),
                }),
                Script::Hang => {
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                    Ok("too late".to_string())
                }
            }
        }
    }

    pub(crate) fn recommender_with(generator: Arc<ScriptedGenerator>) -> Recommender {
        Recommender::new(Some(generator), Duration::from_secs(5))
    }

    fn website_revamp() -> ProjectBrief {
        ProjectBrief {
            name: Some("Website Revamp".to_string()),
            goal: Some("Increase conversions".to_string()),
            description: None,
        }
    }

    #[tokio::test]
    async fn test_no_credential_serves_exact_fallback() {
        let brief = ProjectBrief::new("", "", "");
        let result = Recommender::mock_only().recommend(&brief).await;

        assert_eq!(result.source, RecommendationSource::Mock);
        assert_eq!(result.text, fallback_recommendation(&brief));
        assert!(result.text.contains("Project: Untitled"));
        assert!(result.text.contains("Goal: N/A"));
    }

    #[tokio::test]
    async fn test_external_text_is_returned_verbatim() {
        let generator = ScriptedGenerator::new(Script::Text("Phase 1: ..."));
        let result = recommender_with(generator.clone())
            .recommend(&website_revamp())
            .await;

        assert_eq!(result.source, RecommendationSource::External);
        assert_eq!(result.text, "Phase 1: ...");
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_zero_candidates_falls_back() {
        let brief = website_revamp();
        let result = recommender_with(ScriptedGenerator::new(Script::NoCandidates))
            .recommend(&brief)
            .await;

        assert_eq!(result.source, RecommendationSource::Mock);
        assert_eq!(result.text, fallback_recommendation(&brief));
    }

    #[tokio::test]
    async fn test_upstream_error_falls_back() {
        let result = recommender_with(ScriptedGenerator::new(Script::ServerError))
            .recommend(&website_revamp())
            .await;
        assert_eq!(result.source, RecommendationSource::Mock);
    }

    #[tokio::test]
    async fn test_empty_upstream_text_falls_back() {
        let result = recommender_with(ScriptedGenerator::new(Script::Text("")))
            .recommend(&website_revamp())
            .await;
        assert_eq!(result.source, RecommendationSource::Mock);
        assert!(!result.text.is_empty());
    }

    #[tokio::test]
    async fn test_whitespace_upstream_text_is_external() {
        let result = recommender_with(ScriptedGenerator::new(Script::Text(" ")))
            .recommend(&website_revamp())
            .await;
        assert_eq!(result, RecommendationResult::external(" ".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_hung_upstream_hits_deadline() {
        let recommender = Recommender::new(
            Some(ScriptedGenerator::new(Script::Hang)),
            Duration::from_secs(2),
        );

        let err = recommender.generate_text("prompt", None).await.unwrap_err();
        assert!(matches!(err, FallbackReason::DeadlineExceeded(d) if d == Duration::from_secs(2)));

        let result = recommender.recommend(&website_revamp()).await;
        assert_eq!(result.source, RecommendationSource::Mock);
    }

    #[tokio::test]
    async fn test_identical_input_yields_identical_output() {
        let recommender = recommender_with(ScriptedGenerator::new(Script::Text("Phase 1")));
        let brief = website_revamp();
        assert_eq!(
            recommender.recommend(&brief).await,
            recommender.recommend(&brief).await
        );

        let mock = Recommender::mock_only();
        assert_eq!(mock.recommend(&brief).await, mock.recommend(&brief).await);
    }

    #[tokio::test]
    async fn test_missing_credential_reason() {
        let err = Recommender::mock_only()
            .generate_text("prompt", None)
            .await
            .unwrap_err();
        assert!(matches!(err, FallbackReason::MissingCredential));
    }

    #[test]
    fn test_from_config_selects_mode() {
        let mock = Recommender::from_config(&Config::default()).unwrap();
        assert!(!mock.is_external());

        let config = Config {
            gemini_api_key: Some("key".to_string()),
            ..Config::default()
        };
        assert!(Recommender::from_config(&config).unwrap().is_external());
    }
}
