//! Client side of the submission flow: posts a brief to a running proxy.
//!
//! Mirrors the web form: if the proxy cannot be reached the caller still gets
//! the fallback recommendation instead of an error.

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use tracing::warn;

use crate::models::brief::{ProjectBrief, RecommendationResult};
use crate::recommendation::fallback::fallback_recommendation;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned status {0}")]
    Status(u16),
}

#[derive(Clone)]
pub struct SubmissionClient {
    client: Client,
    base_url: String,
}

impl SubmissionClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Posts the brief to `{base_url}/generate` and returns the server's answer.
    pub async fn submit(&self, brief: &ProjectBrief) -> Result<RecommendationResult, ClientError> {
        let response = self
            .client
            .post(format!("{}/generate", self.base_url))
            .json(brief)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }
        Ok(response.json().await?)
    }

    /// Like [`submit`](Self::submit), but renders the fallback locally on any failure.
    pub async fn submit_or_fallback(&self, brief: &ProjectBrief) -> RecommendationResult {
        match self.submit(brief).await {
            Ok(result) => result,
            Err(e) => {
                warn!("Submission failed, using local fallback: {e}");
                RecommendationResult::mock(fallback_recommendation(brief))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::brief::RecommendationSource;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_submit_posts_brief_and_parses_result() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/generate")
                    .json_body(json!({ "name": "Atlas", "goal": "Ship v1", "description": "" }));
                then.status(200)
                    .json_body(json!({ "text": "Phase 1", "source": "external" }));
            })
            .await;

        let client = SubmissionClient::new(server.base_url(), Duration::from_secs(5)).unwrap();
        let result = client
            .submit(&ProjectBrief::new("Atlas", "Ship v1", ""))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(result, RecommendationResult::external("Phase 1".to_string()));
    }

    #[tokio::test]
    async fn test_server_error_status_is_reported() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/generate");
                then.status(500);
            })
            .await;

        let client = SubmissionClient::new(server.base_url(), Duration::from_secs(5)).unwrap();
        let err = client.submit(&ProjectBrief::default()).await.unwrap_err();
        assert!(matches!(err, ClientError::Status(500)));

        let result = client.submit_or_fallback(&ProjectBrief::default()).await;
        assert_eq!(result.source, RecommendationSource::Mock);
    }

    #[tokio::test]
    async fn test_unreachable_server_falls_back_locally() {
        let client =
            SubmissionClient::new("http://127.0.0.1:9/", Duration::from_secs(2)).unwrap();
        let brief = ProjectBrief::new("Atlas", "", "");

        let result = client.submit_or_fallback(&brief).await;
        assert_eq!(result.source, RecommendationSource::Mock);
        assert_eq!(result.text, fallback_recommendation(&brief));
    }
}
