//! HTTP-based sentiment provider.
//!
//! Talks to any scoring service that accepts `{"text": ...}` and
//! answers `{"score": ...}` with a polarity in [-1, 1]. Which model
//! sits behind the endpoint is deliberately opaque to the core.

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;

use crate::provider::{ScoreError, SentimentProvider};

#[derive(Serialize)]
struct ScoreRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct ScoreResponse {
    score: f32,
}

/// Remote sentiment scorer over HTTP.
pub struct RemoteScorer {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl RemoteScorer {
    /// Build from an endpoint URL and optional bearer token.
    pub fn new(endpoint: String, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_owned(),
            api_key,
        }
    }

    async fn request_score(&self, text: &str) -> Result<f32, ScoreError> {
        tracing::debug!(endpoint = %self.endpoint, "requesting sentiment score");
        let mut req = self.client.post(&self.endpoint).json(&ScoreRequest { text });
        if let Some(key) = &self.api_key {
            req = req.bearer_auth(key);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| ScoreError::Unavailable(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(ScoreError::RequestFailed(format!("{status}: {body}")));
        }

        let api: ScoreResponse = resp
            .json()
            .await
            .map_err(|e| ScoreError::MalformedResponse(e.to_string()))?;

        if !api.score.is_finite() {
            return Err(ScoreError::MalformedResponse(format!(
                "non-finite score {}",
                api.score
            )));
        }
        Ok(api.score.clamp(-1.0, 1.0))
    }
}

impl SentimentProvider for RemoteScorer {
    fn name(&self) -> &str {
        "remote"
    }

    fn score(
        &self,
        text: &str,
    ) -> Pin<Box<dyn Future<Output = Result<f32, ScoreError>> + Send + '_>> {
        let text = text.to_owned();
        Box::pin(async move { self.request_score(&text).await })
    }
}

/// Build a remote scorer from `CARA_SENTIMENT_URL` (+ optional
/// `CARA_SENTIMENT_API_KEY`). Returns None when no URL is configured.
pub fn from_env() -> Option<RemoteScorer> {
    let endpoint = std::env::var("CARA_SENTIMENT_URL").ok()?;
    let api_key = std::env::var("CARA_SENTIMENT_API_KEY").ok();
    Some(RemoteScorer::new(endpoint, api_key))
}
