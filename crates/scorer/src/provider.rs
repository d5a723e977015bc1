use std::future::Future;
use std::pin::Pin;

/// Error type for scoring backends.
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    #[error("backend unavailable: {0}")]
    Unavailable(String),
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Trait for sentiment backends (lexicon, remote API, learned model, etc.)
///
/// Contract: a successful score is a polarity in [-1.0, 1.0].
/// Implementations clamp before returning.
pub trait SentimentProvider: Send + Sync {
    fn name(&self) -> &str;

    fn score(
        &self,
        text: &str,
    ) -> Pin<Box<dyn Future<Output = Result<f32, ScoreError>> + Send + '_>>;
}

/// Mock provider for testing — returns a fixed score or a forced error.
#[derive(Debug, Clone)]
pub struct MockProvider {
    score: f32,
    fail: bool,
}

impl MockProvider {
    /// Create a mock that always returns `score`.
    pub fn new(score: f32) -> Self {
        Self { score, fail: false }
    }

    /// Create a mock that always fails, for exercising fallback paths.
    pub fn failing() -> Self {
        Self { score: 0.0, fail: true }
    }
}

impl SentimentProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn score(
        &self,
        _text: &str,
    ) -> Pin<Box<dyn Future<Output = Result<f32, ScoreError>> + Send + '_>> {
        let score = self.score;
        let fail = self.fail;
        Box::pin(async move {
            if fail {
                Err(ScoreError::Unavailable("mock failure".into()))
            } else {
                Ok(score.clamp(-1.0, 1.0))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_provider_returns_fixed_score() {
        let mock = MockProvider::new(0.75);
        let score = mock.score("doesn't matter").await.unwrap();
        assert!((score - 0.75).abs() < f32::EPSILON);
    }

    #[tokio::test]
    async fn mock_provider_clamps_out_of_range() {
        let mock = MockProvider::new(2.5);
        let score = mock.score("x").await.unwrap();
        assert!((score - 1.0).abs() < f32::EPSILON);
    }

    #[tokio::test]
    async fn failing_mock_errors() {
        let mock = MockProvider::failing();
        let err = mock.score("x").await.unwrap_err();
        assert!(matches!(err, ScoreError::Unavailable(_)));
    }
}
