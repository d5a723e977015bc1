//! Deterministic word-polarity scorer.
//!
//! No model, no network: lowercases the text, splits it into tokens,
//! and averages the polarity of every token found in the lexicon.
//! Always succeeds, which makes it the default backend.

use std::future::Future;
use std::pin::Pin;

use crate::provider::{ScoreError, SentimentProvider};

/// Negative-polarity terms and their weights.
const NEGATIVE_TERMS: &[(&str, f32)] = &[
    ("overwhelmed", -0.8),
    ("exhausted", -0.7),
    ("hopeless", -0.9),
    ("awful", -0.8),
    ("terrible", -0.7),
    ("scared", -0.7),
    ("angry", -0.7),
    ("crying", -0.7),
    ("cry", -0.7),
    ("stressed", -0.6),
    ("stress", -0.6),
    ("anxious", -0.6),
    ("frustrated", -0.6),
    ("lonely", -0.6),
    ("sad", -0.6),
    ("worried", -0.5),
    ("tired", -0.5),
    ("difficult", -0.4),
    ("hard", -0.3),
];

/// Positive-polarity terms and their weights.
const POSITIVE_TERMS: &[(&str, f32)] = &[
    ("wonderful", 0.8),
    ("great", 0.7),
    ("happy", 0.7),
    ("grateful", 0.7),
    ("love", 0.7),
    ("hopeful", 0.6),
    ("peaceful", 0.6),
    ("thankful", 0.6),
    ("calm", 0.5),
    ("good", 0.5),
    ("helpful", 0.5),
    ("rested", 0.5),
    ("thanks", 0.5),
    ("thank", 0.5),
    ("better", 0.4),
];

/// Compute the lexicon polarity of `text`: the mean weight of all
/// matched tokens, clamped to [-1.0, 1.0]. Unmatched or empty text
/// scores 0.0.
pub fn polarity(text: &str) -> f32 {
    let lower = text.to_lowercase();
    let mut sum = 0.0f32;
    let mut matched = 0u32;

    for token in lower
        .split_whitespace()
        .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|t| !t.is_empty())
    {
        if let Some(w) = lookup(token) {
            sum += w;
            matched += 1;
        }
    }

    if matched == 0 {
        return 0.0;
    }
    (sum / matched as f32).clamp(-1.0, 1.0)
}

fn lookup(token: &str) -> Option<f32> {
    NEGATIVE_TERMS
        .iter()
        .chain(POSITIVE_TERMS)
        .find(|(term, _)| *term == token)
        .map(|(_, w)| *w)
}

/// Lexicon-backed sentiment provider. Infallible.
#[derive(Debug, Clone, Default)]
pub struct LexiconScorer;

impl LexiconScorer {
    pub fn new() -> Self {
        Self
    }
}

impl SentimentProvider for LexiconScorer {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn score(
        &self,
        text: &str,
    ) -> Pin<Box<dyn Future<Output = Result<f32, ScoreError>> + Send + '_>> {
        let score = polarity(text);
        Box::pin(async move { Ok(score) })
    }
}
