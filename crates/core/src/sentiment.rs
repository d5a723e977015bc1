//! Sentiment bucketing and the scoring boundary.
//!
//! The score itself comes from a pluggable backend; this module owns
//! the fixed polarity thresholds and the degrade-to-neutral fallback
//! when the backend fails.

use cara_scorer::provider::SentimentProvider;

use crate::types::{Emotion, SentimentResult, Urgency};

/// Scores below this are high urgency.
const HIGH_URGENCY_BELOW: f32 = -0.5;
/// Scores below this (but not high-urgency) are medium urgency.
const MEDIUM_URGENCY_BELOW: f32 = 0.0;

/// Map a polarity score to its urgency bucket and emotion labels.
/// Thresholds are fixed, not configuration.
pub fn bucket(score: f32) -> (Urgency, Vec<Emotion>) {
    if score < HIGH_URGENCY_BELOW {
        (Urgency::High, vec![Emotion::Overwhelmed, Emotion::Distressed])
    } else if score < MEDIUM_URGENCY_BELOW {
        (Urgency::Medium, vec![Emotion::Concerned, Emotion::Anxious])
    } else {
        (Urgency::Low, vec![Emotion::Hopeful, Emotion::Positive])
    }
}

/// Build a full result from a raw backend score. Out-of-range scores
/// are clamped before bucketing.
pub fn from_score(score: f32) -> SentimentResult {
    let score = score.clamp(-1.0, 1.0);
    let (urgency, emotions) = bucket(score);
    SentimentResult { score, urgency, emotions }
}

/// Score `text` through the backend. A backend failure is recovered
/// here: log it and return the neutral result. Callers never see a
/// scoring error.
pub async fn analyze<P: SentimentProvider + ?Sized>(provider: &P, text: &str) -> SentimentResult {
    match provider.score(text).await {
        Ok(score) => from_score(score),
        Err(e) => {
            tracing::warn!(
                backend = provider.name(),
                error = %e,
                "sentiment backend failed, using neutral result"
            );
            SentimentResult::neutral()
        }
    }
}
