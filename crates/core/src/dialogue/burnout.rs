//! Burnout-streak heuristic.
//!
//! Fires when at least 3 of the last 5 recorded sentiment scores fall
//! below -0.3. Fewer than 5 recorded scores never fires.

use crate::types::SentimentHistory;

/// Number of most-recent scores inspected.
const WINDOW: usize = 5;
/// Scores below this count toward the streak.
const NEGATIVE_THRESHOLD: f32 = -0.3;
/// Streak size that triggers the flag.
const TRIGGER_COUNT: usize = 3;

/// Pure check over the tail of the history.
pub fn is_burned_out(history: &SentimentHistory) -> bool {
    let scores = history.scores();
    if scores.len() < WINDOW {
        return false;
    }
    let negatives = scores[scores.len() - WINDOW..]
        .iter()
        .filter(|&&s| s < NEGATIVE_THRESHOLD)
        .count();
    negatives >= TRIGGER_COUNT
}
