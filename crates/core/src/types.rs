use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dialogue::DialogueError;

/// Who produced a conversation log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speaker {
    User,
    Bot,
}

impl Speaker {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }
}

/// A single chat message: immutable text plus arrival timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Coarse urgency label derived from sentiment polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Emotion labels attached to a sentiment bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Emotion {
    Overwhelmed,
    Distressed,
    Concerned,
    Anxious,
    Hopeful,
    Positive,
}

impl Emotion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overwhelmed => "overwhelmed",
            Self::Distressed => "distressed",
            Self::Concerned => "concerned",
            Self::Anxious => "anxious",
            Self::Hopeful => "hopeful",
            Self::Positive => "positive",
        }
    }
}

/// Result of scoring one message: polarity in [-1, 1] plus the
/// derived urgency bucket and emotion labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentResult {
    pub score: f32,
    pub urgency: Urgency,
    pub emotions: Vec<Emotion>,
}

impl SentimentResult {
    /// The well-defined fallback when the scoring backend is
    /// unavailable: score 0.0, low urgency.
    pub fn neutral() -> Self {
        Self {
            score: 0.0,
            urgency: Urgency::Low,
            emotions: vec![Emotion::Hopeful, Emotion::Positive],
        }
    }
}

/// Reply style for the session. Set once, switchable via an explicit
/// setter; anything outside these two values is rejected at parse
/// time rather than silently defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    Soft,
    Directive,
}

impl Tone {
    pub const ALL: [Tone; 2] = [Tone::Soft, Tone::Directive];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Soft => "soft",
            Self::Directive => "directive",
        }
    }

    /// Parse from a config string. Unknown values are an error, never
    /// a default.
    pub fn parse(s: &str) -> Result<Self, DialogueError> {
        match s.trim().to_lowercase().as_str() {
            "soft" => Ok(Self::Soft),
            "directive" => Ok(Self::Directive),
            other => Err(DialogueError::UnknownTone(other.to_owned())),
        }
    }
}

/// One entry of the conversation transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub speaker: Speaker,
    pub message: Message,
    /// Present for user messages; bot replies are not scored.
    pub sentiment: Option<SentimentResult>,
}

/// Append-only transcript of a session, in insertion order.
/// Never reordered or pruned; exporters read it as a slice.
#[derive(Debug, Default, Serialize)]
pub struct ConversationLog {
    entries: Vec<LogEntry>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize the transcript for export.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.entries)
    }
}

/// Append-only record of past sentiment scores. Only the tail is ever
/// inspected (burnout window, mood trend); nothing is pruned.
#[derive(Debug, Default)]
pub struct SentimentHistory {
    scores: Vec<f32>,
}

impl SentimentHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, score: f32) {
        self.scores.push(score);
    }

    pub fn scores(&self) -> &[f32] {
        &self.scores
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Mean of the most recent `n` scores, None when the history is
    /// empty. Read-only; feeds the mood-trend display, not replies.
    pub fn trend(&self, n: usize) -> Option<f32> {
        if self.scores.is_empty() || n == 0 {
            return None;
        }
        let tail = &self.scores[self.scores.len().saturating_sub(n)..];
        Some(tail.iter().sum::<f32>() / tail.len() as f32)
    }
}
