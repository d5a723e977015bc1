//! Keyword-category classification.
//!
//! Categories are tested in a fixed priority order against the
//! lower-cased message; the first keyword hit wins. The order is a
//! deliberate tie-break rule (a message with both "tired" and "thank"
//! is distress, never gratitude), so it lives in one auditable
//! constant.

use serde::{Deserialize, Serialize};

/// Topic bucket driving reply selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Distress,
    Medication,
    Appointment,
    Lonely,
    Anger,
    Sadness,
    Gratitude,
    HelpRequest,
    Tasks,
    Default,
}

impl Category {
    /// Every category, including the fallback.
    pub const ALL: [Category; 10] = [
        Category::Distress,
        Category::Medication,
        Category::Appointment,
        Category::Lonely,
        Category::Anger,
        Category::Sadness,
        Category::Gratitude,
        Category::HelpRequest,
        Category::Tasks,
        Category::Default,
    ];

    /// Match order for classification. First hit wins; `Default` is
    /// the fallthrough and has no keywords.
    pub const PRIORITY: [Category; 9] = [
        Category::Distress,
        Category::Medication,
        Category::Appointment,
        Category::Lonely,
        Category::Anger,
        Category::Sadness,
        Category::Gratitude,
        Category::HelpRequest,
        Category::Tasks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Distress => "distress",
            Self::Medication => "medication",
            Self::Appointment => "appointment",
            Self::Lonely => "lonely",
            Self::Anger => "anger",
            Self::Sadness => "sadness",
            Self::Gratitude => "gratitude",
            Self::HelpRequest => "help-request",
            Self::Tasks => "tasks",
            Self::Default => "default",
        }
    }

    /// Substring keywords that select this category.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Distress => &["overwhelmed", "tired", "stress"],
            Self::Medication => &["medication", "pill"],
            Self::Appointment => &["appointment", "reminder"],
            Self::Lonely => &["lonely"],
            Self::Anger => &["angry", "frustrated"],
            Self::Sadness => &["sad", "cry"],
            Self::Gratitude => &["thank"],
            Self::HelpRequest => &["help"],
            Self::Tasks => &["task", "what are my care tasks", "show tasks"],
            Self::Default => &[],
        }
    }
}

/// Classify a message into exactly one category. Case-insensitive
/// substring containment, priority order, first match wins. Empty or
/// unmatched text falls through to `Default`.
pub fn classify(text: &str) -> Category {
    let lower = text.to_lowercase();
    for category in Category::PRIORITY {
        if category.keywords().iter().any(|k| lower.contains(k)) {
            return category;
        }
    }
    Category::Default
}
