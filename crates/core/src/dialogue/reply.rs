//! Tone-keyed reply table.
//!
//! One data table keyed by (category, tone), validated for
//! completeness at construction: every category has both tones
//! populated with distinct, non-empty strings. A lookup miss is a
//! loud error, never a silent default.

use std::collections::HashMap;

use crate::dialogue::DialogueError;
use crate::dialogue::classify::Category;
use crate::types::Tone;

/// Appended to a reply when the burnout streak fires.
pub const SUPPORT_SUGGESTION: &str = " It sounds like the last while has been heavy. \
    Caregiver support lines and local respite services exist for exactly this. \
    Please consider reaching out to one, or to someone you trust.";

/// Shown by the presentation layer after a reply, if it chooses to.
pub const FEEDBACK_PROMPT: &str =
    "How helpful was that? Your feedback helps me support you better.";

const REPLIES: &[(Category, Tone, &str)] = &[
    (
        Category::Distress,
        Tone::Soft,
        "That sounds really hard. Caring for someone takes so much out of you. \
         It's okay to pause and breathe for a moment.",
    ),
    (
        Category::Distress,
        Tone::Directive,
        "You're running on empty. Take a 10-minute break now, away from caregiving tasks.",
    ),
    (
        Category::Medication,
        Tone::Soft,
        "Medication schedules can be a lot to juggle. Would it help to talk through the routine?",
    ),
    (
        Category::Medication,
        Tone::Directive,
        "Check the medication list and mark what's been taken today. I can walk you through it.",
    ),
    (
        Category::Appointment,
        Tone::Soft,
        "Keeping track of appointments is tiring. Let's note the next one so it's off your mind.",
    ),
    (
        Category::Appointment,
        Tone::Directive,
        "Write the appointment down now and set a reminder for the day before.",
    ),
    (
        Category::Lonely,
        Tone::Soft,
        "Caregiving can feel very isolating. You're not alone in this, and I'm glad you said something.",
    ),
    (
        Category::Lonely,
        Tone::Directive,
        "Reach out to one person today, even briefly. A short call makes a real difference.",
    ),
    (
        Category::Anger,
        Tone::Soft,
        "Frustration is a normal part of caregiving. It doesn't make you a bad person.",
    ),
    (
        Category::Anger,
        Tone::Directive,
        "Step out of the room for a few minutes before responding. Cool down first, then decide.",
    ),
    (
        Category::Sadness,
        Tone::Soft,
        "I'm sorry things feel this way. It's okay to be sad; this is genuinely difficult.",
    ),
    (
        Category::Sadness,
        Tone::Directive,
        "Name one small thing that usually lifts you a little, and do it in the next hour.",
    ),
    (
        Category::Gratitude,
        Tone::Soft,
        "You're very welcome. I'm glad I could be here for you.",
    ),
    (
        Category::Gratitude,
        Tone::Directive,
        "Glad it helped. Tell me the next thing you want to tackle.",
    ),
    (
        Category::HelpRequest,
        Tone::Soft,
        "Of course, I'm here. Tell me a bit more about what you need.",
    ),
    (
        Category::HelpRequest,
        Tone::Directive,
        "Tell me exactly what you need help with and we'll take it step by step.",
    ),
    (
        Category::Tasks,
        Tone::Soft,
        "Let's look at your care tasks together, one at a time and with no rush.",
    ),
    (
        Category::Tasks,
        Tone::Directive,
        "Here's the plan: list today's care tasks and pick the single most important one.",
    ),
    (
        Category::Default,
        Tone::Soft,
        "I'm here and listening. How can I support you today?",
    ),
    (
        Category::Default,
        Tone::Directive,
        "I'm ready to help. What's the most pressing thing right now?",
    ),
];

/// Lookup table from (category, tone) to a canned reply.
#[derive(Debug)]
pub struct ReplyTable {
    map: HashMap<(Category, Tone), &'static str>,
}

impl ReplyTable {
    /// Build and validate the table. Fails if any (category, tone)
    /// pair is missing or empty, or if a category's two tones share
    /// the same string.
    pub fn new() -> Result<Self, DialogueError> {
        let mut map = HashMap::with_capacity(REPLIES.len());
        for (category, tone, text) in REPLIES {
            map.insert((*category, *tone), *text);
        }

        for category in Category::ALL {
            let soft = Self::validated(&map, category, Tone::Soft)?;
            let directive = Self::validated(&map, category, Tone::Directive)?;
            if soft == directive {
                return Err(DialogueError::IncompleteReplyTable(format!(
                    "soft and directive replies identical for {}",
                    category.as_str()
                )));
            }
        }

        Ok(Self { map })
    }

    /// Look up a pair during validation: present and non-empty.
    fn validated(
        map: &HashMap<(Category, Tone), &'static str>,
        category: Category,
        tone: Tone,
    ) -> Result<&'static str, DialogueError> {
        match map.get(&(category, tone)) {
            None => Err(DialogueError::IncompleteReplyTable(format!(
                "missing ({}, {})",
                category.as_str(),
                tone.as_str()
            ))),
            Some(text) if text.is_empty() => Err(DialogueError::IncompleteReplyTable(format!(
                "empty reply for ({}, {})",
                category.as_str(),
                tone.as_str()
            ))),
            Some(text) => Ok(*text),
        }
    }

    /// Look up the reply for a (category, tone) pair. A miss means
    /// the table invariant was broken and is reported as an error.
    pub fn reply(&self, category: Category, tone: Tone) -> Result<&'static str, DialogueError> {
        self.map
            .get(&(category, tone))
            .copied()
            .ok_or(DialogueError::MissingReply {
                category: category.as_str(),
                tone: tone.as_str(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_validates() {
        assert!(ReplyTable::new().is_ok());
    }

    #[test]
    fn reply_is_total_over_all_pairs() {
        let table = ReplyTable::new().unwrap();
        for category in Category::ALL {
            for tone in Tone::ALL {
                let text = table.reply(category, tone).unwrap();
                assert!(!text.is_empty());
            }
        }
    }

    #[test]
    fn tones_are_distinct_per_category() {
        let table = ReplyTable::new().unwrap();
        for category in Category::ALL {
            let soft = table.reply(category, Tone::Soft).unwrap();
            let directive = table.reply(category, Tone::Directive).unwrap();
            assert_ne!(soft, directive, "category {}", category.as_str());
        }
    }

    #[test]
    fn support_suggestion_nonempty() {
        assert!(!SUPPORT_SUGGESTION.is_empty());
        assert!(!FEEDBACK_PROMPT.is_empty());
    }
}
