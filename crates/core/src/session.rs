//! Per-session context: conversation log, sentiment history, tone,
//! and the scoring backend. One session per user; sessions share
//! nothing.

use cara_scorer::provider::SentimentProvider;

use crate::dialogue::burnout::is_burned_out;
use crate::dialogue::classify::classify;
use crate::dialogue::reply::{ReplyTable, SUPPORT_SUGGESTION};
use crate::dialogue::DialogueError;
use crate::sentiment;
use crate::types::{
    ConversationLog, LogEntry, Message, SentimentHistory, Speaker, Tone,
};

/// Owned state for one chat session. Replaces the ambient globals of
/// earlier iterations: everything the pipeline touches lives here and
/// is passed explicitly.
pub struct ChatSession {
    tone: Tone,
    provider: Box<dyn SentimentProvider>,
    replies: ReplyTable,
    log: ConversationLog,
    history: SentimentHistory,
}

impl ChatSession {
    /// Create a session. Validates the reply table up front so a
    /// broken table fails at startup, not mid-conversation.
    pub fn new(tone: Tone, provider: Box<dyn SentimentProvider>) -> Result<Self, DialogueError> {
        Ok(Self {
            tone,
            provider,
            replies: ReplyTable::new()?,
            log: ConversationLog::new(),
            history: SentimentHistory::new(),
        })
    }

    /// Run one user turn through the pipeline:
    /// score → record score → classify → tone-keyed reply →
    /// burnout suffix → log both sides. Returns the reply text.
    pub async fn process(&mut self, text: &str) -> Result<String, DialogueError> {
        let message = Message::new(text);
        let result = sentiment::analyze(self.provider.as_ref(), text).await;
        self.history.push(result.score);

        let category = classify(text);
        let mut reply = self.replies.reply(category, self.tone)?.to_owned();

        let burned_out = is_burned_out(&self.history);
        if burned_out {
            reply.push_str(SUPPORT_SUGGESTION);
        }

        tracing::debug!(
            category = category.as_str(),
            tone = self.tone.as_str(),
            score = result.score,
            urgency = result.urgency.as_str(),
            burned_out,
            "processed turn"
        );

        self.log.append(LogEntry {
            speaker: Speaker::User,
            message,
            sentiment: Some(result),
        });
        self.log.append(LogEntry {
            speaker: Speaker::Bot,
            message: Message::new(reply.clone()),
            sentiment: None,
        });

        Ok(reply)
    }

    /// Switch the reply tone mid-session. The enum parameter makes an
    /// invalid tone unrepresentable here; parsing happens at the
    /// config boundary.
    pub fn set_tone(&mut self, tone: Tone) {
        self.tone = tone;
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    /// Read-only transcript for exporters and display.
    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    pub fn history(&self) -> &SentimentHistory {
        &self.history
    }

    /// Mean of the last `n` recorded scores (mood trend display).
    pub fn mood_trend(&self, n: usize) -> Option<f32> {
        self.history.trend(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cara_scorer::provider::MockProvider;

    fn session(tone: Tone, score: f32) -> ChatSession {
        ChatSession::new(tone, Box::new(MockProvider::new(score))).unwrap()
    }

    #[tokio::test]
    async fn turn_appends_user_and_bot_entries() {
        let mut s = session(Tone::Soft, 0.2);
        let reply = s.process("hello there").await.unwrap();

        assert_eq!(s.log().len(), 2);
        let entries = s.log().entries();
        assert_eq!(entries[0].speaker, Speaker::User);
        assert_eq!(entries[0].message.text, "hello there");
        assert!(entries[0].sentiment.is_some());
        assert_eq!(entries[1].speaker, Speaker::Bot);
        assert_eq!(entries[1].message.text, reply);
        assert!(entries[1].sentiment.is_none());
    }

    #[tokio::test]
    async fn tone_switch_changes_reply() {
        let mut s = session(Tone::Soft, 0.2);
        let soft = s.process("thank you").await.unwrap();
        s.set_tone(Tone::Directive);
        let directive = s.process("thank you").await.unwrap();
        assert_ne!(soft, directive);
    }

    #[tokio::test]
    async fn history_records_every_turn() {
        let mut s = session(Tone::Soft, -0.2);
        for _ in 0..3 {
            s.process("just checking in").await.unwrap();
        }
        assert_eq!(s.history().len(), 3);
        assert!(s.mood_trend(3).is_some());
    }
}
