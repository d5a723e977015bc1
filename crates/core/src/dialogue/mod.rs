//! Dialogue logic: keyword classification, tone-keyed replies, and
//! the burnout-streak heuristic.

pub mod burnout;
pub mod classify;
pub mod reply;

/// Error type for dialogue operations. These are caller contract
/// violations (bad tone value, broken reply table), so they surface
/// loudly instead of defaulting.
#[derive(Debug, thiserror::Error)]
pub enum DialogueError {
    #[error("unknown tone {0:?}, expected \"soft\" or \"directive\"")]
    UnknownTone(String),
    #[error("reply table incomplete: {0}")]
    IncompleteReplyTable(String),
    #[error("no reply for category {category} with tone {tone}")]
    MissingReply {
        category: &'static str,
        tone: &'static str,
    },
}
