//! End-to-end tests for the cara turn pipeline.
//!
//! These exercise the full loop without any real scoring backend:
//! text → sentiment → history → classification → tone-keyed reply →
//! burnout suffix → conversation log.

use cara_core::dialogue::classify::{classify, Category};
use cara_core::dialogue::reply::{ReplyTable, SUPPORT_SUGGESTION};
use cara_core::session::ChatSession;
use cara_core::types::{Speaker, Tone, Urgency};
use cara_scorer::provider::MockProvider;

/// Soft tone + distress keywords → the soft distress reply, verbatim.
#[tokio::test]
async fn soft_distress_turn() {
    let mut session =
        ChatSession::new(Tone::Soft, Box::new(MockProvider::new(-0.8))).unwrap();

    let reply = session.process("I feel overwhelmed and tired").await.unwrap();

    let table = ReplyTable::new().unwrap();
    let expected = table.reply(Category::Distress, Tone::Soft).unwrap();
    assert_eq!(reply, expected);

    // The user entry carries the bucketed sentiment.
    let user_entry = &session.log().entries()[0];
    let sentiment = user_entry.sentiment.as_ref().unwrap();
    assert_eq!(sentiment.urgency, Urgency::High);
}

/// Five consecutive turns scoring below -0.3: the fifth reply (and
/// not the fourth) carries the support suggestion.
#[tokio::test]
async fn burnout_suffix_appears_on_fifth_negative_turn() {
    let mut session =
        ChatSession::new(Tone::Soft, Box::new(MockProvider::new(-0.6))).unwrap();

    for turn in 1..=4 {
        let reply = session.process("another rough day").await.unwrap();
        assert!(
            !reply.contains(SUPPORT_SUGGESTION),
            "turn {turn} should not flag burnout yet"
        );
    }

    let fifth = session.process("another rough day").await.unwrap();
    assert!(fifth.contains(SUPPORT_SUGGESTION));
}

/// Backend failure degrades to a neutral result but still replies.
#[tokio::test]
async fn backend_failure_still_produces_reply() {
    let mut session =
        ChatSession::new(Tone::Directive, Box::new(MockProvider::failing())).unwrap();

    let reply = session.process("please help me").await.unwrap();

    let table = ReplyTable::new().unwrap();
    assert_eq!(
        reply,
        table.reply(Category::HelpRequest, Tone::Directive).unwrap()
    );

    let sentiment = session.log().entries()[0].sentiment.as_ref().unwrap();
    assert!(sentiment.score.abs() < f32::EPSILON);
    assert_eq!(sentiment.urgency, Urgency::Low);
}

/// n turns → 2n log entries (user + bot each turn), insertion order,
/// never reordered or pruned.
#[tokio::test]
async fn log_grows_in_insertion_order() {
    let mut session =
        ChatSession::new(Tone::Soft, Box::new(MockProvider::new(0.1))).unwrap();

    let inputs = ["first message", "second message", "third message"];
    for input in inputs {
        session.process(input).await.unwrap();
    }

    let entries = session.log().entries();
    assert_eq!(entries.len(), inputs.len() * 2);
    for (i, input) in inputs.iter().enumerate() {
        assert_eq!(entries[2 * i].speaker, Speaker::User);
        assert_eq!(entries[2 * i].message.text, *input);
        assert_eq!(entries[2 * i + 1].speaker, Speaker::Bot);
    }
}

/// The priority tie-break survives the full pipeline: a message with
/// both distress and gratitude keywords gets the distress reply.
#[tokio::test]
async fn priority_order_preserved_end_to_end() {
    assert_eq!(classify("I am tired but thank you"), Category::Distress);

    let mut session =
        ChatSession::new(Tone::Soft, Box::new(MockProvider::new(0.0))).unwrap();
    let reply = session.process("I am tired but thank you").await.unwrap();

    let table = ReplyTable::new().unwrap();
    assert_eq!(reply, table.reply(Category::Distress, Tone::Soft).unwrap());
}

/// Sessions are independent: two sessions never share log or history.
#[tokio::test]
async fn sessions_are_partitioned() {
    let mut a = ChatSession::new(Tone::Soft, Box::new(MockProvider::new(-0.6))).unwrap();
    let mut b = ChatSession::new(Tone::Soft, Box::new(MockProvider::new(0.6))).unwrap();

    a.process("overwhelmed again").await.unwrap();
    a.process("overwhelmed again").await.unwrap();
    b.process("feeling good").await.unwrap();

    assert_eq!(a.log().len(), 4);
    assert_eq!(b.log().len(), 2);
    assert_eq!(a.history().len(), 2);
    assert_eq!(b.history().len(), 1);
}

/// Transcript export: the log serializes to JSON with both speakers.
#[tokio::test]
async fn transcript_exports_as_json() {
    let mut session =
        ChatSession::new(Tone::Soft, Box::new(MockProvider::new(0.3))).unwrap();
    session.process("thank you").await.unwrap();

    let json = session.log().to_json().unwrap();
    assert!(json.contains("thank you"));
    assert!(json.contains("User"));
    assert!(json.contains("Bot"));
}
