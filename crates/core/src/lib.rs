//! cara-core — message classification and response selection for a
//! caregiver support chat session.
//!
//! The pipeline per user turn: score the text through a pluggable
//! sentiment backend, bucket the score into urgency and emotions,
//! match the text against priority-ordered keyword categories, look up
//! the tone-conditioned reply, and flag sustained distress from the
//! recent score history. All state lives in an explicitly owned
//! [`session::ChatSession`]; there are no globals.

pub mod config;
pub mod dialogue;
pub mod sentiment;
pub mod session;
pub mod types;
