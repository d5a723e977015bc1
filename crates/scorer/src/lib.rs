//! Pluggable sentiment backends for the cara chat core.
//!
//! The core only ever sees the [`provider::SentimentProvider`] trait:
//! a text-in, polarity-out black box. Backends here range from the
//! deterministic [`lexicon::LexiconScorer`] to an HTTP adapter for
//! remote scoring services.

pub mod http;
pub mod lexicon;
pub mod provider;
