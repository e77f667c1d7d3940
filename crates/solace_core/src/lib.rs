//! Shared core for Solace, a rule-based empathetic support chatbot.
//!
//! Crisis keyword override, pluggable emotion/sentiment classifiers,
//! fixed template replies with tone adjustment, a bounded in-memory
//! transcript, and a best-effort append-only turn log.

pub mod classify;
pub mod config;
pub mod crisis;
pub mod engine;
pub mod error;
pub mod labels;
pub mod lexicon;
pub mod templates;
pub mod transcript;
pub mod turn_log;

pub use classify::{EmotionClassifier, EmotionModel, SentimentClassifier, SentimentModel};
pub use config::SolaceConfig;
pub use crisis::is_crisis;
pub use engine::{Response, ResponseEngine};
pub use error::SolaceError;
pub use labels::{Emotion, EmotionTag, Sentiment};
pub use transcript::{Transcript, Turn};
pub use turn_log::TurnLog;
