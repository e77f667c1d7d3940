//! In-memory conversation transcript.
//!
//! Ordered, bounded sequence of turns owned by one engine instance.
//! Turns are immutable once appended. When the cap is exceeded the
//! oldest turn is evicted, so memory stays bounded for long sessions;
//! the on-disk turn log is unaffected by eviction or reset.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::labels::{EmotionTag, Sentiment};

/// One logged exchange: user input, derived labels, generated reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    /// When the turn was produced (UTC)
    pub timestamp: DateTime<Utc>,
    /// User's message, trimmed
    pub user: String,
    /// Emotion label, or the crisis/unavailable marker
    pub emotion: EmotionTag,
    /// Sentiment label
    pub sentiment: Sentiment,
    /// Reply shown to the user, always non-empty
    pub reply: String,
}

impl Turn {
    pub fn new(user: &str, emotion: EmotionTag, sentiment: Sentiment, reply: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            user: user.to_string(),
            emotion,
            sentiment,
            reply: reply.to_string(),
        }
    }
}

/// Bounded ordered history of turns.
#[derive(Debug, Clone)]
pub struct Transcript {
    turns: VecDeque<Turn>,
    max_turns: usize,
}

impl Transcript {
    /// Create an empty transcript holding at most `max_turns` turns.
    pub fn new(max_turns: usize) -> Self {
        Self {
            turns: VecDeque::new(),
            max_turns: max_turns.max(1),
        }
    }

    /// Append a turn, evicting the oldest if the cap is exceeded.
    pub fn push(&mut self, turn: Turn) {
        self.turns.push_back(turn);
        while self.turns.len() > self.max_turns {
            self.turns.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Clear all turns. Does not touch any persisted log.
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Turn> {
        self.turns.iter()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.back()
    }
}
