//! Response engine.
//!
//! Orchestrates the crisis override, the two classifiers, and the
//! template reply, then records the turn in the transcript and the
//! best-effort turn log. A call never fails: classifier errors are
//! recovered into a fixed fallback response and log errors are
//! swallowed, so the conversational surface always returns something.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::classify::{EmotionClassifier, EmotionModel, SentimentClassifier, SentimentModel};
use crate::config::SolaceConfig;
use crate::crisis::is_crisis;
use crate::labels::{EmotionTag, Sentiment};
use crate::lexicon::{LexiconEmotionModel, LexiconSentimentModel};
use crate::templates::{supportive_reply, CRISIS_REPLY, FALLBACK_REPLY};
use crate::transcript::{Transcript, Turn};
use crate::turn_log::TurnLog;

/// Result of one engine call.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Response {
    pub emotion: EmotionTag,
    pub sentiment: Sentiment,
    pub reply: String,
}

/// One engine instance per conversation/session. Synchronous; each
/// call is independent except for the accumulating transcript.
pub struct ResponseEngine {
    emotion: EmotionClassifier,
    sentiment: SentimentClassifier,
    transcript: Transcript,
    log: Option<TurnLog>,
}

impl ResponseEngine {
    /// Build an engine with injected models.
    pub fn new(
        config: &SolaceConfig,
        emotion_model: Arc<dyn EmotionModel>,
        sentiment_model: Arc<dyn SentimentModel>,
    ) -> Self {
        let log = config
            .logging_enabled
            .then(|| TurnLog::new(&config.log_file));

        Self {
            emotion: EmotionClassifier::new(emotion_model),
            sentiment: SentimentClassifier::new(sentiment_model),
            transcript: Transcript::new(config.max_turns),
            log,
        }
    }

    /// Build an engine backed by the built-in lexicon models.
    pub fn with_defaults(config: &SolaceConfig) -> Self {
        Self::new(
            config,
            Arc::new(LexiconEmotionModel::new()),
            Arc::new(LexiconSentimentModel::new()),
        )
    }

    /// Process user input and return an empathetic response.
    pub fn get_response(&mut self, user_input: &str) -> Response {
        let trimmed = user_input.trim();

        // Crisis check first - hard override, classifiers untouched.
        let (emotion, sentiment, reply) = if is_crisis(trimmed) {
            debug!("crisis keywords detected, safety override");
            (EmotionTag::Crisis, Sentiment::Negative, CRISIS_REPLY.to_string())
        } else {
            let classified = self
                .emotion
                .predict(trimmed)
                .and_then(|e| self.sentiment.predict(trimmed).map(|s| (e, s)));

            match classified {
                Ok((emotion, sentiment)) => (
                    EmotionTag::Label(emotion),
                    sentiment,
                    supportive_reply(emotion, sentiment),
                ),
                Err(err) => {
                    warn!(%err, "classification failed, using fallback reply");
                    (
                        EmotionTag::Unavailable,
                        Sentiment::Neutral,
                        FALLBACK_REPLY.to_string(),
                    )
                }
            }
        };

        let turn = Turn::new(trimmed, emotion, sentiment, &reply);
        self.transcript.push(turn.clone());

        if let Some(log) = &self.log {
            // Best-effort: a failed write never aborts the response.
            if let Err(err) = log.append(&turn) {
                warn!(%err, path = %log.path().display(), "failed to log turn");
            }
        }

        Response {
            emotion,
            sentiment,
            reply,
        }
    }

    /// Clear the in-memory transcript. The on-disk log is untouched.
    pub fn reset_conversation(&mut self) {
        self.transcript.clear();
    }

    /// Read-only view of the conversation so far.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }
}
