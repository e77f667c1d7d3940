//! Built-in lexicon models.
//!
//! Deterministic keyword-weight scorers that satisfy the model
//! contract without any external inference service. Each produces a
//! score vector in the fixed label order; the neutral slot carries a
//! small baseline so text with no keyword hits classifies as neutral
//! rather than whatever label happens to sit at index zero.

use crate::classify::{EmotionModel, SentimentModel};
use crate::error::SolaceError;

/// Baseline score for the neutral slot of both label sets.
const NEUTRAL_BASELINE: f32 = 0.25;

const ANGER_WORDS: &[&str] = &[
    "angry", "furious", "mad", "rage", "annoyed", "frustrated", "hate", "fed up", "irritated",
];

const DISGUST_WORDS: &[&str] = &[
    "disgust", "gross", "revolting", "nasty", "repulsed", "sickening",
];

const FEAR_WORDS: &[&str] = &[
    "afraid", "scared", "terrified", "anxious", "worried", "panic", "nervous", "frightened",
    "dread",
];

const JOY_WORDS: &[&str] = &[
    "happy", "glad", "great", "wonderful", "excited", "joy", "grateful", "amazing", "love",
    "fantastic", "proud",
];

const SADNESS_WORDS: &[&str] = &[
    "sad", "depressed", "lonely", "crying", "miserable", "hopeless", "grief", "heartbroken",
    "empty inside",
];

const SURPRISE_WORDS: &[&str] = &[
    "surprised", "unexpected", "shocked", "can't believe", "cant believe", "out of nowhere",
    "suddenly",
];

const POSITIVE_WORDS: &[&str] = &[
    "thank", "great", "good", "excellent", "amazing", "wonderful", "helpful", "appreciate",
    "love", "happy", "glad", "perfect", "awesome", "fantastic", "better", "proud", "grateful",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "horrible", "awful", "hate", "angry", "frustrated", "annoyed", "sad",
    "worse", "useless", "broken", "problem", "lonely", "tired", "scared", "worried", "hopeless",
];

const INTENSIFIERS: &[&str] = &["very", "really", "extremely", "so ", "absolutely"];

fn hits(text: &str, words: &[&str]) -> f32 {
    words.iter().filter(|w| text.contains(*w)).count() as f32
}

fn intensity(text: &str) -> f32 {
    if INTENSIFIERS.iter().any(|w| text.contains(w)) {
        1.5
    } else {
        1.0
    }
}

fn normalize(mut scores: Vec<f32>) -> Vec<f32> {
    let sum: f32 = scores.iter().sum();
    if sum > 0.0 {
        for s in &mut scores {
            *s /= sum;
        }
    }
    scores
}

/// Keyword-weight emotion model over the seven-label set.
#[derive(Default)]
pub struct LexiconEmotionModel;

impl LexiconEmotionModel {
    pub fn new() -> Self {
        Self
    }
}

impl EmotionModel for LexiconEmotionModel {
    fn scores(&self, text: &str) -> Result<Vec<f32>, SolaceError> {
        let lowered = text.to_lowercase();
        let boost = intensity(&lowered);

        // Emotion::LABELS order: anger, disgust, fear, joy, neutral, sadness, surprise.
        let scores = vec![
            hits(&lowered, ANGER_WORDS) * boost,
            hits(&lowered, DISGUST_WORDS) * boost,
            hits(&lowered, FEAR_WORDS) * boost,
            hits(&lowered, JOY_WORDS) * boost,
            NEUTRAL_BASELINE,
            hits(&lowered, SADNESS_WORDS) * boost,
            hits(&lowered, SURPRISE_WORDS) * boost,
        ];

        Ok(normalize(scores))
    }
}

/// Keyword-weight sentiment model over the three-label set.
#[derive(Default)]
pub struct LexiconSentimentModel;

impl LexiconSentimentModel {
    pub fn new() -> Self {
        Self
    }
}

impl SentimentModel for LexiconSentimentModel {
    fn scores(&self, text: &str) -> Result<Vec<f32>, SolaceError> {
        let lowered = text.to_lowercase();
        let boost = intensity(&lowered);

        // Sentiment::LABELS order: negative, neutral, positive.
        let scores = vec![
            hits(&lowered, NEGATIVE_WORDS) * boost,
            NEUTRAL_BASELINE,
            hits(&lowered, POSITIVE_WORDS) * boost,
        ];

        Ok(normalize(scores))
    }
}
