//! Classification boundary.
//!
//! The underlying models are opaque collaborators: given non-empty
//! text they return a score vector in the fixed label order of their
//! label set. The classifier wrappers own the two defined behaviors
//! on top of that contract: empty/whitespace input short-circuits to
//! neutral without touching the model, and label selection is plain
//! argmax with ties broken by the first-occurring index.

use std::sync::Arc;
use tracing::debug;

use crate::error::SolaceError;
use crate::labels::{Emotion, Sentiment};

/// Opaque emotion model. Scores are returned in `Emotion::LABELS` order.
pub trait EmotionModel: Send + Sync {
    fn scores(&self, text: &str) -> Result<Vec<f32>, SolaceError>;
}

/// Opaque sentiment model. Scores are returned in `Sentiment::LABELS` order.
pub trait SentimentModel: Send + Sync {
    fn scores(&self, text: &str) -> Result<Vec<f32>, SolaceError>;
}

/// Index of the highest score; first index wins ties. None on empty input.
pub(crate) fn argmax(scores: &[f32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, &s) in scores.iter().enumerate() {
        match best {
            Some((_, b)) if s <= b => {}
            _ => best = Some((i, s)),
        }
    }
    best.map(|(i, _)| i)
}

fn select<T: Copy>(labels: &[T], scores: &[f32], kind: &str) -> Result<T, SolaceError> {
    if scores.len() != labels.len() {
        return Err(SolaceError::Classifier(format!(
            "{} model returned {} scores for {} labels",
            kind,
            scores.len(),
            labels.len()
        )));
    }
    // Length checked above, argmax only fails on empty input.
    argmax(scores)
        .map(|i| labels[i])
        .ok_or_else(|| SolaceError::Classifier(format!("{} model returned no scores", kind)))
}

/// Emotion classifier: empty-input short-circuit + argmax over model scores.
#[derive(Clone)]
pub struct EmotionClassifier {
    model: Arc<dyn EmotionModel>,
}

impl EmotionClassifier {
    pub fn new(model: Arc<dyn EmotionModel>) -> Self {
        Self { model }
    }

    /// Predict the dominant emotion for the given text.
    pub fn predict(&self, text: &str) -> Result<Emotion, SolaceError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(Emotion::Neutral);
        }

        let scores = self.model.scores(trimmed)?;
        let label = select(&Emotion::LABELS, &scores, "emotion")?;
        debug!(emotion = %label, "emotion classified");
        Ok(label)
    }
}

/// Sentiment classifier: empty-input short-circuit + argmax over model scores.
#[derive(Clone)]
pub struct SentimentClassifier {
    model: Arc<dyn SentimentModel>,
}

impl SentimentClassifier {
    pub fn new(model: Arc<dyn SentimentModel>) -> Self {
        Self { model }
    }

    /// Predict sentiment (negative / neutral / positive) for the given text.
    pub fn predict(&self, text: &str) -> Result<Sentiment, SolaceError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(Sentiment::Neutral);
        }

        let scores = self.model.scores(trimmed)?;
        let label = select(&Sentiment::LABELS, &scores, "sentiment")?;
        debug!(sentiment = %label, "sentiment classified");
        Ok(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedEmotion {
        scores: Vec<f32>,
        calls: AtomicUsize,
    }

    impl EmotionModel for FixedEmotion {
        fn scores(&self, _text: &str) -> Result<Vec<f32>, SolaceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.scores.clone())
        }
    }

    #[test]
    fn test_argmax_picks_highest() {
        assert_eq!(argmax(&[0.1, 0.7, 0.2]), Some(1));
    }

    #[test]
    fn test_argmax_tie_first_index_wins() {
        assert_eq!(argmax(&[0.4, 0.4, 0.2]), Some(0));
        assert_eq!(argmax(&[0.0, 0.0, 0.0]), Some(0));
    }

    #[test]
    fn test_argmax_empty() {
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn test_empty_input_skips_model() {
        let model = Arc::new(FixedEmotion {
            scores: vec![1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            calls: AtomicUsize::new(0),
        });
        let clf = EmotionClassifier::new(model.clone());

        assert_eq!(clf.predict("").unwrap(), Emotion::Neutral);
        assert_eq!(clf.predict("   \t").unwrap(), Emotion::Neutral);
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_predict_maps_index_to_label() {
        let model = Arc::new(FixedEmotion {
            scores: vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.9, 0.1],
            calls: AtomicUsize::new(0),
        });
        let clf = EmotionClassifier::new(model);
        assert_eq!(clf.predict("anything").unwrap(), Emotion::Sadness);
    }

    #[test]
    fn test_score_length_mismatch_is_error() {
        let model = Arc::new(FixedEmotion {
            scores: vec![0.5, 0.5],
            calls: AtomicUsize::new(0),
        });
        let clf = EmotionClassifier::new(model);
        assert!(clf.predict("anything").is_err());
    }

    struct FailingSentiment;

    impl SentimentModel for FailingSentiment {
        fn scores(&self, _text: &str) -> Result<Vec<f32>, SolaceError> {
            Err(SolaceError::Classifier("model unavailable".into()))
        }
    }

    #[test]
    fn test_model_failure_propagates_to_engine_layer() {
        let clf = SentimentClassifier::new(Arc::new(FailingSentiment));
        assert!(clf.predict("some text").is_err());
        // Empty input never reaches the failing model.
        assert_eq!(clf.predict("  ").unwrap(), Sentiment::Neutral);
    }
}
