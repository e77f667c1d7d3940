//! Response engine end-to-end tests with mocked classifier models.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use solace_core::classify::{EmotionModel, SentimentModel};
use solace_core::templates::{CRISIS_REPLY, FALLBACK_REPLY, TONE_SUPPLEMENT};
use solace_core::{Emotion, EmotionTag, ResponseEngine, Sentiment, SolaceConfig, SolaceError, TurnLog};

/// Mock emotion model returning a fixed score vector, counting calls.
struct MockEmotion {
    scores: Vec<f32>,
    calls: AtomicUsize,
}

impl MockEmotion {
    fn for_label(label: Emotion) -> Arc<Self> {
        let mut scores = vec![0.0; Emotion::LABELS.len()];
        let idx = Emotion::LABELS.iter().position(|e| *e == label).unwrap();
        scores[idx] = 1.0;
        Arc::new(Self {
            scores,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl EmotionModel for MockEmotion {
    fn scores(&self, _text: &str) -> Result<Vec<f32>, SolaceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.scores.clone())
    }
}

/// Mock sentiment model returning a fixed score vector, counting calls.
struct MockSentiment {
    scores: Vec<f32>,
    calls: AtomicUsize,
}

impl MockSentiment {
    fn for_label(label: Sentiment) -> Arc<Self> {
        let mut scores = vec![0.0; Sentiment::LABELS.len()];
        let idx = Sentiment::LABELS.iter().position(|s| *s == label).unwrap();
        scores[idx] = 1.0;
        Arc::new(Self {
            scores,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SentimentModel for MockSentiment {
    fn scores(&self, _text: &str) -> Result<Vec<f32>, SolaceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.scores.clone())
    }
}

/// Model that always errors, standing in for an unavailable backend.
struct BrokenModel;

impl EmotionModel for BrokenModel {
    fn scores(&self, _text: &str) -> Result<Vec<f32>, SolaceError> {
        Err(SolaceError::Classifier("inference backend down".into()))
    }
}

impl SentimentModel for BrokenModel {
    fn scores(&self, _text: &str) -> Result<Vec<f32>, SolaceError> {
        Err(SolaceError::Classifier("inference backend down".into()))
    }
}

fn quiet_config() -> SolaceConfig {
    SolaceConfig {
        logging_enabled: false,
        ..SolaceConfig::default()
    }
}

fn engine_with(
    emotion: Arc<MockEmotion>,
    sentiment: Arc<MockSentiment>,
) -> ResponseEngine {
    ResponseEngine::new(&quiet_config(), emotion, sentiment)
}

#[test]
fn crisis_input_short_circuits_classifiers() {
    let emotion = MockEmotion::for_label(Emotion::Joy);
    let sentiment = MockSentiment::for_label(Sentiment::Positive);
    let mut engine = engine_with(emotion.clone(), sentiment.clone());

    let response = engine.get_response("I want to kill myself");

    assert_eq!(response.emotion, EmotionTag::Crisis);
    assert_eq!(response.sentiment, Sentiment::Negative);
    assert_eq!(response.reply, CRISIS_REPLY);
    assert_eq!(emotion.calls(), 0);
    assert_eq!(sentiment.calls(), 0);
}

#[test]
fn crisis_detection_ignores_case_and_context() {
    let emotion = MockEmotion::for_label(Emotion::Neutral);
    let sentiment = MockSentiment::for_label(Sentiment::Neutral);
    let mut engine = engine_with(emotion, sentiment);

    for input in [
        "SUICIDE has been on my mind",
        "lately i dont want to live.",
        "...self-harm...",
    ] {
        let response = engine.get_response(input);
        assert_eq!(response.emotion, EmotionTag::Crisis, "input: {input}");
        assert!(response.reply.contains("emergency"));
    }
}

#[test]
fn non_crisis_labels_come_from_closed_sets() {
    let emotion = MockEmotion::for_label(Emotion::Surprise);
    let sentiment = MockSentiment::for_label(Sentiment::Neutral);
    let mut engine = engine_with(emotion, sentiment);

    let response = engine.get_response("well that was odd");
    assert!(response.emotion.is_label());
    assert!(!response.reply.is_empty());
}

#[test]
fn identical_input_yields_identical_reply() {
    let emotion = MockEmotion::for_label(Emotion::Anger);
    let sentiment = MockSentiment::for_label(Sentiment::Negative);
    let mut engine = engine_with(emotion, sentiment);

    let first = engine.get_response("this is infuriating").reply;
    let second = engine.get_response("this is infuriating").reply;
    assert_eq!(first, second);
}

#[test]
fn negative_anger_gets_tone_supplement() {
    let emotion = MockEmotion::for_label(Emotion::Anger);
    let sentiment = MockSentiment::for_label(Sentiment::Negative);
    let mut engine = engine_with(emotion, sentiment);

    let reply = engine.get_response("everything is broken").reply;
    assert!(reply.ends_with(TONE_SUPPLEMENT));
}

#[test]
fn negative_sadness_keeps_plain_template() {
    let emotion = MockEmotion::for_label(Emotion::Sadness);
    let sentiment = MockSentiment::for_label(Sentiment::Negative);
    let mut engine = engine_with(emotion, sentiment);

    let reply = engine.get_response("I feel awful").reply;
    assert!(!reply.contains(TONE_SUPPLEMENT.trim()));
}

#[test]
fn joy_template_without_supplement() {
    let emotion = MockEmotion::for_label(Emotion::Joy);
    let sentiment = MockSentiment::for_label(Sentiment::Positive);
    let mut engine = engine_with(emotion, sentiment);

    let reply = engine.get_response("I am so happy today").reply;
    assert_eq!(
        reply,
        "That's wonderful to hear! I'm glad you're feeling positive."
    );
}

#[test]
fn empty_input_is_neutral_without_model_calls() {
    let emotion = MockEmotion::for_label(Emotion::Joy);
    let sentiment = MockSentiment::for_label(Sentiment::Positive);
    let mut engine = engine_with(emotion.clone(), sentiment.clone());

    for input in ["", "   ", "\t\n"] {
        let response = engine.get_response(input);
        assert_eq!(response.emotion, EmotionTag::Label(Emotion::Neutral));
        assert_eq!(response.sentiment, Sentiment::Neutral);
        assert!(!response.reply.is_empty());
    }

    assert_eq!(emotion.calls(), 0);
    assert_eq!(sentiment.calls(), 0);
}

#[test]
fn reset_clears_history_then_restarts_fresh() {
    let emotion = MockEmotion::for_label(Emotion::Neutral);
    let sentiment = MockSentiment::for_label(Sentiment::Neutral);
    let mut engine = engine_with(emotion, sentiment);

    for n in 0..4 {
        engine.get_response(&format!("message {n}"));
    }
    assert_eq!(engine.transcript().len(), 4);

    engine.reset_conversation();
    assert_eq!(engine.transcript().len(), 0);

    engine.get_response("hello again");
    assert_eq!(engine.transcript().len(), 1);
}

#[test]
fn broken_emotion_model_falls_back_without_panicking() {
    let sentiment = MockSentiment::for_label(Sentiment::Positive);
    let mut engine =
        ResponseEngine::new(&quiet_config(), Arc::new(BrokenModel), sentiment);

    let response = engine.get_response("how are you");
    assert_eq!(response.emotion, EmotionTag::Unavailable);
    assert_eq!(response.sentiment, Sentiment::Neutral);
    assert_eq!(response.reply, FALLBACK_REPLY);
}

#[test]
fn broken_sentiment_model_falls_back_without_panicking() {
    let emotion = MockEmotion::for_label(Emotion::Joy);
    let mut engine =
        ResponseEngine::new(&quiet_config(), emotion, Arc::new(BrokenModel));

    let response = engine.get_response("how are you");
    assert_eq!(response.emotion, EmotionTag::Unavailable);
    assert_eq!(response.reply, FALLBACK_REPLY);
}

#[test]
fn fallback_turn_still_recorded() {
    let mut engine = ResponseEngine::new(
        &quiet_config(),
        Arc::new(BrokenModel),
        Arc::new(BrokenModel),
    );

    engine.get_response("anyone there?");
    let turn = engine.transcript().last().unwrap();
    assert_eq!(turn.emotion, EmotionTag::Unavailable);
    assert!(!turn.reply.is_empty());
}

#[test]
fn turns_are_written_to_the_log() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("log.jsonl");
    let config = SolaceConfig {
        log_file: log_path.clone(),
        logging_enabled: true,
        ..SolaceConfig::default()
    };

    let mut engine = ResponseEngine::new(
        &config,
        MockEmotion::for_label(Emotion::Fear),
        MockSentiment::for_label(Sentiment::Negative),
    );
    engine.get_response("I'm scared about tomorrow");
    engine.reset_conversation();

    // Reset clears memory only; the log keeps its records.
    let logged = TurnLog::new(&log_path).read_all().unwrap();
    assert_eq!(logged.len(), 1);
    assert_eq!(logged[0].emotion, EmotionTag::Label(Emotion::Fear));
}

#[test]
fn unwritable_log_path_does_not_break_responses() {
    let config = SolaceConfig {
        log_file: "/proc/solace/definitely/not/writable.jsonl".into(),
        logging_enabled: true,
        ..SolaceConfig::default()
    };

    let mut engine = ResponseEngine::new(
        &config,
        MockEmotion::for_label(Emotion::Neutral),
        MockSentiment::for_label(Sentiment::Neutral),
    );

    let response = engine.get_response("still works");
    assert!(!response.reply.is_empty());
    assert_eq!(engine.transcript().len(), 1);
}

#[test]
fn transcript_respects_configured_cap() {
    let config = SolaceConfig {
        max_turns: 3,
        logging_enabled: false,
        ..SolaceConfig::default()
    };
    let mut engine = ResponseEngine::new(
        &config,
        MockEmotion::for_label(Emotion::Neutral),
        MockSentiment::for_label(Sentiment::Neutral),
    );

    for n in 0..10 {
        engine.get_response(&format!("message {n}"));
    }
    assert_eq!(engine.transcript().len(), 3);
    assert_eq!(engine.transcript().last().unwrap().user, "message 9");
}
