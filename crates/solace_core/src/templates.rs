//! Fixed reply templates and the tone-adjustment rule.
//!
//! One empathetic sentence per emotion label, plus the crisis safety
//! message and the retry apology used when classification fails. A
//! plain lookup table - no reply-strategy objects.

use crate::labels::{Emotion, Sentiment};

/// Safety message for the crisis override path.
pub const CRISIS_REPLY: &str = "I'm really glad you reached out. I'm only an AI and can't \
provide emergency help, but your feelings are important.\n\n\
Please consider talking to someone you trust or a licensed mental health professional.\n\n\
If you feel you are in immediate danger, contact your local emergency number or visit the \
nearest hospital right away.";

/// Apology returned when a classifier fails; never empty, never raised.
pub const FALLBACK_REPLY: &str =
    "I'm having trouble understanding right now. Could you try saying that again?";

/// Appended when sentiment is negative and the template does not
/// already carry a negative-appropriate tone.
pub const TONE_SUPPLEMENT: &str = " It's okay to take a moment if things feel overwhelming.";

/// Fixed template sentence for an emotion label.
pub fn template_for(emotion: Emotion) -> &'static str {
    match emotion {
        Emotion::Sadness => {
            "I'm really sorry you're feeling this way. Want to share what's hurting you?"
        }
        Emotion::Anger => {
            "It's okay to feel angry. I'm here to understand - what made you feel this way?"
        }
        Emotion::Fear => "That sounds frightening. You can talk to me safely.",
        Emotion::Joy => "That's wonderful to hear! I'm glad you're feeling positive.",
        Emotion::Disgust => {
            "That must feel uncomfortable. I'm here to listen if you want to share more."
        }
        Emotion::Surprise => "That sounds unexpected! How are you feeling about it?",
        Emotion::Neutral => "I'm here with you. Feel free to share anything on your mind.",
    }
}

/// Build the supportive reply: template lookup, then tone adjustment.
///
/// Sadness and fear templates already read appropriately for negative
/// sentiment, so the supplement is only appended for the other labels.
pub fn supportive_reply(emotion: Emotion, sentiment: Sentiment) -> String {
    let mut reply = template_for(emotion).to_string();

    if sentiment == Sentiment::Negative
        && !matches!(emotion, Emotion::Sadness | Emotion::Fear)
    {
        reply.push_str(TONE_SUPPLEMENT);
    }

    reply
}
