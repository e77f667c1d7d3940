//! Closed label sets for the emotion and sentiment classifiers.
//!
//! Label index order matches the score-vector order the models emit,
//! so argmax over a score vector maps straight back to a label.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Raised when a label string is outside its closed set.
#[derive(Debug, thiserror::Error)]
#[error("unknown label: {0}")]
pub struct UnknownLabel(String);

/// Emotion label, one of seven fixed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Anger,
    Disgust,
    Fear,
    Joy,
    Neutral,
    Sadness,
    Surprise,
}

impl Emotion {
    /// Fixed label order - index i corresponds to score vector position i.
    pub const LABELS: [Emotion; 7] = [
        Emotion::Anger,
        Emotion::Disgust,
        Emotion::Fear,
        Emotion::Joy,
        Emotion::Neutral,
        Emotion::Sadness,
        Emotion::Surprise,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Anger => "anger",
            Emotion::Disgust => "disgust",
            Emotion::Fear => "fear",
            Emotion::Joy => "joy",
            Emotion::Neutral => "neutral",
            Emotion::Sadness => "sadness",
            Emotion::Surprise => "surprise",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Emotion {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Emotion::LABELS
            .iter()
            .copied()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}

/// Sentiment label, one of three fixed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Negative,
    Neutral,
    Positive,
}

impl Sentiment {
    /// Fixed label order - index i corresponds to score vector position i.
    pub const LABELS: [Sentiment; 3] =
        [Sentiment::Negative, Sentiment::Neutral, Sentiment::Positive];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
            Sentiment::Positive => "positive",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sentiment::LABELS
            .iter()
            .copied()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}

/// Emotion field of a turn: a real classifier label, the crisis
/// marker when the safety override fired, or the unavailable
/// sentinel when classification failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmotionTag {
    Label(Emotion),
    Crisis,
    Unavailable,
}

impl EmotionTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionTag::Label(e) => e.as_str(),
            EmotionTag::Crisis => "crisis",
            EmotionTag::Unavailable => "unavailable",
        }
    }

    /// True when this tag is a real label from the closed emotion set.
    pub fn is_label(&self) -> bool {
        matches!(self, EmotionTag::Label(_))
    }
}

impl fmt::Display for EmotionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Emotion> for EmotionTag {
    fn from(e: Emotion) -> Self {
        EmotionTag::Label(e)
    }
}

impl FromStr for EmotionTag {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "crisis" => Ok(EmotionTag::Crisis),
            "unavailable" => Ok(EmotionTag::Unavailable),
            other => other.parse::<Emotion>().map(EmotionTag::Label),
        }
    }
}

// Tags serialize as their plain lowercase string so log records read
// the same whether the field holds a label or a marker.
impl Serialize for EmotionTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EmotionTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
