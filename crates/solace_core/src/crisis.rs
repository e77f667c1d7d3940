//! Crisis / self-harm keyword detection.
//!
//! Plain substring containment against a fixed phrase list. This is a
//! hard override that must run before any classifier call, so it stays
//! a pure function with no collaborators. False positives are the
//! accepted failure mode; the list enumerates spacing and apostrophe
//! variants explicitly to keep false negatives down.

/// Fixed crisis-indicator phrases, matched against lower-cased input.
pub const CRISIS_KEYWORDS: [&str; 10] = [
    "suicide",
    "kill myself",
    "end my life",
    "self harm",
    "self-harm",
    "hurt myself",
    "die",
    "dont want to live",
    "don't want to live",
    "cut myself",
];

/// Check whether the message contains any crisis indicator.
pub fn is_crisis(text: &str) -> bool {
    let lowered = text.trim().to_lowercase();
    CRISIS_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}
