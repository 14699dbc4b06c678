//! Emotion vocabulary and the annotation tables keyed by it.

mod annotation;

pub use annotation::{Annotation, DEFAULT_EMOJI, DEFAULT_SUGGESTION, annotate};

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// The closed set of labels the emotion classifier is expected to emit.
///
/// Classifier output is kept as raw strings so that labels outside this set
/// survive ranking and history; `Emotion` is only used where a fixed mapping
/// is needed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Emotion {
    Joy,
    Sadness,
    Anger,
    Fear,
    Surprise,
    Love,
    Neutral,
}

impl Emotion {
    /// Parses a classifier label into the vocabulary.
    ///
    /// Returns `None` for anything outside the vocabulary.
    pub fn from_label(label: &str) -> Option<Self> {
        label.parse().ok()
    }

    /// Returns every emotion in vocabulary order.
    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }

    /// Display emoji for this emotion.
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Joy => "😄",
            Self::Sadness => "😢",
            Self::Anger => "😡",
            Self::Fear => "😨",
            Self::Surprise => "😲",
            Self::Love => "❤️",
            Self::Neutral => "😐",
        }
    }

    /// Static suggestion shown next to a detected emotion.
    pub fn suggestion(self) -> &'static str {
        match self {
            Self::Joy => "Keep going! Stay consistent and enjoy the moment ✨",
            Self::Sadness => "Try talking to a friend or taking a short break 🌿",
            Self::Anger => "Take a deep breath and relax for a minute 🧘",
            Self::Fear => "It's okay to feel nervous. Prepare step-by-step 💪",
            Self::Surprise => "That's interesting! Take a moment to process it 😄",
            Self::Love => "Great! Positive emotions are powerful ❤️",
            Self::Neutral => "Looks calm and balanced. Stay focused 🎯",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_known() {
        assert_eq!(Emotion::from_label("joy"), Some(Emotion::Joy));
        assert_eq!(Emotion::from_label("neutral"), Some(Emotion::Neutral));
    }

    #[test]
    fn test_from_label_unknown() {
        assert_eq!(Emotion::from_label("disgust"), None);
        assert_eq!(Emotion::from_label(""), None);
        assert_eq!(Emotion::from_label("Joy"), None);
    }

    #[test]
    fn test_display_matches_label() {
        for emotion in Emotion::all() {
            assert_eq!(Emotion::from_label(&emotion.to_string()), Some(emotion));
            assert_eq!(emotion.as_ref(), emotion.to_string());
        }
    }

    #[test]
    fn test_vocabulary_size() {
        assert_eq!(Emotion::all().len(), 7);
    }
}
