use super::Emotion;
use serde::{Deserialize, Serialize};

/// Emoji used when a label has no entry in the emoji table.
pub const DEFAULT_EMOJI: &str = "🙂";

/// Suggestion used when a label has no entry in the suggestion table.
pub const DEFAULT_SUGGESTION: &str = "Stay positive and keep improving!";

/// Display decoration derived from a top label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub emoji: String,
    pub suggestion: String,
}

/// Maps a label to its emoji and suggestion.
///
/// Total: labels outside the vocabulary get [`DEFAULT_EMOJI`] and
/// [`DEFAULT_SUGGESTION`].
pub fn annotate(label: &str) -> Annotation {
    match Emotion::from_label(label) {
        Some(emotion) => Annotation {
            emoji: emotion.emoji().to_string(),
            suggestion: emotion.suggestion().to_string(),
        },
        None => Annotation {
            emoji: DEFAULT_EMOJI.to_string(),
            suggestion: DEFAULT_SUGGESTION.to_string(),
        },
    }
}
