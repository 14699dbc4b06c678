//! Offline keyword classifier.
//!
//! Counts cue words per emotion and normalises the counts into a
//! distribution over the full vocabulary. Text with no cue words ranks
//! `neutral` first.

use async_trait::async_trait;
use moodlens_core::Result;
use moodlens_core::emotion::Emotion;
use moodlens_core::inference::{EmotionClassifier, EmotionScore};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Added to every label so that no score is exactly zero.
const SMOOTHING: f64 = 0.1;

/// Baseline weight for `neutral` before any cue words are counted.
const NEUTRAL_PRIOR: f64 = 0.5;

static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z]+(?:'[a-z]+)?").expect("word pattern is valid"));

static LEXICON: Lazy<HashMap<&'static str, Emotion>> = Lazy::new(|| {
    let entries: [(Emotion, &[&str]); 6] = [
        (
            Emotion::Joy,
            &[
                "happy", "glad", "joy", "joyful", "excited", "delighted", "wonderful",
                "awesome", "thrilled", "fantastic", "cheerful", "proud", "yay", "great",
                "amazing", "celebrate", "fun", "smile",
            ],
        ),
        (
            Emotion::Sadness,
            &[
                "sad", "unhappy", "depressed", "lonely", "miss", "cry", "crying", "tears",
                "heartbroken", "grief", "sorrow", "gloomy", "hopeless", "lost", "down",
                "disappointed",
            ],
        ),
        (
            Emotion::Anger,
            &[
                "angry", "mad", "furious", "annoyed", "hate", "irritated", "rage",
                "frustrated", "outraged", "upset", "livid", "resent", "unfair",
            ],
        ),
        (
            Emotion::Fear,
            &[
                "afraid", "anxious", "anxiety", "nervous", "scared", "terrified", "worried",
                "worry", "panic", "fear", "frightened", "dread", "uneasy", "tense",
            ],
        ),
        (
            Emotion::Surprise,
            &[
                "surprised", "surprise", "wow", "unexpected", "shocked", "amazed",
                "astonished", "suddenly", "unbelievable", "whoa",
            ],
        ),
        (
            Emotion::Love,
            &[
                "love", "loved", "adore", "loving", "caring", "affection", "sweetheart",
                "darling", "cherish", "romantic", "beloved",
            ],
        ),
    ];

    let mut lexicon = HashMap::new();
    for (emotion, words) in entries {
        for word in words {
            lexicon.insert(*word, emotion);
        }
    }
    lexicon
});

/// Keyword-based classifier that needs no network or model files.
#[derive(Debug, Clone, Default)]
pub struct LexiconClassifier;

impl LexiconClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Scores `text` synchronously; scores sum to 1 and follow vocabulary order.
    pub fn score(&self, text: &str) -> Vec<EmotionScore> {
        let lowered = text.to_lowercase();
        let mut hits: HashMap<Emotion, f64> = HashMap::new();
        for word in WORD_RE.find_iter(&lowered) {
            if let Some(emotion) = LEXICON.get(word.as_str()) {
                *hits.entry(*emotion).or_insert(0.0) += 1.0;
            }
        }

        let raw: Vec<(Emotion, f64)> = Emotion::all()
            .into_iter()
            .map(|emotion| {
                let base = if emotion == Emotion::Neutral {
                    NEUTRAL_PRIOR
                } else {
                    hits.get(&emotion).copied().unwrap_or(0.0)
                };
                (emotion, base + SMOOTHING)
            })
            .collect();

        let total: f64 = raw.iter().map(|(_, w)| w).sum();
        raw.into_iter()
            .map(|(emotion, weight)| EmotionScore::new(emotion.to_string(), weight / total))
            .collect()
    }
}

#[async_trait]
impl EmotionClassifier for LexiconClassifier {
    async fn classify(&self, text: &str) -> Result<Vec<EmotionScore>> {
        Ok(self.score(text))
    }

    fn name(&self) -> &str {
        "lexicon"
    }
}
