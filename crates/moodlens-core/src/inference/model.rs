//! Inference data model.

use serde::{Deserialize, Serialize};

/// One classifier output pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionScore {
    /// Label as emitted by the classifier (e.g. `"joy"`)
    pub label: String,
    /// Independent score in `[0, 1]`
    pub score: f64,
}

impl EmotionScore {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }

    /// Score expressed as a percentage rounded to two decimals.
    pub fn percent(&self) -> f64 {
        round2(self.score * 100.0)
    }
}

/// Ranked classifier output for a single piece of text.
///
/// Constructed only through [`InferenceResult::from_scores`], which guarantees
/// that `ranked_scores` is non-empty and sorted by descending score, and that
/// `top_label`/`confidence_percent` describe its first element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceResult {
    ranked_scores: Vec<EmotionScore>,
    top_label: String,
    confidence_percent: f64,
}

impl InferenceResult {
    /// Ranks raw classifier output.
    ///
    /// The sort is stable, so equal scores keep the classifier's emission
    /// order. Returns `None` when `scores` is empty.
    pub fn from_scores(mut scores: Vec<EmotionScore>) -> Option<Self> {
        scores.sort_by(|a, b| b.score.total_cmp(&a.score));
        let top = scores.first()?;
        let top_label = top.label.clone();
        let confidence_percent = top.score * 100.0;

        Some(Self {
            ranked_scores: scores,
            top_label,
            confidence_percent,
        })
    }

    pub fn ranked_scores(&self) -> &[EmotionScore] {
        &self.ranked_scores
    }

    pub fn top_label(&self) -> &str {
        &self.top_label
    }

    /// Top score times 100, unrounded.
    pub fn confidence_percent(&self) -> f64 {
        self.confidence_percent
    }

    /// Rows for the score table: label and percentage rounded to two decimals.
    pub fn percent_table(&self) -> Vec<(String, f64)> {
        self.ranked_scores
            .iter()
            .map(|s| (s.label.clone(), s.percent()))
            .collect()
    }
}

/// Rounds to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
