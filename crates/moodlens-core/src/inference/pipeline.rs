//! Text → ranked emotion report.

use super::classifier::EmotionClassifier;
use super::model::InferenceResult;
use crate::error::{MoodlensError, Result, ValidationError};
use serde::{Deserialize, Serialize};

/// Default ceiling on input length, in characters.
pub const DEFAULT_MAX_CHARS: usize = 1000;

/// Input limits applied before the classifier is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferencePolicy {
    /// Maximum input length in Unicode scalar values
    pub max_chars: usize,
}

impl Default for InferencePolicy {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
        }
    }
}

impl InferencePolicy {
    /// Checks `text` against the policy.
    ///
    /// The length ceiling applies to the text as typed, surrounding
    /// whitespace included.
    pub fn validate(&self, text: &str) -> std::result::Result<(), ValidationError> {
        if text.trim().is_empty() {
            return Err(ValidationError::EmptyInput);
        }

        let len = text.chars().count();
        if len > self.max_chars {
            return Err(ValidationError::TooLong {
                len,
                max: self.max_chars,
            });
        }

        Ok(())
    }
}

/// Validates `text`, classifies it once, and ranks the result.
///
/// # Errors
///
/// - [`MoodlensError::Validation`] if the text is blank or too long; the
///   classifier is not called.
/// - [`MoodlensError::Classification`] if the classifier fails or returns an
///   unusable score set.
pub async fn infer(
    classifier: &dyn EmotionClassifier,
    text: &str,
    policy: &InferencePolicy,
) -> Result<InferenceResult> {
    policy.validate(text)?;

    tracing::debug!(
        classifier = classifier.name(),
        chars = text.chars().count(),
        "Classifying text"
    );

    let scores = classifier.classify(text).await.map_err(|e| {
        tracing::warn!(classifier = classifier.name(), "Classifier call failed: {}", e);
        match e {
            MoodlensError::Classification(_) | MoodlensError::ClassifierLoad(_) => e,
            other => MoodlensError::classification(other.to_string()),
        }
    })?;

    if let Some(bad) = scores.iter().find(|s| !s.score.is_finite()) {
        return Err(MoodlensError::classification(format!(
            "Classifier returned a non-finite score for '{}'",
            bad.label
        )));
    }

    let result = InferenceResult::from_scores(scores)
        .ok_or_else(|| MoodlensError::classification("Classifier returned no scores"))?;

    tracing::debug!(
        top_label = result.top_label(),
        confidence = result.confidence_percent(),
        "Classification complete"
    );

    Ok(result)
}
