use super::model::EmotionScore;
use crate::error::Result;
use async_trait::async_trait;

/// A text-classification backend returning scores for every label it knows.
///
/// Implementations must return the full label distribution, not just the
/// arg-max, and must not retry internally.
#[async_trait]
pub trait EmotionClassifier: Send + Sync {
    /// Classifies `text`, returning one score per label.
    async fn classify(&self, text: &str) -> Result<Vec<EmotionScore>>;

    /// Short identifier of the backend and model (for logs and display).
    fn name(&self) -> &str;
}
