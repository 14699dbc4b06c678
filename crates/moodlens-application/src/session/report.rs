use moodlens_core::emotion::Annotation;
use moodlens_core::history::HistoryEntry;
use moodlens_core::inference::InferenceResult;
use serde::Serialize;

/// Everything the presentation layer needs after one detection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectionReport {
    pub result: InferenceResult,
    pub annotation: Annotation,
    /// The history entry written, if history saving is on
    pub recorded: Option<HistoryEntry>,
}

impl DetectionReport {
    pub fn top_label(&self) -> &str {
        self.result.top_label()
    }

    pub fn confidence_percent(&self) -> f64 {
        self.result.confidence_percent()
    }
}
