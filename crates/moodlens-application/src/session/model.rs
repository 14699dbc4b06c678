//! The interactive session: owned history plus a handle to the shared classifier.

use super::report::DetectionReport;
use moodlens_core::Result;
use moodlens_core::emotion::annotate;
use moodlens_core::history::{HistoryEntry, HistoryStore};
use moodlens_core::inference::{InferencePolicy, infer};
use moodlens_infrastructure::HistoryExporter;
use moodlens_interaction::ClassifierLoader;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use uuid::Uuid;

/// Per-session behaviour switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionOptions {
    /// Record successful detections in the history
    pub save_history: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self { save_history: true }
    }
}

/// One user's interaction lifetime.
///
/// Each action is a discrete operation; history changes only through
/// [`detect`](Session::detect) and [`clear_history`](Session::clear_history)
/// on this session.
pub struct Session {
    id: String,
    loader: Arc<ClassifierLoader>,
    policy: InferencePolicy,
    options: SessionOptions,
    history: HistoryStore,
}

impl Session {
    pub fn new(
        loader: Arc<ClassifierLoader>,
        policy: InferencePolicy,
        options: SessionOptions,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            loader,
            policy,
            options,
            history: HistoryStore::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn options(&self) -> SessionOptions {
        self.options
    }

    pub fn set_save_history(&mut self, save: bool) {
        self.options.save_history = save;
    }

    pub fn policy(&self) -> &InferencePolicy {
        &self.policy
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Classifies `text`, annotates the top label, and records the result.
    ///
    /// Input is validated before the classifier is loaded or called. On any
    /// error the history is left unchanged.
    pub async fn detect(&mut self, text: &str) -> Result<DetectionReport> {
        self.policy.validate(text)?;

        let classifier = self.loader.get().await?;
        let result = infer(classifier.as_ref(), text, &self.policy).await?;
        let annotation = annotate(result.top_label());

        let recorded = if self.options.save_history {
            let entry = HistoryEntry::from_result(text, &result)?;
            self.history.append(entry.clone());
            Some(entry)
        } else {
            None
        };

        tracing::info!(
            session_id = %self.id,
            emotion = result.top_label(),
            confidence = result.confidence_percent(),
            recorded = recorded.is_some(),
            "Emotion detected"
        );

        Ok(DetectionReport {
            result,
            annotation,
            recorded,
        })
    }

    /// Empties the history. Idempotent.
    pub fn clear_history(&mut self) {
        tracing::info!(session_id = %self.id, cleared = self.history.len(), "History cleared");
        self.history.clear();
    }

    /// History as CSV text.
    pub fn export_history(&self) -> Result<String> {
        self.history.export()
    }

    /// Writes the history as CSV to `path`.
    pub async fn export_history_to(&self, path: &Path) -> Result<PathBuf> {
        HistoryExporter::new()
            .export_to_file(&self.history, path)
            .await
    }
}
