//! Writes the session history to CSV files on disk.

use moodlens_core::Result;
use moodlens_core::history::{HistoryEntry, HistoryStore, parse_csv};
use std::path::{Path, PathBuf};

/// File name used when the user doesn't pick one.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "emotion_history.csv";

/// Exports and re-imports history CSV files.
#[derive(Debug, Clone, Default)]
pub struct HistoryExporter;

impl HistoryExporter {
    pub fn new() -> Self {
        Self
    }

    /// Writes `store` as UTF-8 CSV to `path`, creating parent directories.
    ///
    /// An existing file is overwritten. Returns the path written.
    pub async fn export_to_file(&self, store: &HistoryStore, path: &Path) -> Result<PathBuf> {
        let csv = store.export()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, csv.as_bytes()).await?;

        tracing::info!(entries = store.len(), "Exported history to {:?}", path);
        Ok(path.to_path_buf())
    }

    /// Reads a file previously written by [`export_to_file`](Self::export_to_file).
    pub async fn import_from_file(&self, path: &Path) -> Result<Vec<HistoryEntry>> {
        let content = tokio::fs::read_to_string(path).await?;
        parse_csv(&content)
    }
}
