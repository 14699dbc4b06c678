use super::csv_codec;
use super::model::HistoryEntry;
use crate::error::Result;

/// Append-only log of detections made during one session.
///
/// Entries are never modified after they are appended; the only removal is a
/// full [`clear`](HistoryStore::clear).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryStore {
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `entry` to the end of the log. No deduplication.
    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Removes every entry. Idempotent.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes the whole log as CSV with a header row.
    pub fn export(&self) -> Result<String> {
        csv_codec::to_csv(&self.entries)
    }

    /// Number of entries per emotion, in order of first appearance.
    pub fn emotion_counts(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for entry in &self.entries {
            match counts.iter_mut().find(|(label, _)| label == entry.emotion()) {
                Some((_, count)) => *count += 1,
                None => counts.push((entry.emotion().to_string(), 1)),
            }
        }
        counts
    }
}
