//! CSV encoding of the session history.
//!
//! Format: header `Time,Text,Emotion,Confidence(%)`, `\n` line endings,
//! fields quoted only when they contain a comma, quote, or line break.

use super::model::HistoryEntry;
use crate::error::{MoodlensError, Result};
use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};

/// Column names of the exported history table.
pub const CSV_HEADER: [&str; 4] = ["Time", "Text", "Emotion", "Confidence(%)"];

/// Serializes `entries` to CSV text, header first.
///
/// The header is always written, so an empty history yields one line.
pub fn to_csv(entries: &[HistoryEntry]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for entry in entries {
        writer.serialize(entry)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| MoodlensError::export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| MoodlensError::export(e.to_string()))
}

/// Parses CSV text produced by [`to_csv`] back into entries.
///
/// The header row must match [`CSV_HEADER`] exactly.
pub fn parse_csv(data: &str) -> Result<Vec<HistoryEntry>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(data.as_bytes());

    let headers = reader.headers()?.clone();
    if headers.iter().ne(CSV_HEADER.iter().copied()) {
        return Err(MoodlensError::export(format!(
            "Unexpected history header: {}",
            headers.iter().collect::<Vec<_>>().join(",")
        )));
    }

    let mut entries = Vec::new();
    for record in reader.deserialize() {
        let entry: HistoryEntry = record?;
        entries.push(entry);
    }
    Ok(entries)
}
