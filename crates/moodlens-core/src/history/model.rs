//! History entry model.

use crate::error::{Result, ValidationError};
use crate::inference::{InferenceResult, round2};
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// `strftime` pattern used for history timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One past detection, as shown in the history table and written to CSV.
///
/// Field names map to the CSV header `Time,Text,Emotion,Confidence(%)`.
/// The confidence is always finite and rounded to two decimals, so an entry
/// survives an export and re-import unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(rename = "Time")]
    timestamp: String,
    #[serde(rename = "Text")]
    input_text: String,
    #[serde(rename = "Emotion")]
    emotion: String,
    #[serde(
        rename = "Confidence(%)",
        serialize_with = "serialize_two_decimals",
        deserialize_with = "deserialize_confidence"
    )]
    confidence_percent: f64,
}

impl HistoryEntry {
    /// Creates an entry stamped with the current local time.
    ///
    /// Fails when `confidence_percent` is NaN or infinite.
    pub fn new(
        input_text: impl Into<String>,
        emotion: impl Into<String>,
        confidence_percent: f64,
    ) -> Result<Self> {
        Self::at(
            Local::now().naive_local(),
            input_text,
            emotion,
            confidence_percent,
        )
    }

    /// Creates an entry with an explicit timestamp.
    pub fn at(
        time: NaiveDateTime,
        input_text: impl Into<String>,
        emotion: impl Into<String>,
        confidence_percent: f64,
    ) -> Result<Self> {
        Ok(Self {
            timestamp: time.format(TIMESTAMP_FORMAT).to_string(),
            input_text: input_text.into(),
            emotion: emotion.into(),
            confidence_percent: checked_confidence(confidence_percent)?,
        })
    }

    /// Records `result` for `input_text` at the current local time.
    pub fn from_result(input_text: impl Into<String>, result: &InferenceResult) -> Result<Self> {
        Self::new(
            input_text,
            result.top_label(),
            result.confidence_percent(),
        )
    }

    /// Local time of the detection (`YYYY-MM-DD HH:MM:SS`).
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Text exactly as submitted.
    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    /// Top label.
    pub fn emotion(&self) -> &str {
        &self.emotion
    }

    /// Confidence percentage rounded to two decimals.
    pub fn confidence_percent(&self) -> f64 {
        self.confidence_percent
    }

    /// Parses the stored timestamp back into a date-time.
    pub fn time(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.timestamp, TIMESTAMP_FORMAT).ok()
    }
}

fn checked_confidence(value: f64) -> std::result::Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(round2(value))
    } else {
        Err(ValidationError::NonFiniteConfidence)
    }
}

fn serialize_two_decimals<S>(value: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!("{:.2}", value))
}

fn deserialize_confidence<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    checked_confidence(value).map_err(serde::de::Error::custom)
}
