//! Domain layer for moodlens.
//!
//! Text goes through [`inference::infer`] to produce a ranked
//! [`inference::InferenceResult`], the top label is decorated by
//! [`emotion::annotate`], and detections accumulate in a
//! [`history::HistoryStore`] that can be exported as CSV.

pub mod config;
pub mod emotion;
pub mod error;
pub mod history;
pub mod inference;
pub mod secret;

// Re-export common error type
pub use error::{MoodlensError, Result, ValidationError};
