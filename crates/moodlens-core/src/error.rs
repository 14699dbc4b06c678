//! Error types for moodlens.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a value is rejected before it reaches the classifier or the history.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    /// The text was empty or contained only whitespace.
    #[error("Please enter some text.")]
    EmptyInput,

    /// The text exceeded the configured character ceiling.
    #[error("Text is too long ({len} characters). Please keep it under {max} characters.")]
    TooLong { len: usize, max: usize },

    /// A confidence value was NaN or infinite.
    #[error("Confidence must be a finite number.")]
    NonFiniteConfidence,
}

/// A shared error type for the moodlens workspace.
///
/// Validation and classifier failures are scoped to the single interaction
/// that triggered them; none of the variants is fatal to the process.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum MoodlensError {
    /// Input rejected before inference
    #[error("Validation error: {0}")]
    Validation(ValidationError),

    /// The classifier could not be initialised
    #[error("Classifier load error: {0}")]
    ClassifierLoad(String),

    /// A single classifier invocation failed
    #[error("Classification error: {0}")]
    Classification(String),

    /// History export or import failed
    #[error("Export error: {message}")]
    Export { message: String },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", "CSV"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MoodlensError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a ClassifierLoad error
    pub fn classifier_load(message: impl Into<String>) -> Self {
        Self::ClassifierLoad(message.into())
    }

    /// Creates a Classification error
    pub fn classification(message: impl Into<String>) -> Self {
        Self::Classification(message.into())
    }

    /// Creates an Export error
    pub fn export(message: impl Into<String>) -> Self {
        Self::Export {
            message: message.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if the classifier failed, either while loading or on a call.
    pub fn is_classification(&self) -> bool {
        matches!(self, Self::Classification(_) | Self::ClassifierLoad(_))
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Message suitable for showing to an end user.
    ///
    /// Classifier failures are reported generically; the detail belongs in logs.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(err) => err.to_string(),
            Self::ClassifierLoad(_) | Self::Classification(_) => {
                "Model failed to analyze the text. Please try again.".to_string()
            }
            other => other.to_string(),
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<ValidationError> for MoodlensError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<std::io::Error> for MoodlensError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for MoodlensError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for MoodlensError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for MoodlensError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<csv::Error> for MoodlensError {
    fn from(err: csv::Error) -> Self {
        Self::Serialization {
            format: "CSV".to_string(),
            message: err.to_string(),
        }
    }
}

/// Conversion from anyhow::Error (used by classifier backends)
impl From<anyhow::Error> for MoodlensError {
    fn from(err: anyhow::Error) -> Self {
        Self::Classification(err.to_string())
    }
}

/// A type alias for `Result<T, MoodlensError>`.
pub type Result<T> = std::result::Result<T, MoodlensError>;
