use crate::inference::{DEFAULT_MAX_CHARS, InferencePolicy};
use serde::{Deserialize, Serialize};

/// Default Hugging Face model for emotion classification.
pub const DEFAULT_MODEL: &str = "j-hartmann/emotion-english-distilroberta-base";

/// Default Hugging Face inference endpoint (model id is appended).
pub const DEFAULT_ENDPOINT: &str = "https://api-inference.huggingface.co/models";

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierBackend {
    /// Hosted transformer model over HTTP
    #[default]
    HuggingFace,
    /// Offline keyword lexicon
    Lexicon,
}

/// Root of `config.toml`. Every section and field is optional.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct RootConfig {
    pub classifier: ClassifierConfig,
    pub inference: InferenceConfig,
    pub display: DisplayConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ClassifierConfig {
    pub backend: ClassifierBackend,
    pub model: String,
    pub endpoint: String,
    pub request_timeout_secs: u64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            backend: ClassifierBackend::default(),
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_secs: 60,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct InferenceConfig {
    pub max_chars: usize,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
        }
    }
}

impl InferenceConfig {
    pub fn policy(&self) -> InferencePolicy {
        InferencePolicy {
            max_chars: self.max_chars,
        }
    }
}

/// Display toggles; `save_history` also controls whether detections are recorded.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub show_table: bool,
    pub show_chart: bool,
    pub save_history: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_table: true,
            show_chart: true,
            save_history: true,
        }
    }
}
