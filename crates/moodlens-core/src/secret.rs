//! Secret configuration (API tokens) and the service that provides it.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Root structure of `secret.json`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct SecretConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub huggingface: Option<HuggingFaceSecret>,
}

/// Hugging Face Inference API credentials.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct HuggingFaceSecret {
    pub api_token: String,
}

impl SecretConfig {
    /// The Hugging Face token, if one is configured and non-blank.
    pub fn huggingface_token(&self) -> Option<&str> {
        self.huggingface
            .as_ref()
            .map(|s| s.api_token.trim())
            .filter(|t| !t.is_empty())
    }
}

/// Source of secret configuration.
#[async_trait]
pub trait SecretService: Send + Sync {
    /// Loads secrets; a missing file yields an empty config.
    async fn load_secrets(&self) -> Result<SecretConfig>;

    /// Whether a secret file exists at all.
    async fn secret_file_exists(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_token_is_ignored() {
        let config = SecretConfig {
            huggingface: Some(HuggingFaceSecret {
                api_token: "   ".to_string(),
            }),
        };
        assert_eq!(config.huggingface_token(), None);
    }

    #[test]
    fn test_parse_secret_json() {
        let config: SecretConfig =
            serde_json::from_str(r#"{"huggingface": {"api_token": "hf_abc"}}"#).unwrap();
        assert_eq!(config.huggingface_token(), Some("hf_abc"));

        let empty: SecretConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.huggingface_token(), None);
    }
}
