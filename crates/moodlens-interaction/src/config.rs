//! Credential lookup for hosted classifier backends.
//!
//! The `HF_TOKEN` environment variable wins over `secret.json`.

use crate::huggingface_api_classifier::HF_TOKEN_ENV;
use moodlens_core::secret::SecretService;
use moodlens_core::{MoodlensError, Result};

/// Returns the Hugging Face API token, if any is configured.
pub async fn resolve_api_token(secret_service: &dyn SecretService) -> Result<Option<String>> {
    if let Some(token) = token_from_env() {
        return Ok(Some(token));
    }

    let secrets = secret_service.load_secrets().await.map_err(|e| {
        MoodlensError::classifier_load(format!("Failed to load secret.json: {}", e))
    })?;
    Ok(secrets.huggingface_token().map(str::to_string))
}

fn token_from_env() -> Option<String> {
    std::env::var(HF_TOKEN_ENV)
        .ok()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use moodlens_core::secret::{HuggingFaceSecret, SecretConfig};

    struct StaticSecrets(Result<SecretConfig>);

    #[async_trait]
    impl SecretService for StaticSecrets {
        async fn load_secrets(&self) -> Result<SecretConfig> {
            self.0.clone()
        }

        async fn secret_file_exists(&self) -> bool {
            self.0.is_ok()
        }
    }

    // Both cases share one test so the environment variable is never read
    // while another test in this module is changing it.
    #[tokio::test]
    async fn test_token_resolution() {
        if token_from_env().is_some() {
            // A developer token in the environment takes precedence; nothing to check.
            return;
        }

        let with_token = StaticSecrets(Ok(SecretConfig {
            huggingface: Some(HuggingFaceSecret {
                api_token: "hf_from_file".to_string(),
            }),
        }));
        assert_eq!(
            resolve_api_token(&with_token).await.unwrap().as_deref(),
            Some("hf_from_file")
        );

        let broken = StaticSecrets(Err(MoodlensError::io("permission denied")));
        let err = resolve_api_token(&broken).await.unwrap_err();
        assert!(matches!(err, MoodlensError::ClassifierLoad(_)));
    }
}
