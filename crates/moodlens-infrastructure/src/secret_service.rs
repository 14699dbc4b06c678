//! Secret service implementation.
//!
//! Reads API tokens from `secret.json`.

use crate::paths::MoodlensPaths;
use moodlens_core::secret::{HuggingFaceSecret, SecretConfig, SecretService};
use moodlens_core::{MoodlensError, Result};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Service for reading secret configuration.
///
/// The file is read once and cached.
#[derive(Clone)]
pub struct SecretServiceImpl {
    path: PathBuf,
    secrets: Arc<RwLock<Option<SecretConfig>>>,
}

impl SecretServiceImpl {
    /// Creates a service for the secret file under `base_path`, or the default
    /// config directory when `None`.
    pub fn new(base_path: Option<&Path>) -> Result<Self> {
        let path = MoodlensPaths::new(base_path)
            .secret_file()
            .map_err(|e| MoodlensError::config(format!("Failed to get secret path: {}", e)))?;
        Ok(Self::with_path(path))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            secrets: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates `secret.json` with an empty token template if it doesn't exist.
    ///
    /// On Unix the file is restricted to mode 600.
    pub fn ensure_secret_file(&self) -> Result<PathBuf> {
        if self.path.exists() {
            return Ok(self.path.clone());
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let template = SecretConfig {
            huggingface: Some(HuggingFaceSecret {
                api_token: String::new(),
            }),
        };
        std::fs::write(&self.path, serde_json::to_string_pretty(&template)?)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&self.path, permissions)?;
        }

        Ok(self.path.clone())
    }

    fn load_secrets_internal(&self) -> Result<SecretConfig> {
        {
            let read_lock = self.secrets.read().unwrap_or_else(|e| e.into_inner());
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let loaded = if self.path.exists() {
            let content = std::fs::read_to_string(&self.path)?;
            serde_json::from_str(&content)?
        } else {
            SecretConfig::default()
        };

        {
            let mut write_lock = self.secrets.write().unwrap_or_else(|e| e.into_inner());
            *write_lock = Some(loaded.clone());
        }

        Ok(loaded)
    }
}

#[async_trait::async_trait]
impl SecretService for SecretServiceImpl {
    async fn load_secrets(&self) -> Result<SecretConfig> {
        self.load_secrets_internal()
    }

    async fn secret_file_exists(&self) -> bool {
        self.path.exists()
    }
}
