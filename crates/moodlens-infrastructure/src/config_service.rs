//! Configuration service implementation.
//!
//! Loads the root configuration from `config.toml` and caches it.

use crate::paths::MoodlensPaths;
use moodlens_core::config::RootConfig;
use moodlens_core::{MoodlensError, Result};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Configuration service that loads and caches the root configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<RootConfig>>>,
}

impl ConfigService {
    /// Creates a service for the default config location.
    pub fn new() -> Result<Self> {
        let path = MoodlensPaths::default()
            .config_file()
            .map_err(|e| MoodlensError::config(e.to_string()))?;
        Ok(Self::with_path(path))
    }

    /// Creates a service reading from an explicit file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets the root configuration, loading from file if not cached.
    ///
    /// A missing file yields defaults; a malformed file is an error.
    pub fn get_config(&self) -> Result<RootConfig> {
        {
            let read_lock = self.config.read().unwrap_or_else(|e| e.into_inner());
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let loaded = Self::load_config(&self.path)?;

        {
            let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
            *write_lock = Some(loaded.clone());
        }

        Ok(loaded)
    }

    /// Writes `config` to the file and refreshes the cache.
    pub fn save_config(&self, config: &RootConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(config)?;
        std::fs::write(&self.path, content)?;

        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = Some(config.clone());
        Ok(())
    }

    /// Writes a default config file if none exists. Returns the file path.
    pub fn ensure_config_file(&self) -> Result<PathBuf> {
        if !self.path.exists() {
            tracing::info!("Creating default config at {:?}", self.path);
            self.save_config(&RootConfig::default())?;
        }
        Ok(self.path.clone())
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = None;
    }

    fn load_config(path: &Path) -> Result<RootConfig> {
        if !path.exists() {
            tracing::debug!("No config file at {:?}, using defaults", path);
            return Ok(RootConfig::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: RootConfig = toml::from_str(&content).map_err(|e| {
            MoodlensError::config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        Ok(config)
    }
}
