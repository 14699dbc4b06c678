//! Unified path management for moodlens configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/moodlens/          # Config directory
//! ├── config.toml              # Application configuration
//! └── secret.json              # API tokens
//! ```
//!
//! Passing a base directory to [`MoodlensPaths::new`] roots everything there
//! instead, which is how tests keep away from the real home directory.

use std::path::{Path, PathBuf};

const APP_DIR: &str = "moodlens";

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "MOODLENS_CONFIG";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Resolves moodlens file locations.
#[derive(Debug, Clone, Default)]
pub struct MoodlensPaths {
    base: Option<PathBuf>,
}

impl MoodlensPaths {
    /// Creates a resolver. With `Some(base)`, every file lives directly
    /// under `base`.
    pub fn new(base: Option<&Path>) -> Self {
        Self {
            base: base.map(Path::to_path_buf),
        }
    }

    /// Returns the moodlens configuration directory (e.g. `~/.config/moodlens/`).
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        if let Some(base) = &self.base {
            return Ok(base.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to `config.toml`.
    ///
    /// Without a base directory, `MOODLENS_CONFIG` takes precedence.
    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        if self.base.is_none() {
            if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
                return Ok(PathBuf::from(path));
            }
        }
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Returns the path to `secret.json`.
    ///
    /// # Security Note
    ///
    /// Ensure this file has appropriate permissions (e.g., 600).
    pub fn secret_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("secret.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_dir() {
        if let Ok(config_dir) = MoodlensPaths::default().config_dir() {
            assert!(config_dir.ends_with("moodlens"));
        }
    }

    #[test]
    fn test_files_under_base() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoodlensPaths::new(Some(temp_dir.path()));

        assert_eq!(
            paths.config_file().unwrap(),
            temp_dir.path().join("config.toml")
        );
        assert_eq!(
            paths.secret_file().unwrap(),
            temp_dir.path().join("secret.json")
        );
    }
}
