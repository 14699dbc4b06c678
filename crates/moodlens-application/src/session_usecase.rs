//! Session use case implementation.
//!
//! Wires configuration, secrets, and the classifier loader together and
//! hands out [`Session`]s that share a single classifier.

use crate::session::{Session, SessionFactory, SessionOptions};
use anyhow::{Context, Result};
use moodlens_core::config::{DisplayConfig, RootConfig};
use moodlens_core::secret::SecretService;
use moodlens_infrastructure::{ConfigService, SecretServiceImpl};
use moodlens_interaction::ClassifierLoader;
use std::sync::Arc;

/// Entry point for presentation layers.
///
/// # Responsibilities
///
/// - Loading `config.toml` and `secret.json`
/// - Owning the process-wide [`ClassifierLoader`]
/// - Creating sessions with the configured policy and options
pub struct SessionUseCase {
    config: RootConfig,
    factory: SessionFactory,
}

impl SessionUseCase {
    /// Builds the use case from the default config and secret locations.
    pub fn bootstrap() -> Result<Self> {
        let config_service = ConfigService::new().context("Failed to locate config file")?;
        let config = config_service
            .get_config()
            .with_context(|| format!("Failed to load {}", config_service.path().display()))?;

        let secret_service: Arc<dyn SecretService> =
            Arc::new(SecretServiceImpl::new(None).context("Failed to locate secret file")?);

        tracing::info!(
            backend = ?config.classifier.backend,
            model = %config.classifier.model,
            "[Bootstrap] Configuration loaded from {:?}",
            config_service.path()
        );

        Ok(Self::from_config(config, secret_service))
    }

    /// Builds the use case from an already-loaded configuration.
    pub fn from_config(config: RootConfig, secret_service: Arc<dyn SecretService>) -> Self {
        let loader = Arc::new(ClassifierLoader::from_config(
            config.classifier.clone(),
            secret_service,
        ));
        Self::with_loader(config, loader)
    }

    /// Builds the use case around an existing loader.
    pub fn with_loader(config: RootConfig, loader: Arc<ClassifierLoader>) -> Self {
        let options = SessionOptions {
            save_history: config.display.save_history,
        };
        let factory = SessionFactory::new(loader, config.inference.policy(), options);
        Self { config, factory }
    }

    pub fn config(&self) -> &RootConfig {
        &self.config
    }

    pub fn display(&self) -> &DisplayConfig {
        &self.config.display
    }

    /// Starts a new session with an empty history.
    pub fn start_session(&self) -> Session {
        self.factory.create_session()
    }

    /// Loads the classifier now instead of on the first detection.
    pub async fn warm_up(&self) -> Result<()> {
        self.factory
            .loader()
            .get()
            .await
            .context("Failed to load emotion classifier")?;
        Ok(())
    }
}
