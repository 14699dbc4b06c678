//! One-time classifier initialisation.
//!
//! Loading a backend can be slow (token lookup, HTTP client setup, and for
//! hosted models a cold start on the first call), so the process keeps a
//! single instance and hands out shared references to it.

use crate::config::resolve_api_token;
use crate::huggingface_api_classifier::HuggingFaceApiClassifier;
use crate::lexicon_classifier::LexiconClassifier;
use async_trait::async_trait;
use moodlens_core::Result;
use moodlens_core::config::{ClassifierBackend, ClassifierConfig};
use moodlens_core::inference::EmotionClassifier;
use moodlens_core::secret::SecretService;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Builds a classifier instance. Called at most once per successful load.
#[async_trait]
pub trait ClassifierFactory: Send + Sync {
    async fn create(&self) -> Result<Arc<dyn EmotionClassifier>>;
}

/// Factory driven by the `[classifier]` config section.
pub struct ConfiguredClassifierFactory {
    config: ClassifierConfig,
    secret_service: Arc<dyn SecretService>,
}

impl ConfiguredClassifierFactory {
    pub fn new(config: ClassifierConfig, secret_service: Arc<dyn SecretService>) -> Self {
        Self {
            config,
            secret_service,
        }
    }
}

#[async_trait]
impl ClassifierFactory for ConfiguredClassifierFactory {
    async fn create(&self) -> Result<Arc<dyn EmotionClassifier>> {
        match self.config.backend {
            ClassifierBackend::HuggingFace => {
                let token = resolve_api_token(self.secret_service.as_ref()).await?;
                if token.is_none() {
                    tracing::warn!(
                        "No Hugging Face token configured; requests will be anonymous and rate limited"
                    );
                }
                let classifier = HuggingFaceApiClassifier::from_config(&self.config, token)?;
                Ok(Arc::new(classifier))
            }
            ClassifierBackend::Lexicon => Ok(Arc::new(LexiconClassifier::new())),
        }
    }
}

/// Lazily initialised, shared classifier.
///
/// Concurrent first calls to [`get`](ClassifierLoader::get) wait on a single
/// initialisation. A failed load is not cached; the next call tries again.
pub struct ClassifierLoader {
    factory: Arc<dyn ClassifierFactory>,
    classifier: OnceCell<Arc<dyn EmotionClassifier>>,
}

impl ClassifierLoader {
    pub fn new(factory: Arc<dyn ClassifierFactory>) -> Self {
        Self {
            factory,
            classifier: OnceCell::new(),
        }
    }

    /// Loader for the backend selected in `config`.
    pub fn from_config(config: ClassifierConfig, secret_service: Arc<dyn SecretService>) -> Self {
        Self::new(Arc::new(ConfiguredClassifierFactory::new(
            config,
            secret_service,
        )))
    }

    /// Loader that always yields `classifier`, already initialised.
    pub fn preloaded(classifier: Arc<dyn EmotionClassifier>) -> Self {
        Self {
            factory: Arc::new(Preloaded(classifier.clone())),
            classifier: OnceCell::new_with(Some(classifier)),
        }
    }

    /// Returns the shared classifier, loading it on first use.
    ///
    /// # Errors
    ///
    /// [`MoodlensError::ClassifierLoad`](moodlens_core::MoodlensError::ClassifierLoad)
    /// if the factory fails.
    pub async fn get(&self) -> Result<Arc<dyn EmotionClassifier>> {
        let classifier = self
            .classifier
            .get_or_try_init(|| async {
                tracing::info!("Loading emotion classifier");
                let created = self.factory.create().await.map_err(|e| {
                    tracing::error!("Failed to load classifier: {}", e);
                    match e {
                        moodlens_core::MoodlensError::ClassifierLoad(_) => e,
                        other => moodlens_core::MoodlensError::classifier_load(other.to_string()),
                    }
                })?;
                tracing::info!(classifier = created.name(), "Emotion classifier ready");
                Ok::<_, moodlens_core::MoodlensError>(created)
            })
            .await?;
        Ok(Arc::clone(classifier))
    }

    pub fn is_loaded(&self) -> bool {
        self.classifier.initialized()
    }
}

struct Preloaded(Arc<dyn EmotionClassifier>);

#[async_trait]
impl ClassifierFactory for Preloaded {
    async fn create(&self) -> Result<Arc<dyn EmotionClassifier>> {
        Ok(self.0.clone())
    }
}
