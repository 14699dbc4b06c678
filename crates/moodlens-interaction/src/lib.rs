//! Classifier backends for moodlens.
//!
//! - [`HuggingFaceApiClassifier`]: hosted transformer model over HTTP
//! - [`LexiconClassifier`]: offline keyword matching
//!
//! [`ClassifierLoader`] builds the configured backend once per process.

pub mod classifier_loader;
pub mod config;
pub mod huggingface_api_classifier;
pub mod lexicon_classifier;

pub use classifier_loader::{ClassifierFactory, ClassifierLoader, ConfiguredClassifierFactory};
pub use huggingface_api_classifier::HuggingFaceApiClassifier;
pub use lexicon_classifier::LexiconClassifier;
