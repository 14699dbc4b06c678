use super::model::{Session, SessionOptions};
use moodlens_core::inference::InferencePolicy;
use moodlens_interaction::ClassifierLoader;
use std::sync::Arc;

/// Creates sessions that share one classifier loader.
///
/// Each session gets its own empty history; only the classifier is shared.
#[derive(Clone)]
pub struct SessionFactory {
    loader: Arc<ClassifierLoader>,
    policy: InferencePolicy,
    options: SessionOptions,
}

impl SessionFactory {
    pub fn new(
        loader: Arc<ClassifierLoader>,
        policy: InferencePolicy,
        options: SessionOptions,
    ) -> Self {
        Self {
            loader,
            policy,
            options,
        }
    }

    pub fn create_session(&self) -> Session {
        let session = Session::new(self.loader.clone(), self.policy, self.options);
        tracing::debug!(session_id = session.id(), "Session created");
        session
    }

    pub fn loader(&self) -> &Arc<ClassifierLoader> {
        &self.loader
    }
}
