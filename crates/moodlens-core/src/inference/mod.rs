//! Emotion inference: the classifier seam, the ranked result model, and the
//! validating pipeline that connects them.

pub mod classifier;
pub mod model;
pub mod pipeline;

pub use classifier::EmotionClassifier;
pub use model::{EmotionScore, InferenceResult, round2};
pub use pipeline::{DEFAULT_MAX_CHARS, InferencePolicy, infer};
