use async_trait::async_trait;
use moodlens_application::{Session, SessionOptions, SessionUseCase};
use moodlens_core::config::{ClassifierBackend, RootConfig};
use moodlens_core::history::parse_csv;
use moodlens_core::inference::{EmotionClassifier, EmotionScore, InferencePolicy};
use moodlens_core::secret::{SecretConfig, SecretService};
use moodlens_core::{MoodlensError, Result, ValidationError};
use moodlens_interaction::{ClassifierFactory, ClassifierLoader};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

/// Ranks `fear` highest for anything mentioning nerves, `joy` otherwise.
struct ScriptedClassifier {
    calls: AtomicUsize,
}

impl ScriptedClassifier {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl EmotionClassifier for ScriptedClassifier {
    async fn classify(&self, text: &str) -> Result<Vec<EmotionScore>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let (fear, joy) = if text.contains("nervous") {
            (0.874, 0.021)
        } else {
            (0.011, 0.884)
        };
        Ok(vec![
            EmotionScore::new("anger", 0.02),
            EmotionScore::new("disgust", 0.01),
            EmotionScore::new("fear", fear),
            EmotionScore::new("joy", joy),
            EmotionScore::new("neutral", 0.05),
            EmotionScore::new("sadness", 0.015),
            EmotionScore::new("surprise", 0.01),
        ])
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

struct BrokenClassifier;

#[async_trait]
impl EmotionClassifier for BrokenClassifier {
    async fn classify(&self, _text: &str) -> Result<Vec<EmotionScore>> {
        Err(MoodlensError::classification("HTTP 503"))
    }

    fn name(&self) -> &str {
        "broken"
    }
}

struct CountingFactory {
    created: AtomicUsize,
}

#[async_trait]
impl ClassifierFactory for CountingFactory {
    async fn create(&self) -> Result<Arc<dyn EmotionClassifier>> {
        self.created.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(ScriptedClassifier::new()))
    }
}

struct NoSecrets;

#[async_trait]
impl SecretService for NoSecrets {
    async fn load_secrets(&self) -> Result<SecretConfig> {
        Ok(SecretConfig::default())
    }

    async fn secret_file_exists(&self) -> bool {
        false
    }
}

fn session_with(classifier: Arc<dyn EmotionClassifier>) -> Session {
    Session::new(
        Arc::new(ClassifierLoader::preloaded(classifier)),
        InferencePolicy::default(),
        SessionOptions::default(),
    )
}

#[tokio::test]
async fn test_nervous_interview_scenario() {
    let mut session = session_with(Arc::new(ScriptedClassifier::new()));

    let report = session
        .detect("I am feeling nervous about my interview tomorrow")
        .await
        .expect("detection should succeed");

    assert_eq!(report.top_label(), "fear");
    assert!(report.confidence_percent() > 0.0 && report.confidence_percent() <= 100.0);
    assert_eq!(report.annotation.emoji, "😨");
    assert_eq!(
        report.annotation.suggestion,
        "It's okay to feel nervous. Prepare step-by-step 💪"
    );

    let entry = report.recorded.expect("history saving is on by default");
    assert_eq!(entry.emotion(), "fear");
    assert_eq!(entry.confidence_percent(), 87.4);
    assert_eq!(
        entry.input_text(),
        "I am feeling nervous about my interview tomorrow"
    );
    assert_eq!(session.history().len(), 1);
}

#[tokio::test]
async fn test_too_long_input_leaves_history_unchanged() {
    let classifier = Arc::new(ScriptedClassifier::new());
    let mut session = session_with(classifier.clone());
    session.detect("a fine day").await.unwrap();

    let err = session.detect(&"a".repeat(1001)).await.unwrap_err();

    assert!(matches!(
        err,
        MoodlensError::Validation(ValidationError::TooLong { .. })
    ));
    assert_eq!(session.history().len(), 1);
    assert_eq!(classifier.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_blank_input_writes_nothing() {
    let mut session = session_with(Arc::new(ScriptedClassifier::new()));

    for text in ["", "    ", "\n"] {
        let err = session.detect(text).await.unwrap_err();
        assert!(err.is_validation());
    }
    assert!(session.history().is_empty());
}

#[tokio::test]
async fn test_classifier_failure_leaves_history_unchanged() {
    let mut session = session_with(Arc::new(BrokenClassifier));

    let err = session.detect("hello there").await.unwrap_err();

    assert!(matches!(err, MoodlensError::Classification(_)));
    assert!(session.history().is_empty());
}

#[tokio::test]
async fn test_unknown_top_label_gets_default_annotation() {
    struct DisgustClassifier;

    #[async_trait]
    impl EmotionClassifier for DisgustClassifier {
        async fn classify(&self, _text: &str) -> Result<Vec<EmotionScore>> {
            Ok(vec![
                EmotionScore::new("joy", 0.1),
                EmotionScore::new("disgust", 0.9),
            ])
        }

        fn name(&self) -> &str {
            "disgust"
        }
    }

    let mut session = session_with(Arc::new(DisgustClassifier));
    let report = session.detect("ew").await.unwrap();

    assert_eq!(report.top_label(), "disgust");
    assert_eq!(report.annotation.emoji, "🙂");
    assert_eq!(
        report.annotation.suggestion,
        "Stay positive and keep improving!"
    );
}

#[tokio::test]
async fn test_save_history_off_records_nothing() {
    let mut session = session_with(Arc::new(ScriptedClassifier::new()));
    session.set_save_history(false);

    let report = session.detect("what a lovely day").await.unwrap();

    assert_eq!(report.top_label(), "joy");
    assert!(report.recorded.is_none());
    assert!(session.history().is_empty());
}

#[tokio::test]
async fn test_history_export_round_trip_and_clear() {
    let mut session = session_with(Arc::new(ScriptedClassifier::new()));
    session.detect("first, with a comma").await.unwrap();
    session.detect("I'm \"nervous\"\nreally").await.unwrap();
    session.detect("first, with a comma").await.unwrap();

    let csv = session.export_history().unwrap();
    let parsed = parse_csv(&csv).unwrap();
    assert_eq!(parsed, session.history().entries());
    assert_eq!(parsed[1].emotion(), "fear");

    session.clear_history();
    session.clear_history();
    assert_eq!(
        session.export_history().unwrap(),
        "Time,Text,Emotion,Confidence(%)\n"
    );
}

#[tokio::test]
async fn test_export_history_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("emotion_history.csv");
    let mut session = session_with(Arc::new(ScriptedClassifier::new()));
    session.detect("good news everyone").await.unwrap();

    let written = session.export_history_to(&path).await.unwrap();

    let content = std::fs::read_to_string(written).unwrap();
    assert_eq!(parse_csv(&content).unwrap(), session.history().entries());
}

#[tokio::test]
async fn test_sessions_share_classifier_but_not_history() {
    let factory = Arc::new(CountingFactory {
        created: AtomicUsize::new(0),
    });
    let loader = Arc::new(ClassifierLoader::new(factory.clone()));
    let use_case = SessionUseCase::with_loader(RootConfig::default(), loader);

    let mut first = use_case.start_session();
    let mut second = use_case.start_session();
    assert_ne!(first.id(), second.id());

    first.detect("one").await.unwrap();
    first.detect("two").await.unwrap();
    second.detect("three").await.unwrap();

    assert_eq!(first.history().len(), 2);
    assert_eq!(second.history().len(), 1);
    assert_eq!(factory.created.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_validation_does_not_load_classifier() {
    let factory = Arc::new(CountingFactory {
        created: AtomicUsize::new(0),
    });
    let loader = Arc::new(ClassifierLoader::new(factory.clone()));
    let use_case = SessionUseCase::with_loader(RootConfig::default(), loader);
    let mut session = use_case.start_session();

    assert!(session.detect("  ").await.is_err());
    assert_eq!(factory.created.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_config_drives_policy_and_options() {
    let mut config = RootConfig::default();
    config.classifier.backend = ClassifierBackend::Lexicon;
    config.inference.max_chars = 10;
    config.display.save_history = false;

    let use_case = SessionUseCase::from_config(config, Arc::new(NoSecrets));
    use_case.warm_up().await.unwrap();
    let mut session = use_case.start_session();

    assert_eq!(session.policy().max_chars, 10);
    assert!(!session.options().save_history);
    assert!(session.detect("much too long").await.unwrap_err().is_validation());

    let report = session.detect("so scared").await.unwrap();
    assert_eq!(report.top_label(), "fear");
    assert!(session.history().is_empty());
}
