//! HuggingFaceApiClassifier - text classification over the Hugging Face
//! Inference API.
//!
//! Sends one request per call and asks for every label's score.

use async_trait::async_trait;
use moodlens_core::config::{ClassifierConfig, DEFAULT_MODEL};
use moodlens_core::inference::{EmotionClassifier, EmotionScore};
use moodlens_core::{MoodlensError, Result};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable checked for an API token before `secret.json`.
pub const HF_TOKEN_ENV: &str = "HF_TOKEN";

/// Classifier backed by a hosted transformer model.
#[derive(Clone)]
pub struct HuggingFaceApiClassifier {
    client: Client,
    endpoint: String,
    model: String,
    api_token: Option<String>,
    name: String,
}

impl HuggingFaceApiClassifier {
    /// Creates a classifier from the `[classifier]` config section.
    pub fn from_config(config: &ClassifierConfig, api_token: Option<String>) -> Result<Self> {
        let model = if config.model.trim().is_empty() {
            DEFAULT_MODEL
        } else {
            config.model.as_str()
        };
        Self::build(
            &config.endpoint,
            model,
            api_token,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    fn build(
        endpoint: &str,
        model: impl Into<String>,
        api_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            MoodlensError::classifier_load(format!("Failed to build HTTP client: {e}"))
        })?;
        let model = model.into();

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            name: format!("huggingface:{model}"),
            model,
            api_token: api_token.filter(|t| !t.trim().is_empty()),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self) -> String {
        format!("{}/{}", self.endpoint, self.model)
    }

    async fn send_request(&self, body: &ClassificationRequest<'_>) -> Result<Vec<EmotionScore>> {
        let mut request = self.client.post(self.url()).json(body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|err| {
            MoodlensError::classification(format!("Hugging Face request failed: {err}"))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Hugging Face error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: ClassificationResponse = response.json().await.map_err(|err| {
            MoodlensError::classification(format!("Failed to parse Hugging Face response: {err}"))
        })?;

        Ok(parsed.into_scores())
    }
}

#[async_trait]
impl EmotionClassifier for HuggingFaceApiClassifier {
    async fn classify(&self, text: &str) -> Result<Vec<EmotionScore>> {
        let request = ClassificationRequest {
            inputs: text,
            parameters: ClassificationParameters { top_k: None },
            options: RequestOptions {
                wait_for_model: true,
            },
        };
        self.send_request(&request).await
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Serialize)]
struct ClassificationRequest<'a> {
    inputs: &'a str,
    parameters: ClassificationParameters,
    options: RequestOptions,
}

/// `top_k: null` asks the pipeline for every label.
#[derive(Serialize)]
struct ClassificationParameters {
    top_k: Option<usize>,
}

#[derive(Serialize)]
struct RequestOptions {
    wait_for_model: bool,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
struct LabelScore {
    label: String,
    score: f64,
}

/// A single input may come back wrapped in an outer list or bare.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum ClassificationResponse {
    Nested(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

impl ClassificationResponse {
    fn into_scores(self) -> Vec<EmotionScore> {
        let scores = match self {
            Self::Nested(mut outer) => {
                if outer.is_empty() {
                    Vec::new()
                } else {
                    outer.swap_remove(0)
                }
            }
            Self::Flat(scores) => scores,
        };
        scores
            .into_iter()
            .map(|s| EmotionScore::new(s.label, s.score))
            .collect()
    }
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: String,
    #[serde(default)]
    estimated_time: Option<f64>,
}

fn map_http_error(status: StatusCode, body: String) -> MoodlensError {
    let detail = match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(parsed) => match parsed.estimated_time {
            Some(secs) => format!("{} (estimated time {:.0}s)", parsed.error, secs),
            None => parsed.error,
        },
        Err(_) => body,
    };

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => MoodlensError::classification(
            format!("Hugging Face rejected the API token ({status}): {detail}"),
        ),
        StatusCode::NOT_FOUND => {
            MoodlensError::classification(format!("Model not found ({status}): {detail}"))
        }
        _ => MoodlensError::classification(format!(
            "Hugging Face API error ({status}): {detail}"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_response() {
        let body = r#"[[{"label":"fear","score":0.91},{"label":"neutral","score":0.05},{"label":"joy","score":0.04}]]"#;
        let parsed: ClassificationResponse = serde_json::from_str(body).unwrap();
        let scores = parsed.into_scores();
        assert_eq!(scores.len(), 3);
        assert_eq!(scores[0], EmotionScore::new("fear", 0.91));
    }

    #[test]
    fn test_parse_flat_response() {
        let body = r#"[{"label":"joy","score":0.7},{"label":"love","score":0.3}]"#;
        let parsed: ClassificationResponse = serde_json::from_str(body).unwrap();
        let scores = parsed.into_scores();
        assert_eq!(scores[1], EmotionScore::new("love", 0.3));
    }

    #[test]
    fn test_parse_empty_nested_response() {
        let parsed: ClassificationResponse = serde_json::from_str("[[]]").unwrap();
        assert!(parsed.into_scores().is_empty());
    }

    #[test]
    fn test_request_body_asks_for_all_labels() {
        let request = ClassificationRequest {
            inputs: "hello",
            parameters: ClassificationParameters { top_k: None },
            options: RequestOptions {
                wait_for_model: true,
            },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["inputs"], "hello");
        assert!(json["parameters"]["top_k"].is_null());
        assert_eq!(json["options"]["wait_for_model"], true);
    }

    #[test]
    fn test_map_http_error_reads_api_message() {
        let err = map_http_error(
            StatusCode::SERVICE_UNAVAILABLE,
            r#"{"error":"Model is currently loading","estimated_time":20.0}"#.to_string(),
        );
        let message = err.to_string();
        assert!(err.is_classification());
        assert!(message.contains("currently loading"));
        assert!(message.contains("20s"));
    }

    #[test]
    fn test_map_http_error_auth() {
        let err = map_http_error(StatusCode::UNAUTHORIZED, "nope".to_string());
        assert!(err.to_string().contains("token"));
    }

    #[test]
    fn test_from_config_defaults() {
        let config = ClassifierConfig {
            endpoint: "https://example.test/models/".to_string(),
            model: " ".to_string(),
            ..ClassifierConfig::default()
        };
        let classifier =
            HuggingFaceApiClassifier::from_config(&config, Some(String::new())).unwrap();

        assert_eq!(classifier.model(), DEFAULT_MODEL);
        assert_eq!(
            classifier.url(),
            format!("https://example.test/models/{DEFAULT_MODEL}")
        );
        assert!(classifier.api_token.is_none());
        assert_eq!(classifier.name(), format!("huggingface:{DEFAULT_MODEL}"));
    }
}
