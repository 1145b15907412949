//! Gemini `generateContent` client.

use std::time::Duration;

use kw_config::GeminiConfig;
use kw_core::enums::AiModel;
use serde::{Deserialize, Serialize};

use crate::{error::AiError, http::check_response};

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text parts of the first candidate.
    fn into_text(self) -> Option<String> {
        let text: String = self
            .candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl GeminiClient {
    /// # Errors
    ///
    /// Returns [`AiError::NotConfigured`] without an API key, or
    /// [`AiError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &GeminiConfig, timeout: Duration) -> Result<Self, AiError> {
        if !config.is_configured() {
            return Err(AiError::NotConfigured {
                provider: AiModel::Gemini,
            });
        }
        Ok(Self {
            http: reqwest::Client::builder()
                .user_agent("kewen/0.1")
                .timeout(timeout)
                .build()?,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.endpoint, self.model)
    }

    /// Send one prompt and return the reply text.
    ///
    /// # Errors
    ///
    /// Returns [`AiError`] on transport failure, quota exhaustion, a
    /// non-success status, or a reply without text.
    pub async fn generate(&self, prompt: &str) -> Result<String, AiError> {
        let body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };
        tracing::debug!(model = %self.model, chars = prompt.chars().count(), "gemini generateContent");

        let resp = self
            .http
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;
        let resp = check_response(AiModel::Gemini, resp).await?;

        let data: GenerateResponse = resp.json().await?;
        data.into_text().ok_or(AiError::EmptyResponse {
            provider: AiModel::Gemini,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r#"{
        "candidates": [
            {
                "content": {
                    "parts": [
                        {"text": "| 錯字 | 正確 | 解釋 |\n"},
                        {"text": "| 己經 | 已經 | 字形相近 |"}
                    ],
                    "role": "model"
                },
                "finishReason": "STOP"
            }
        ],
        "usageMetadata": {"promptTokenCount": 42}
    }"#;

    #[test]
    fn parse_generate_response() {
        let data: GenerateResponse = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(
            data.into_text().as_deref(),
            Some("| 錯字 | 正確 | 解釋 |\n| 己經 | 已經 | 字形相近 |")
        );
    }

    #[test]
    fn blocked_prompt_has_no_text() {
        let data: GenerateResponse =
            serde_json::from_str(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#).unwrap();
        assert!(data.into_text().is_none());
    }

    #[test]
    fn request_body_shape() {
        let body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: "你好" }],
            }],
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"contents": [{"parts": [{"text": "你好"}]}]})
        );
    }

    #[test]
    fn url_uses_model_and_trimmed_endpoint() {
        let config = GeminiConfig {
            api_key: "test".into(),
            endpoint: "https://example.test/".into(),
            ..Default::default()
        };
        let client = GeminiClient::new(&config, Duration::from_secs(5)).unwrap();
        assert_eq!(
            client.url(),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn requires_api_key() {
        let err = GeminiClient::new(&GeminiConfig::default(), Duration::from_secs(5))
            .err()
            .unwrap();
        assert!(matches!(err, AiError::NotConfigured { provider: AiModel::Gemini }));
    }
}
