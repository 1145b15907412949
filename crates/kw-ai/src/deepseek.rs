//! DeepSeek chat completions client (OpenAI-compatible API).

use std::time::Duration;

use kw_config::DeepSeekConfig;
use kw_core::enums::AiModel;
use serde::{Deserialize, Serialize};

use crate::{error::AiError, http::check_response};

const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl ChatResponse {
    fn into_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()?
            .message
            .content
            .filter(|text| !text.trim().is_empty())
    }
}

pub struct DeepSeekClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl DeepSeekClient {
    /// # Errors
    ///
    /// Returns [`AiError::NotConfigured`] without an API key, or
    /// [`AiError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &DeepSeekConfig, timeout: Duration) -> Result<Self, AiError> {
        if !config.is_configured() {
            return Err(AiError::NotConfigured {
                provider: AiModel::DeepSeek,
            });
        }
        Ok(Self {
            http: reqwest::Client::builder()
                .user_agent("kewen/0.1")
                .timeout(timeout)
                .build()?,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Send one prompt (after the fixed system message) and return the reply.
    ///
    /// # Errors
    ///
    /// Returns [`AiError`] on transport failure, quota exhaustion, a
    /// non-success status, or a reply without text.
    pub async fn chat(&self, prompt: &str) -> Result<String, AiError> {
        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            stream: false,
        };
        tracing::debug!(model = %self.model, chars = prompt.chars().count(), "deepseek chat completion");

        let resp = self
            .http
            .post(self.url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;
        let resp = check_response(AiModel::DeepSeek, resp).await?;

        let data: ChatResponse = resp.json().await?;
        data.into_text().ok_or(AiError::EmptyResponse {
            provider: AiModel::DeepSeek,
        })
    }
}
