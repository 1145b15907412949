use std::future::Future;
use std::time::Duration;

use kw_config::KewenConfig;
use kw_core::enums::AiModel;

use crate::deepseek::DeepSeekClient;
use crate::error::AiError;
use crate::gemini::GeminiClient;

/// Free-text prompt in, free-text reply out.
pub trait Completion {
    fn complete(
        &self,
        model: AiModel,
        prompt: &str,
    ) -> impl Future<Output = Result<String, AiError>> + Send;
}

/// Routes prompts to the configured providers.
///
/// A provider without an API key is left out; prompting it yields
/// [`AiError::NotConfigured`].
#[derive(Default)]
pub struct CompletionClient {
    gemini: Option<GeminiClient>,
    deepseek: Option<DeepSeekClient>,
}

impl CompletionClient {
    /// # Errors
    ///
    /// Returns [`AiError::Http`] if an HTTP client cannot be built.
    pub fn from_config(config: &KewenConfig) -> Result<Self, AiError> {
        let timeout = Duration::from_secs(config.general.request_timeout_secs);
        let gemini = if config.gemini.is_configured() {
            Some(GeminiClient::new(&config.gemini, timeout)?)
        } else {
            None
        };
        let deepseek = if config.deepseek.is_configured() {
            Some(DeepSeekClient::new(&config.deepseek, timeout)?)
        } else {
            None
        };
        Ok(Self { gemini, deepseek })
    }

    #[must_use]
    pub const fn is_available(&self, model: AiModel) -> bool {
        match model {
            AiModel::Gemini => self.gemini.is_some(),
            AiModel::DeepSeek => self.deepseek.is_some(),
        }
    }
}

impl Completion for CompletionClient {
    async fn complete(&self, model: AiModel, prompt: &str) -> Result<String, AiError> {
        let not_configured = AiError::NotConfigured { provider: model };
        match model {
            AiModel::Gemini => self.gemini.as_ref().ok_or(not_configured)?.generate(prompt).await,
            AiModel::DeepSeek => self.deepseek.as_ref().ok_or(not_configured)?.chat(prompt).await,
        }
    }
}
