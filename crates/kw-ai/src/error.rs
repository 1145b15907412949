//! Completion provider error types.

use kw_core::enums::AiModel;
use kw_core::notice::Notice;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AiError {
    /// No API key is configured for the provider.
    #[error("{provider} API key not configured")]
    NotConfigured { provider: AiModel },

    /// HTTP 429, or an error body that mentions quota exhaustion.
    #[error("{provider} quota exhausted")]
    QuotaExceeded { provider: AiModel },

    /// Provider returned a non-success status code.
    #[error("{provider} API error ({status}): {message}")]
    Api {
        provider: AiModel,
        status: u16,
        message: String,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to parse a provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The reply carried no text.
    #[error("{provider} returned an empty response")]
    EmptyResponse { provider: AiModel },
}

impl AiError {
    /// User-facing message for this failure.
    ///
    /// Quota exhaustion is a warning to try later; everything else is an
    /// error the user can act on or report.
    #[must_use]
    pub fn notice(&self) -> Notice {
        match self {
            Self::NotConfigured { provider } => Notice::error(format!(
                "{provider} API key not configured. Set KEWEN_{}__API_KEY or add it to .kewen/config.toml.",
                config_section(*provider).to_uppercase()
            )),
            Self::QuotaExceeded { provider } => Notice::warning(format!(
                "{provider} API quota used up for today. Please try again later or switch models."
            )),
            Self::Api { provider, status, message } => {
                Notice::error(format!("{provider} API error ({status}): {message}"))
            }
            Self::Http(e) => Notice::error(format!("request failed: {e}")),
            Self::Parse(e) => Notice::error(format!("unexpected provider response: {e}")),
            Self::EmptyResponse { provider } => {
                Notice::warning(format!("{provider} returned no text. Please try again."))
            }
        }
    }
}

const fn config_section(provider: AiModel) -> &'static str {
    match provider {
        AiModel::Gemini => "gemini",
        AiModel::DeepSeek => "deepseek",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kw_core::notice::NoticeLevel;

    #[test]
    fn missing_key_names_the_env_var() {
        let notice = AiError::NotConfigured {
            provider: AiModel::DeepSeek,
        }
        .notice();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(notice.message.contains("KEWEN_DEEPSEEK__API_KEY"));
    }

    #[test]
    fn quota_is_a_warning() {
        let notice = AiError::QuotaExceeded {
            provider: AiModel::Gemini,
        }
        .notice();
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert!(notice.message.starts_with("Gemini API quota"));
    }

    #[test]
    fn api_error_display() {
        let err = AiError::Api {
            provider: AiModel::Gemini,
            status: 500,
            message: "boom".into(),
        };
        assert_eq!(err.to_string(), "Gemini API error (500): boom");
    }
}
