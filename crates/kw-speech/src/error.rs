//! Speech synthesis error types.

use kw_core::notice::Notice;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpeechError {
    /// Subscription key or region/endpoint is missing.
    #[error("speech service not configured")]
    NotConfigured,

    /// The service refused to synthesize, with its reason.
    #[error("synthesis canceled: {reason}")]
    Canceled { reason: String },

    /// Unexpected non-success status.
    #[error("speech API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Writing or removing an audio file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SpeechError {
    #[must_use]
    pub fn notice(&self) -> Notice {
        match self {
            Self::NotConfigured => Notice::error(
                "Azure語音服務未配置。請設定 KEWEN_SPEECH__KEY 與 KEWEN_SPEECH__REGION",
            ),
            Self::Canceled { reason } => Notice::error(format!("語音合成失敗: {reason}")),
            Self::Api { status, message } => {
                Notice::error(format!("語音合成失敗: ({status}) {message}"))
            }
            Self::Http(e) => Notice::error(format!("Azure語音服務錯誤: {e}")),
            Self::Io(e) => Notice::error(format!("無法寫入音訊檔案: {e}")),
        }
    }
}
