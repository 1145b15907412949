//! Record store error types.

use kw_core::notice::Notice;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The selected backend lacks configuration.
    #[error("record store not configured: {0}")]
    NotConfigured(String),

    /// Service-account credentials are missing or malformed.
    #[error("invalid credentials: {0}")]
    Credentials(String),

    /// Token exchange failed.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Spreadsheet or worksheet lookup came back empty.
    #[error("not found: {0}")]
    NotFound(String),

    /// Sheets or Drive API returned a non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// An export is missing a required field. The message is user-facing.
    #[error("{0}")]
    Incomplete(String),

    /// A row index outside the stored records.
    #[error("row {index} out of range ({len} records)")]
    RowOutOfRange { index: usize, len: usize },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    #[must_use]
    pub fn notice(&self) -> Notice {
        match self {
            Self::Incomplete(message) => Notice::warning(message.clone()),
            Self::Api { status: 429, .. } => {
                Notice::warning("數據庫暫時繁忙，請稍後再試。")
            }
            other => Notice::error(format!("數據庫錯誤: {other}")),
        }
    }
}
