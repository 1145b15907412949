//! Cross-cutting error types for Kewen.
//!
//! Provider-specific errors (`AiError`, `SpeechError`, `StoreError`) live in
//! their own crates. They converge into `anyhow` in `kw-cli`.

use thiserror::Error;

/// Errors that can be raised by any Kewen crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Lookup by name or identifier returned no result.
    #[error("{kind} not found: {id}")]
    NotFound { kind: String, id: String },

    /// A value could not be parsed into a known variant.
    #[error("unknown {kind} '{value}'")]
    UnknownVariant { kind: String, value: String },

    /// Data failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    pub(crate) fn unknown(kind: &str, value: &str) -> Self {
        Self::UnknownVariant {
            kind: kind.to_string(),
            value: value.to_string(),
        }
    }
}
