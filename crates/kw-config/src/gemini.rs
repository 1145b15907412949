//! Gemini completion provider configuration.

use serde::{Deserialize, Serialize};

fn default_model() -> String {
    String::from("gemini-2.5-flash")
}

fn default_endpoint() -> String {
    String::from("https://generativelanguage.googleapis.com")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeminiConfig {
    /// Google AI Studio API key.
    #[serde(default)]
    pub api_key: String,

    /// Model name passed to `generateContent`.
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            endpoint: default_endpoint(),
        }
    }
}

impl GeminiConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}
