//! DeepSeek (OpenAI-compatible) completion provider configuration.

use serde::{Deserialize, Serialize};

fn default_model() -> String {
    String::from("deepseek-chat")
}

fn default_base_url() -> String {
    String::from("https://api.deepseek.com")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeepSeekConfig {
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL; `/chat/completions` is appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for DeepSeekConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            base_url: default_base_url(),
        }
    }
}

impl DeepSeekConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}
