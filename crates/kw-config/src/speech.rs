//! Azure speech synthesis configuration.

use serde::{Deserialize, Serialize};

/// Single-channel 16-bit PCM in a RIFF (WAV) container.
fn default_output_format() -> String {
    String::from("riff-24khz-16bit-mono-pcm")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpeechConfig {
    /// Subscription key for the speech resource.
    #[serde(default)]
    pub key: String,

    /// Resource region (e.g., `eastasia`). Ignored when `endpoint` is set.
    #[serde(default)]
    pub region: String,

    /// Full synthesis endpoint URL, overriding the region-derived one.
    #[serde(default)]
    pub endpoint: String,

    #[serde(default = "default_output_format")]
    pub output_format: String,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            key: String::new(),
            region: String::new(),
            endpoint: String::new(),
            output_format: default_output_format(),
        }
    }
}

impl SpeechConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.key.is_empty() && (!self.region.is_empty() || !self.endpoint.is_empty())
    }

    /// Synthesis URL: the explicit endpoint, or the regional TTS endpoint.
    #[must_use]
    pub fn synthesis_url(&self) -> String {
        if self.endpoint.is_empty() {
            format!(
                "https://{}.tts.speech.microsoft.com/cognitiveservices/v1",
                self.region
            )
        } else {
            self.endpoint.clone()
        }
    }
}
