//! General application configuration.

use kw_core::enums::AiModel;
use kw_core::voice::{CantoneseVoice, MandarinVoice};
use serde::{Deserialize, Serialize};

const fn default_request_timeout_secs() -> u64 {
    60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Completion model selected for new sessions.
    #[serde(default)]
    pub default_model: AiModel,

    /// Cantonese voice selected for new sessions.
    #[serde(default)]
    pub cantonese_voice: CantoneseVoice,

    /// Mandarin voice selected for new sessions.
    #[serde(default)]
    pub mandarin_voice: MandarinVoice,

    /// Directory holding the active session. Empty means the user data dir.
    #[serde(default)]
    pub session_dir: String,

    /// Timeout applied to every provider request.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_model: AiModel::default(),
            cantonese_voice: CantoneseVoice::default(),
            mandarin_voice: MandarinVoice::default(),
            session_dir: String::new(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_model, AiModel::Gemini);
        assert_eq!(config.cantonese_voice, CantoneseVoice::XiaoMin);
        assert_eq!(config.mandarin_voice, MandarinVoice::Xiaoxiao);
        assert!(config.session_dir.is_empty());
        assert_eq!(config.request_timeout_secs, 60);
    }
}
