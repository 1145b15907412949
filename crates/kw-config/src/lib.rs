//! # kw-config
//!
//! Layered configuration loading for Kewen using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`KEWEN_*` prefix, `__` as separator)
//! 2. Project-level `.kewen/config.toml`
//! 3. User-level `~/.config/kewen/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `KEWEN_GEMINI__API_KEY` -> `gemini.api_key`,
//! `KEWEN_SPEECH__REGION` -> `speech.region`, etc. The `__` (double
//! underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use kw_config::KewenConfig;
//!
//! let config = KewenConfig::load_with_dotenv().expect("config");
//! if config.gemini.is_configured() {
//!     println!("Gemini model: {}", config.gemini.model);
//! }
//! ```

mod deepseek;
mod error;
mod gemini;
mod general;
mod sheets;
mod speech;
mod store;

pub use deepseek::DeepSeekConfig;
pub use error::ConfigError;
pub use gemini::GeminiConfig;
pub use general::GeneralConfig;
pub use sheets::SheetsConfig;
pub use speech::SpeechConfig;
pub use store::{StoreBackend, StoreConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct KewenConfig {
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub deepseek: DeepSeekConfig,
    #[serde(default)]
    pub speech: SpeechConfig,
    #[serde(default)]
    pub sheets: SheetsConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl KewenConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed or a
    /// value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or stack extra providers.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".kewen/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("KEWEN_").split("__"))
    }

    /// Directory holding the active session snapshot and its audio.
    #[must_use]
    pub fn session_dir(&self) -> PathBuf {
        if self.general.session_dir.is_empty() {
            Self::data_dir().join("session")
        } else {
            PathBuf::from(&self.general.session_dir)
        }
    }

    /// JSONL file used by the local record store backend.
    #[must_use]
    pub fn local_store_path(&self) -> PathBuf {
        if self.store.local_path.is_empty() {
            Self::data_dir().join("records.jsonl")
        } else {
            PathBuf::from(&self.store.local_path)
        }
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("kewen").join("config.toml"))
    }

    fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("kewen")
    }
}
