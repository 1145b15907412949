//! Completion model and translation direction enums.
//!
//! Both serialize in `snake_case` for session snapshots. The model's
//! `as_str()` form is what gets written into the record store's model column.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// AiModel
// ---------------------------------------------------------------------------

/// Completion provider used for typo checks, keywords, and dictionary lookups.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum AiModel {
    #[default]
    #[serde(alias = "Gemini")]
    Gemini,
    #[serde(rename = "deepseek", alias = "DeepSeek", alias = "deep_seek")]
    DeepSeek,
}

impl AiModel {
    pub const ALL: [Self; 2] = [Self::Gemini, Self::DeepSeek];

    /// Identifier stored in the record store's model column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gemini => "Gemini",
            Self::DeepSeek => "DeepSeek",
        }
    }
}

impl fmt::Display for AiModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AiModel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" => Ok(Self::Gemini),
            "deepseek" | "deep_seek" | "deep-seek" => Ok(Self::DeepSeek),
            _ => Err(CoreError::unknown("model", s)),
        }
    }
}

// ---------------------------------------------------------------------------
// TranslationDirection
// ---------------------------------------------------------------------------

/// Direction for the two-way translation tool.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum TranslationDirection {
    #[default]
    ChineseToEnglish,
    EnglishToChinese,
}

impl TranslationDirection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ChineseToEnglish => "zh-en",
            Self::EnglishToChinese => "en-zh",
        }
    }
}

impl fmt::Display for TranslationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TranslationDirection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zh-en" | "zh_en" | "chinese_to_english" => Ok(Self::ChineseToEnglish),
            "en-zh" | "en_zh" | "english_to_chinese" => Ok(Self::EnglishToChinese),
            _ => Err(CoreError::unknown("translation direction", s)),
        }
    }
}
