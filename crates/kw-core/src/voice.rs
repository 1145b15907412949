//! Static voice catalog for bilingual speech synthesis.
//!
//! Each language has its own enum so a Cantonese slot can never hold a
//! Mandarin voice. Variants serialize as the provider's voice identifier.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Spoken language variant of a synthesized clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SpeechLanguage {
    Cantonese,
    Mandarin,
}

impl SpeechLanguage {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cantonese => "cantonese",
            Self::Mandarin => "mandarin",
        }
    }

    /// Heading shown above a clip of this language.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Cantonese => "粵語發音",
            Self::Mandarin => "普通話發音",
        }
    }
}

impl fmt::Display for SpeechLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum CantoneseVoice {
    #[default]
    #[serde(rename = "yue-CN-XiaoMinNeural")]
    XiaoMin,
    #[serde(rename = "yue-CN-YunSongNeural")]
    YunSong,
}

impl CantoneseVoice {
    pub const ALL: [Self; 2] = [Self::XiaoMin, Self::YunSong];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::XiaoMin => "yue-CN-XiaoMinNeural",
            Self::YunSong => "yue-CN-YunSongNeural",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::XiaoMin => "曉敏 (Female)",
            Self::YunSong => "雲松 (Male)",
        }
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum MandarinVoice {
    #[default]
    #[serde(rename = "zh-CN-XiaoxiaoNeural")]
    Xiaoxiao,
    #[serde(rename = "zh-CN-YunyangNeural")]
    Yunyang,
    #[serde(rename = "zh-CN-YunxiNeural")]
    Yunxi,
    #[serde(rename = "zh-CN-XiaoyiNeural")]
    Xiaoyi,
}

impl MandarinVoice {
    pub const ALL: [Self; 4] = [Self::Xiaoxiao, Self::Yunyang, Self::Yunxi, Self::Xiaoyi];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Xiaoxiao => "zh-CN-XiaoxiaoNeural",
            Self::Yunyang => "zh-CN-YunyangNeural",
            Self::Yunxi => "zh-CN-YunxiNeural",
            Self::Xiaoyi => "zh-CN-XiaoyiNeural",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Xiaoxiao => "晓晓 (Female)",
            Self::Yunyang => "云扬 (Male)",
            Self::Yunxi => "云希 (Male)",
            Self::Xiaoyi => "晓伊 (Female)",
        }
    }
}

/// Any voice in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Voice {
    Cantonese(CantoneseVoice),
    Mandarin(MandarinVoice),
}

impl Voice {
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Cantonese(voice) => voice.id(),
            Self::Mandarin(voice) => voice.id(),
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cantonese(voice) => voice.label(),
            Self::Mandarin(voice) => voice.label(),
        }
    }

    #[must_use]
    pub const fn language(self) -> SpeechLanguage {
        match self {
            Self::Cantonese(_) => SpeechLanguage::Cantonese,
            Self::Mandarin(_) => SpeechLanguage::Mandarin,
        }
    }

    /// Every voice in catalog order, Cantonese first.
    pub fn catalog() -> impl Iterator<Item = Self> {
        CantoneseVoice::ALL
            .into_iter()
            .map(Self::Cantonese)
            .chain(MandarinVoice::ALL.into_iter().map(Self::Mandarin))
    }
}

impl fmt::Display for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Voice {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::catalog()
            .find(|voice| voice.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::unknown("voice", s))
    }
}

impl FromStr for CantoneseVoice {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<Voice>() {
            Ok(Voice::Cantonese(voice)) => Ok(voice),
            _ => Err(CoreError::unknown("cantonese voice", s)),
        }
    }
}

impl FromStr for MandarinVoice {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<Voice>() {
            Ok(Voice::Mandarin(voice)) => Ok(voice),
            _ => Err(CoreError::unknown("mandarin voice", s)),
        }
    }
}

/// The pair of voices a session synthesizes with.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub struct VoiceSelection {
    pub cantonese: CantoneseVoice,
    pub mandarin: MandarinVoice,
}

impl VoiceSelection {
    /// Voices in synthesis order.
    #[must_use]
    pub const fn voices(self) -> [Voice; 2] {
        [Voice::Cantonese(self.cantonese), Voice::Mandarin(self.mandarin)]
    }

    #[must_use]
    pub const fn with(self, voice: Voice) -> Self {
        match voice {
            Voice::Cantonese(cantonese) => Self { cantonese, ..self },
            Voice::Mandarin(mandarin) => Self { mandarin, ..self },
        }
    }
}
