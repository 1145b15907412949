use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One flagged span from a typo check, with the user's chosen replacement.
///
/// `replacement` starts out equal to `suggested`; an empty replacement means
/// the flagged span is removed from the corrected text.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TypoCorrection {
    pub flagged: String,
    pub suggested: String,
    pub replacement: String,
    #[serde(default)]
    pub explanation: String,
}

impl TypoCorrection {
    #[must_use]
    pub fn new(
        flagged: impl Into<String>,
        suggested: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        let suggested = suggested.into();
        Self {
            flagged: flagged.into(),
            replacement: suggested.clone(),
            suggested,
            explanation: explanation.into(),
        }
    }

    #[must_use]
    pub fn is_removal(&self) -> bool {
        self.replacement.trim().is_empty()
    }
}
