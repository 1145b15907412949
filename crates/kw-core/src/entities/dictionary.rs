use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One row of an AI dictionary table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub traditional: String,
    pub simplified: String,
    pub pinyin: String,
    pub definition: String,
    pub example_traditional: String,
    pub example_simplified: String,
}
