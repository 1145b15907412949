//! Record store backend selection.

use serde::{Deserialize, Serialize};

const fn default_cache_ttl_secs() -> u64 {
    30
}

/// Where study records are persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    /// Shared Google Sheets spreadsheet.
    #[default]
    Sheets,
    /// Local JSONL file, one record per line.
    Local,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,

    /// JSONL path for the local backend. Empty means the user data dir.
    #[serde(default)]
    pub local_path: String,

    /// How long a listed record set stays fresh, in seconds.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            local_path: String::new(),
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}
