//! Google Sheets record store configuration.

use serde::{Deserialize, Serialize};

fn default_spreadsheet_name() -> String {
    String::from("Chinese Learning Records")
}

fn default_worksheet() -> String {
    String::from("Sheet1")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SheetsConfig {
    /// Inline service-account key JSON.
    #[serde(default)]
    pub credentials_json: String,

    /// Path to a service-account key file. Used when `credentials_json` is empty.
    #[serde(default)]
    pub credentials_path: String,

    /// Spreadsheet ID. When empty the spreadsheet is looked up by name.
    #[serde(default)]
    pub spreadsheet_id: String,

    #[serde(default = "default_spreadsheet_name")]
    pub spreadsheet_name: String,

    /// Worksheet (tab) holding the records.
    #[serde(default = "default_worksheet")]
    pub worksheet: String,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            credentials_json: String::new(),
            credentials_path: String::new(),
            spreadsheet_id: String::new(),
            spreadsheet_name: default_spreadsheet_name(),
            worksheet: default_worksheet(),
        }
    }
}

impl SheetsConfig {
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        !self.credentials_json.is_empty() || !self.credentials_path.is_empty()
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.has_credentials()
            && (!self.spreadsheet_id.is_empty() || !self.spreadsheet_name.is_empty())
    }
}
