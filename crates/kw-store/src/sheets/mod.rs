//! Google Sheets backend.
//!
//! The worksheet's first row holds the column names, [`RECORD_COLUMNS`] on a
//! sheet this store created; every following row is one record. Reads and
//! writes both lay cells out by that header, so reordered columns survive.
//! Record index `i` lives on sheet row `i + 2`.

mod auth;

pub use auth::{ServiceAccountKey, TokenProvider};

use std::time::Duration;

use kw_config::SheetsConfig;
use kw_core::entities::{RECORD_COLUMNS, StudyRecord};
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;

use crate::error::StoreError;
use crate::store::RecordStore;

const SHEETS_API: &str = "https://sheets.googleapis.com/v4/spreadsheets";
const DRIVE_API: &str = "https://www.googleapis.com/drive/v3/files";
const SPREADSHEET_MIME: &str = "application/vnd.google-apps.spreadsheet";
const LAST_COLUMN: char = 'H';

#[derive(Debug, Default, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

#[derive(Serialize)]
struct ValueRangeBody<'a> {
    #[serde(rename = "majorDimension")]
    major_dimension: &'static str,
    values: &'a [Vec<String>],
}

#[derive(Deserialize)]
struct DriveFileList {
    #[serde(default)]
    files: Vec<DriveFile>,
}

#[derive(Deserialize)]
struct DriveFile {
    id: String,
}

/// Which spreadsheet to open.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SpreadsheetRef {
    Id(String),
    Name(String),
}

pub struct SheetsStore {
    http: reqwest::Client,
    auth: TokenProvider,
    spreadsheet: SpreadsheetRef,
    spreadsheet_id: OnceCell<String>,
    worksheet: String,
}

impl SheetsStore {
    /// Build a store from configuration.
    ///
    /// Credentials come from `credentials_json`, or the file at
    /// `credentials_path`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotConfigured`] without credentials,
    /// [`StoreError::Io`] if the credentials file cannot be read, or
    /// [`StoreError::Credentials`] if the key is malformed.
    pub fn from_config(config: &SheetsConfig, timeout: Duration) -> Result<Self, StoreError> {
        if !config.is_configured() {
            return Err(StoreError::NotConfigured(
                "set KEWEN_SHEETS__CREDENTIALS_JSON or KEWEN_SHEETS__CREDENTIALS_PATH".into(),
            ));
        }
        let json = if config.credentials_json.trim().is_empty() {
            std::fs::read_to_string(&config.credentials_path)?
        } else {
            config.credentials_json.clone()
        };
        let key = ServiceAccountKey::from_json(&json)?;

        let http = reqwest::Client::builder()
            .user_agent("kewen/0.1")
            .timeout(timeout)
            .build()?;
        let spreadsheet = if config.spreadsheet_id.trim().is_empty() {
            SpreadsheetRef::Name(config.spreadsheet_name.clone())
        } else {
            SpreadsheetRef::Id(config.spreadsheet_id.trim().to_string())
        };

        Ok(Self {
            auth: TokenProvider::new(http.clone(), key)?,
            http,
            spreadsheet,
            spreadsheet_id: OnceCell::new(),
            worksheet: config.worksheet.clone(),
        })
    }

    async fn spreadsheet_id(&self) -> Result<&str, StoreError> {
        self.spreadsheet_id
            .get_or_try_init(|| async {
                match &self.spreadsheet {
                    SpreadsheetRef::Id(id) => Ok(id.clone()),
                    SpreadsheetRef::Name(name) => self.find_spreadsheet(name).await,
                }
            })
            .await
            .map(String::as_str)
    }

    async fn find_spreadsheet(&self, name: &str) -> Result<String, StoreError> {
        let url = format!(
            "{DRIVE_API}?q={}&fields=files(id)&pageSize=1",
            urlencoding::encode(&drive_query(name))
        );
        let token = self.auth.token().await?;
        let resp = check_response(self.http.get(&url).bearer_auth(token).send().await?).await?;
        let list: DriveFileList = resp.json().await?;
        let id = list
            .files
            .into_iter()
            .next()
            .map(|file| file.id)
            .ok_or_else(|| StoreError::NotFound(format!("spreadsheet '{name}'")))?;
        tracing::debug!(name, id = %id, "resolved spreadsheet by name");
        Ok(id)
    }

    async fn get_values(&self, range: &str) -> Result<ValueRange, StoreError> {
        let id = self.spreadsheet_id().await?;
        let token = self.auth.token().await?;
        let resp = self
            .http
            .get(values_url(id, &self.worksheet, range))
            .bearer_auth(token)
            .send()
            .await?;
        Ok(check_response(resp).await?.json().await?)
    }

    /// Column names from the first row; empty on a blank sheet.
    async fn header(&self) -> Result<Vec<String>, StoreError> {
        let range = self.get_values(&format!("A1:{LAST_COLUMN}1")).await?;
        Ok(range.values.into_iter().next().map(cells).unwrap_or_default())
    }
}

impl RecordStore for SheetsStore {
    async fn list_all(&self) -> Result<Vec<StudyRecord>, StoreError> {
        let range = self.get_values(&format!("A1:{LAST_COLUMN}")).await?;
        let records = records_from_values(range.values);
        tracing::debug!(records = records.len(), "listed sheet records");
        Ok(records)
    }

    async fn append(&self, record: &StudyRecord) -> Result<(), StoreError> {
        let header = self.header().await?;
        let rows = append_rows(&header, record);

        let id = self.spreadsheet_id().await?;
        let url = append_url(id, &self.worksheet);
        let token = self.auth.token().await?;
        let body = ValueRangeBody {
            major_dimension: "ROWS",
            values: &rows,
        };
        check_response(self.http.post(&url).bearer_auth(token).json(&body).send().await?).await?;
        tracing::debug!(book = %record.book_title, "appended sheet row");
        Ok(())
    }

    async fn update_row(&self, index: usize, record: &StudyRecord) -> Result<(), StoreError> {
        let header = self.header().await?;
        let rows = [record.to_cells(&header)];

        let id = self.spreadsheet_id().await?;
        let url = update_url(id, &self.worksheet, index);
        let token = self.auth.token().await?;
        let body = ValueRangeBody {
            major_dimension: "ROWS",
            values: &rows,
        };
        check_response(self.http.put(&url).bearer_auth(token).json(&body).send().await?).await?;
        tracing::debug!(row = index + 2, book = %record.book_title, "updated sheet row");
        Ok(())
    }
}

async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, StoreError> {
    if !resp.status().is_success() {
        return Err(StoreError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

fn values_url(id: &str, worksheet: &str, range: &str) -> String {
    format!(
        "{SHEETS_API}/{id}/values/{}",
        urlencoding::encode(&format!("{worksheet}!{range}"))
    )
}

fn append_url(id: &str, worksheet: &str) -> String {
    format!(
        "{}:append?valueInputOption=RAW&insertDataOption=INSERT_ROWS",
        values_url(id, worksheet, &format!("A1:{LAST_COLUMN}"))
    )
}

fn update_url(id: &str, worksheet: &str, index: usize) -> String {
    let row = index + 2;
    format!(
        "{}?valueInputOption=RAW",
        values_url(id, worksheet, &format!("A{row}:{LAST_COLUMN}{row}"))
    )
}

/// Rows to append under `header`. A blank sheet gets the header row first.
fn append_rows(header: &[String], record: &StudyRecord) -> Vec<Vec<String>> {
    if header.is_empty() {
        vec![RECORD_COLUMNS.map(String::from).to_vec(), record.to_row()]
    } else {
        vec![record.to_cells(header)]
    }
}

fn drive_query(name: &str) -> String {
    format!(
        "name = '{}' and mimeType = '{SPREADSHEET_MIME}' and trashed = false",
        name.replace('\\', "\\\\").replace('\'', "\\'")
    )
}

fn cells(row: Vec<serde_json::Value>) -> Vec<String> {
    row.into_iter()
        .map(|cell| match cell {
            serde_json::Value::String(s) => s,
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        })
        .collect()
}

/// Records from a values grid whose first row is the header.
fn records_from_values(values: Vec<Vec<serde_json::Value>>) -> Vec<StudyRecord> {
    let mut rows = values.into_iter().map(cells);
    let Some(header) = rows.next() else {
        return Vec::new();
    };
    rows.map(|cells| StudyRecord::from_cells(&header, &cells))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r#"{
        "range": "Sheet1!A1:H3",
        "majorDimension": "ROWS",
        "values": [
            ["export_date", "book_title", "article_title", "page_number", "original_text_trad", "keywords", "dictionary_data", "model_used"],
            ["2025-03-02 04:15:00", "小學語文", "春曉", 12, "春眠不覺曉", "春眠", "| 繁體 |", "Gemini"],
            ["2025-03-03 09:00:00", "小學語文", "靜夜思"]
        ]
    }"#;

    #[test]
    fn parses_values_with_header_row() {
        let range: ValueRange = serde_json::from_str(FIXTURE).unwrap();
        let records = records_from_values(range.values);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].page_number, "12");
        assert_eq!(records[0].original_text, "春眠不覺曉");
        assert_eq!(records[0].model_used, "Gemini");
        assert_eq!(records[1].article_title, "靜夜思");
        assert!(records[1].model_used.is_empty());
    }

    #[test]
    fn empty_sheet_has_no_records() {
        let range: ValueRange = serde_json::from_str(r#"{"range": "Sheet1!A1:H1"}"#).unwrap();
        assert!(records_from_values(range.values).is_empty());
    }

    #[test]
    fn drive_query_escapes_quotes() {
        assert_eq!(
            drive_query("Tom's Records"),
            "name = 'Tom\\'s Records' and mimeType = 'application/vnd.google-apps.spreadsheet' and trashed = false"
        );
    }

    #[test]
    fn body_uses_row_major_values() {
        let rows = [vec!["a".to_string(), "b".to_string()]];
        let body = ValueRangeBody {
            major_dimension: "ROWS",
            values: &rows,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"majorDimension": "ROWS", "values": [["a", "b"]]})
        );
    }

    fn record() -> StudyRecord {
        StudyRecord {
            export_date: "2025-03-02 04:15:00".into(),
            book_title: "小學語文".into(),
            article_title: "春曉".into(),
            page_number: "12".into(),
            model_used: "Gemini".into(),
            ..Default::default()
        }
    }

    #[test]
    fn blank_sheet_gets_header_before_first_row() {
        let rows = append_rows(&[], &record());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], RECORD_COLUMNS.map(String::from).to_vec());
        assert_eq!(rows[1], record().to_row());
    }

    #[test]
    fn writes_follow_reordered_header() {
        let header: Vec<String> = ["model_used", "book_title", "article_title", "export_date"]
            .map(String::from)
            .to_vec();
        let rows = append_rows(&header, &record());
        assert_eq!(
            rows,
            vec![vec!["Gemini", "小學語文", "春曉", "2025-03-02 04:15:00"]]
        );

        let mut grid = vec![header.iter().map(|h| serde_json::json!(h)).collect::<Vec<_>>()];
        grid.push(rows[0].iter().map(|c| serde_json::json!(c)).collect());
        let read_back = records_from_values(grid);
        assert_eq!(read_back[0].model_used, "Gemini");
        assert_eq!(read_back[0].export_date, "2025-03-02 04:15:00");
    }

    #[test]
    fn append_url_targets_whole_table() {
        assert_eq!(
            append_url("sheet-id", "Sheet1"),
            "https://sheets.googleapis.com/v4/spreadsheets/sheet-id/values/Sheet1%21A1%3AH:append?valueInputOption=RAW&insertDataOption=INSERT_ROWS"
        );
    }

    #[test]
    fn update_url_skips_header_row() {
        assert_eq!(
            update_url("sheet-id", "Sheet1", 0),
            "https://sheets.googleapis.com/v4/spreadsheets/sheet-id/values/Sheet1%21A2%3AH2?valueInputOption=RAW"
        );
        assert!(update_url("sheet-id", "記錄", 4).contains("A6%3AH6"));
    }

    #[test]
    fn unconfigured_sheets_are_rejected() {
        let err = SheetsStore::from_config(&SheetsConfig::default(), Duration::from_secs(5))
            .err()
            .unwrap();
        assert!(matches!(err, StoreError::NotConfigured(_)));
    }
}
