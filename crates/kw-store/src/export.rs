use chrono::{DateTime, Utc};
use kw_core::clock::export_timestamp;
use kw_core::entities::StudyRecord;
use kw_core::enums::AiModel;
use kw_text::normalize_cached;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// What to do when the record key already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportMode {
    /// Report the duplicate and write nothing.
    #[default]
    CreateOnly,
    /// Replace the existing record in place.
    Overwrite,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ExportOutcome {
    /// A new record was appended; `total` records are now stored.
    Created { total: usize },
    /// The existing record was replaced; `total` records are stored.
    Updated { total: usize },
    /// A record with the same key exists and nothing was written.
    Duplicate { existing: Box<StudyRecord> },
}

/// Everything an export needs, as entered in the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRequest {
    pub book_title: String,
    pub article_title: String,
    pub page_number: String,
    pub text: String,
    pub keywords: String,
    pub dictionary: String,
    pub model: AiModel,
}

impl ExportRequest {
    /// Check the fields an export requires, in the order a learner fills
    /// them in.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Incomplete`] naming the first missing field.
    pub fn validate(&self) -> Result<(), StoreError> {
        let missing = if self.text.trim().is_empty() {
            Some("請先輸入課文內容。")
        } else if self.keywords.trim().is_empty() {
            Some("請先輸入關鍵詞語。")
        } else if self.dictionary.trim().is_empty() {
            Some("請先生成字典。")
        } else if self.book_title.trim().is_empty() || self.article_title.trim().is_empty() {
            Some("請填寫書名和文章標題。")
        } else {
            None
        };
        missing.map_or(Ok(()), |message| Err(StoreError::Incomplete(message.into())))
    }

    /// The record to store: titles, text, and keywords in traditional
    /// script, stamped with Hong Kong local time.
    #[must_use]
    pub fn to_record(&self, now: DateTime<Utc>) -> StudyRecord {
        let traditional = |s: &str| normalize_cached(s.trim()).traditional;
        StudyRecord {
            export_date: export_timestamp(now),
            book_title: traditional(&self.book_title),
            article_title: traditional(&self.article_title),
            page_number: self.page_number.trim().to_string(),
            original_text: traditional(&self.text),
            keywords: traditional(&self.keywords),
            dictionary_data: self.dictionary.clone(),
            model_used: self.model.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn complete() -> ExportRequest {
        ExportRequest {
            book_title: " 小学语文 ".into(),
            article_title: "春晓".into(),
            page_number: " 12 ".into(),
            text: "春眠不觉晓".into(),
            keywords: "春眠,晓".into(),
            dictionary: "| 繁體 | 簡體 |".into(),
            model: AiModel::DeepSeek,
        }
    }

    #[rstest]
    #[case(|r: &mut ExportRequest| r.text.clear(), "請先輸入課文內容。")]
    #[case(|r: &mut ExportRequest| r.keywords = "  ".into(), "請先輸入關鍵詞語。")]
    #[case(|r: &mut ExportRequest| r.dictionary.clear(), "請先生成字典。")]
    #[case(|r: &mut ExportRequest| r.article_title.clear(), "請填寫書名和文章標題。")]
    fn validation_names_first_gap(#[case] strip: fn(&mut ExportRequest), #[case] message: &str) {
        let mut request = complete();
        strip(&mut request);
        assert_eq!(request.validate().unwrap_err().to_string(), message);
    }

    #[test]
    fn complete_request_validates() {
        assert!(complete().validate().is_ok());
    }

    #[test]
    fn record_is_traditional_and_stamped() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 20, 15, 0).unwrap();
        let record = complete().to_record(now);
        assert_eq!(record.export_date, "2025-03-02 04:15:00");
        assert_eq!(record.book_title, "小學語文");
        assert_eq!(record.article_title, "春曉");
        assert_eq!(record.page_number, "12");
        assert_eq!(record.original_text, "春眠不覺曉");
        assert_eq!(record.keywords, "春眠，曉");
        assert_eq!(record.model_used, "DeepSeek");
    }
}
