use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Record store columns, in sheet order.
pub const RECORD_COLUMNS: [&str; 8] = [
    "export_date",
    "book_title",
    "article_title",
    "page_number",
    "original_text_trad",
    "keywords",
    "dictionary_data",
    "model_used",
];

/// An exported study session: the text, its keywords, and the dictionary
/// explanation produced by a completion model.
///
/// Text, keywords, and titles are stored in traditional script. Identity is
/// the (book, article, model) triple, compared through a canonical key.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StudyRecord {
    #[serde(default)]
    pub export_date: String,
    #[serde(default)]
    pub book_title: String,
    #[serde(default)]
    pub article_title: String,
    #[serde(default)]
    pub page_number: String,
    #[serde(default, rename = "original_text_trad")]
    pub original_text: String,
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub dictionary_data: String,
    #[serde(default)]
    pub model_used: String,
}

impl StudyRecord {
    /// Cell values in [`RECORD_COLUMNS`] order.
    #[must_use]
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.export_date.clone(),
            self.book_title.clone(),
            self.article_title.clone(),
            self.page_number.clone(),
            self.original_text.clone(),
            self.keywords.clone(),
            self.dictionary_data.clone(),
            self.model_used.clone(),
        ]
    }

    /// Cell values laid out under `header`, the inverse of
    /// [`from_cells`](Self::from_cells).
    ///
    /// Columns this record does not know are written empty. With an empty
    /// header the cells follow [`RECORD_COLUMNS`].
    #[must_use]
    pub fn to_cells(&self, header: &[String]) -> Vec<String> {
        if header.is_empty() {
            return self.to_row();
        }
        header
            .iter()
            .map(|name| self.field(name).cloned().unwrap_or_default())
            .collect()
    }

    /// Build a record from sheet cells.
    ///
    /// `header` maps cells to fields by column name, the way the sheet's
    /// first row labels them. Unknown headers are ignored and missing cells
    /// are empty. With an empty header the cells are read positionally.
    #[must_use]
    pub fn from_cells(header: &[String], cells: &[String]) -> Self {
        let mut record = Self::default();
        let positional;
        let names: &[String] = if header.is_empty() {
            positional = RECORD_COLUMNS.map(String::from).to_vec();
            &positional
        } else {
            header
        };

        for (name, value) in names.iter().zip(cells) {
            if let Some(slot) = record.field_mut(name) {
                slot.clone_from(value);
            }
        }
        record
    }

    fn field(&self, column: &str) -> Option<&String> {
        Some(match column.trim() {
            "export_date" => &self.export_date,
            "book_title" => &self.book_title,
            "article_title" => &self.article_title,
            "page_number" => &self.page_number,
            "original_text_trad" => &self.original_text,
            "keywords" => &self.keywords,
            "dictionary_data" => &self.dictionary_data,
            "model_used" => &self.model_used,
            _ => return None,
        })
    }

    fn field_mut(&mut self, column: &str) -> Option<&mut String> {
        Some(match column.trim() {
            "export_date" => &mut self.export_date,
            "book_title" => &mut self.book_title,
            "article_title" => &mut self.article_title,
            "page_number" => &mut self.page_number,
            "original_text_trad" => &mut self.original_text,
            "keywords" => &mut self.keywords,
            "dictionary_data" => &mut self.dictionary_data,
            "model_used" => &mut self.model_used,
            _ => return None,
        })
    }

    /// One-line label used when picking a record to review.
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "{} - {} (頁 {}) - {} - {}",
            self.book_title, self.article_title, self.page_number, self.model_used, self.export_date
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> StudyRecord {
        StudyRecord {
            export_date: "2025-03-02 04:15:00".into(),
            book_title: "小學語文".into(),
            article_title: "春曉".into(),
            page_number: "12".into(),
            original_text: "春眠不覺曉".into(),
            keywords: "春眠,曉".into(),
            dictionary_data: "| 繁體 | 簡體 |".into(),
            model_used: "Gemini".into(),
        }
    }

    #[test]
    fn row_follows_column_order() {
        let row = sample().to_row();
        assert_eq!(row.len(), RECORD_COLUMNS.len());
        assert_eq!(row[0], "2025-03-02 04:15:00");
        assert_eq!(row[4], "春眠不覺曉");
        assert_eq!(row[7], "Gemini");
    }

    #[test]
    fn from_cells_maps_by_header_name() {
        let header: Vec<String> = ["model_used", "book_title", "unrelated"]
            .map(String::from)
            .to_vec();
        let cells: Vec<String> = ["DeepSeek", "書", "x"].map(String::from).to_vec();
        let record = StudyRecord::from_cells(&header, &cells);
        assert_eq!(record.model_used, "DeepSeek");
        assert_eq!(record.book_title, "書");
        assert!(record.article_title.is_empty());
    }

    #[test]
    fn from_cells_without_header_is_positional() {
        let original = sample();
        let record = StudyRecord::from_cells(&[], &original.to_row());
        assert_eq!(record, original);
    }

    #[test]
    fn to_cells_follows_header_order() {
        let header: Vec<String> = ["model_used", "export_date", "notes", "book_title"]
            .map(String::from)
            .to_vec();
        let record = sample();
        let cells = record.to_cells(&header);
        assert_eq!(cells, vec!["Gemini", "2025-03-02 04:15:00", "", "小學語文"]);

        let read_back = StudyRecord::from_cells(&header, &cells);
        assert_eq!(read_back.model_used, record.model_used);
        assert_eq!(read_back.export_date, record.export_date);
        assert_eq!(read_back.book_title, record.book_title);
    }

    #[test]
    fn to_cells_without_header_is_positional() {
        assert_eq!(sample().to_cells(&[]), sample().to_row());
    }

    #[test]
    fn from_cells_tolerates_short_rows() {
        let cells: Vec<String> = ["2025-01-01 00:00:00", "書"].map(String::from).to_vec();
        let record = StudyRecord::from_cells(&[], &cells);
        assert_eq!(record.book_title, "書");
        assert!(record.model_used.is_empty());
    }

    #[test]
    fn label_includes_page_marker() {
        assert_eq!(
            sample().label(),
            "小學語文 - 春曉 (頁 12) - Gemini - 2025-03-02 04:15:00"
        );
    }
}
