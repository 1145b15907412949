//! Review of exported records: cascading filters and the display view.
//!
//! Each filter's options come from the records that match every *other*
//! filter, so picking a book narrows the article list and vice versa. A
//! filter value that is no longer among its options resets to "all".

use std::cmp::Ordering;
use std::collections::BTreeSet;

use kw_core::entities::{DictionaryEntry, StudyRecord};
use kw_text::table::parse_dictionary_table;
use kw_text::{Marker, ScriptPair, highlight, normalize_cached};
use serde::{Deserialize, Serialize};

/// Label of the "no filter" option.
pub const ALL: &str = "所有";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Book,
    Article,
    Page,
    Model,
}

impl FilterField {
    pub const ALL: [Self; 4] = [Self::Book, Self::Article, Self::Page, Self::Model];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Book => "書名",
            Self::Article => "文章標題",
            Self::Page => "頁碼",
            Self::Model => "AI模型",
        }
    }

    fn value(self, record: &StudyRecord) -> &str {
        match self {
            Self::Book => &record.book_title,
            Self::Article => &record.article_title,
            Self::Page => &record.page_number,
            Self::Model => &record.model_used,
        }
    }
}

/// Selected filter values; `None` means all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFilter {
    #[serde(default)]
    pub book: Option<String>,
    #[serde(default)]
    pub article: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

/// Options for each filter, without the leading [`ALL`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub books: Vec<String>,
    pub articles: Vec<String>,
    pub pages: Vec<String>,
    pub models: Vec<String>,
}

impl FilterOptions {
    #[must_use]
    pub fn get(&self, field: FilterField) -> &[String] {
        match field {
            FilterField::Book => &self.books,
            FilterField::Article => &self.articles,
            FilterField::Page => &self.pages,
            FilterField::Model => &self.models,
        }
    }
}

impl RecordFilter {
    #[must_use]
    pub const fn get(&self, field: FilterField) -> Option<&String> {
        match field {
            FilterField::Book => self.book.as_ref(),
            FilterField::Article => self.article.as_ref(),
            FilterField::Page => self.page.as_ref(),
            FilterField::Model => self.model.as_ref(),
        }
    }

    /// Set a filter; [`ALL`] or a blank value clears it.
    pub fn set(&mut self, field: FilterField, value: Option<&str>) {
        let value = value
            .map(str::trim)
            .filter(|v| !v.is_empty() && *v != ALL)
            .map(String::from);
        match field {
            FilterField::Book => self.book = value,
            FilterField::Article => self.article = value,
            FilterField::Page => self.page = value,
            FilterField::Model => self.model = value,
        }
    }

    #[must_use]
    pub fn matches(&self, record: &StudyRecord) -> bool {
        self.matches_except(record, None)
    }

    fn matches_except(&self, record: &StudyRecord, skip: Option<FilterField>) -> bool {
        FilterField::ALL
            .into_iter()
            .filter(|field| Some(*field) != skip)
            .all(|field| {
                self.get(field)
                    .is_none_or(|wanted| field.value(record) == wanted)
            })
    }

    /// Records that pass every filter, in store order.
    #[must_use]
    pub fn apply<'a>(&self, records: &'a [StudyRecord]) -> Vec<&'a StudyRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }

    /// Distinct non-empty values per field among records matching the other
    /// filters. Pages sort numerically when they are all digits.
    #[must_use]
    pub fn options(&self, records: &[StudyRecord]) -> FilterOptions {
        let collect = |field: FilterField| {
            let values: BTreeSet<&str> = records
                .iter()
                .filter(|r| self.matches_except(r, Some(field)))
                .map(|r| field.value(r))
                .filter(|v| !v.is_empty())
                .collect();
            values.into_iter().map(String::from).collect::<Vec<_>>()
        };
        let mut pages = collect(FilterField::Page);
        pages.sort_by(|a, b| page_order(a, b));
        FilterOptions {
            books: collect(FilterField::Book),
            articles: collect(FilterField::Article),
            pages,
            models: collect(FilterField::Model),
        }
    }

    /// Reset every value that is no longer among its options.
    ///
    /// Returns the fields that were reset.
    pub fn reconcile(&mut self, records: &[StudyRecord]) -> Vec<FilterField> {
        let options = self.options(records);
        let stale: Vec<FilterField> = FilterField::ALL
            .into_iter()
            .filter(|field| {
                self.get(*field)
                    .is_some_and(|value| !options.get(*field).contains(value))
            })
            .collect();
        for field in &stale {
            self.set(*field, None);
        }
        stale
    }
}

fn page_order(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// A record ready for display: its text highlighted in both scripts and its
/// dictionary parsed into rows.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewView {
    pub label: String,
    pub record: StudyRecord,
    pub highlighted: ScriptPair,
    pub dictionary: Vec<DictionaryEntry>,
}

impl ReviewView {
    #[must_use]
    pub fn new(record: &StudyRecord) -> Self {
        let pair = normalize_cached(&record.original_text);
        Self {
            label: record.label(),
            highlighted: highlight(
                &pair.traditional,
                &pair.simplified,
                &record.keywords,
                &Marker::default(),
            ),
            dictionary: parse_dictionary_table(&record.dictionary_data),
            record: record.clone(),
        }
    }
}
