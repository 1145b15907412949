use kw_core::entities::StudyRecord;
use kw_text::canon_key;

/// Record identity: (book, article, model), compared case-insensitively with
/// whitespace normalized and titles folded to traditional script.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordKey {
    book: String,
    article: String,
    model: String,
}

impl RecordKey {
    #[must_use]
    pub fn new(book: &str, article: &str, model: &str) -> Self {
        Self {
            book: canon_key(book),
            article: canon_key(article),
            model: model.trim().to_lowercase(),
        }
    }

    #[must_use]
    pub fn of(record: &StudyRecord) -> Self {
        Self::new(&record.book_title, &record.article_title, &record.model_used)
    }

    #[must_use]
    pub fn matches(&self, record: &StudyRecord) -> bool {
        *self == Self::of(record)
    }
}
