//! JSONL file backend.
//!
//! One record per line. Appends go through `serde_jsonlines::append_json_lines`;
//! updates rewrite the file through a temp file in the same directory and
//! rename it into place.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use kw_core::entities::StudyRecord;

use crate::error::StoreError;
use crate::store::RecordStore;

pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Vec<StudyRecord>, StoreError> {
        let lines = match serde_jsonlines::json_lines::<StudyRecord, _>(&self.path) {
            Ok(lines) => lines,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(lines.collect::<std::io::Result<Vec<_>>>()?)
    }

    fn ensure_parent(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    fn write_all(&self, records: &[StudyRecord]) -> Result<(), StoreError> {
        self.ensure_parent()?;
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let tmp = tempfile::NamedTempFile::new_in(dir)?;
        serde_jsonlines::write_json_lines(tmp.path(), records)?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }
}

impl RecordStore for LocalStore {
    async fn list_all(&self) -> Result<Vec<StudyRecord>, StoreError> {
        self.read_all()
    }

    async fn append(&self, record: &StudyRecord) -> Result<(), StoreError> {
        self.ensure_parent()?;
        serde_jsonlines::append_json_lines(&self.path, [record])?;
        tracing::debug!(path = %self.path.display(), "appended record");
        Ok(())
    }

    async fn update_row(&self, index: usize, record: &StudyRecord) -> Result<(), StoreError> {
        let mut records = self.read_all()?;
        let len = records.len();
        let slot = records
            .get_mut(index)
            .ok_or(StoreError::RowOutOfRange { index, len })?;
        slot.clone_from(record);
        self.write_all(&records)?;
        tracing::debug!(path = %self.path.display(), index, "updated record");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(book: &str) -> StudyRecord {
        StudyRecord {
            book_title: book.into(),
            model_used: "Gemini".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn missing_file_lists_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path().join("records.jsonl"));
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn append_then_update() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path().join("nested").join("records.jsonl"));
        store.append(&record("甲")).await.unwrap();
        store.append(&record("乙")).await.unwrap();

        store.update_row(1, &record("丙")).await.unwrap();

        let books: Vec<_> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.book_title)
            .collect();
        assert_eq!(books, vec!["甲", "丙"]);
    }

    #[tokio::test]
    async fn update_out_of_range_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path().join("records.jsonl"));
        let err = store.update_row(0, &record("甲")).await.unwrap_err();
        assert!(matches!(err, StoreError::RowOutOfRange { index: 0, len: 0 }));
    }
}
