use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use kw_core::entities::StudyRecord;
use moka::sync::Cache;

use crate::error::StoreError;
use crate::export::{ExportMode, ExportOutcome, ExportRequest};
use crate::key::RecordKey;
use crate::store::RecordStore;

/// Record store access with a short-lived listing cache.
///
/// [`records`](Self::records) is served from the cache until it expires or a
/// write through this service invalidates it.
pub struct RecordService<S> {
    store: S,
    cache: Cache<(), Arc<Vec<StudyRecord>>>,
}

impl<S: RecordStore> RecordService<S> {
    #[must_use]
    pub fn new(store: S, ttl: Duration) -> Self {
        Self {
            store,
            cache: Cache::builder().max_capacity(1).time_to_live(ttl).build(),
        }
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// All stored records, possibly up to one TTL stale.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend listing fails.
    pub async fn records(&self) -> Result<Arc<Vec<StudyRecord>>, StoreError> {
        if let Some(records) = self.cache.get(&()) {
            return Ok(records);
        }
        let records = Arc::new(self.store.list_all().await?);
        self.cache.insert((), Arc::clone(&records));
        Ok(records)
    }

    pub fn invalidate(&self) {
        self.cache.invalidate_all();
    }

    /// The first record with `key` and its row index.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend listing fails.
    pub async fn find(&self, key: &RecordKey) -> Result<Option<(usize, StudyRecord)>, StoreError> {
        let records = self.records().await?;
        Ok(records
            .iter()
            .enumerate()
            .find(|(_, record)| key.matches(record))
            .map(|(index, record)| (index, record.clone())))
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend listing fails.
    pub async fn exists(&self, key: &RecordKey) -> Result<bool, StoreError> {
        Ok(self.find(key).await?.is_some())
    }

    /// Export a study session.
    ///
    /// A new key is appended. An existing key is reported as
    /// [`ExportOutcome::Duplicate`] under [`ExportMode::CreateOnly`] and
    /// replaced in place under [`ExportMode::Overwrite`]. The lookup reads
    /// fresh data, not the cache.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Incomplete`] if a required field is empty, or
    /// the backend's error if a read or write fails.
    pub async fn export(
        &self,
        request: &ExportRequest,
        mode: ExportMode,
        now: DateTime<Utc>,
    ) -> Result<ExportOutcome, StoreError> {
        request.validate()?;
        let record = request.to_record(now);
        let key = RecordKey::of(&record);

        self.invalidate();
        let records = self.records().await?;
        let existing = records
            .iter()
            .enumerate()
            .find(|(_, stored)| key.matches(stored));

        let outcome = match (existing, mode) {
            (Some((_, stored)), ExportMode::CreateOnly) => {
                return Ok(ExportOutcome::Duplicate {
                    existing: Box::new(stored.clone()),
                });
            }
            (Some((index, _)), ExportMode::Overwrite) => {
                self.store.update_row(index, &record).await?;
                ExportOutcome::Updated {
                    total: records.len(),
                }
            }
            (None, _) => {
                self.store.append(&record).await?;
                ExportOutcome::Created {
                    total: records.len() + 1,
                }
            }
        };
        self.invalidate();
        tracing::info!(
            book = %record.book_title,
            article = %record.article_title,
            model = %record.model_used,
            ?outcome,
            "exported study record"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-memory store counting `list_all` calls.
    #[derive(Default)]
    struct MemoryStore {
        rows: Mutex<Vec<StudyRecord>>,
        lists: AtomicUsize,
    }

    impl RecordStore for MemoryStore {
        async fn list_all(&self) -> Result<Vec<StudyRecord>, StoreError> {
            self.lists.fetch_add(1, Ordering::SeqCst);
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn append(&self, record: &StudyRecord) -> Result<(), StoreError> {
            self.rows.lock().unwrap().push(record.clone());
            Ok(())
        }

        async fn update_row(&self, index: usize, record: &StudyRecord) -> Result<(), StoreError> {
            self.rows.lock().unwrap()[index] = record.clone();
            Ok(())
        }
    }

    #[tokio::test]
    async fn listing_is_cached_until_invalidated() {
        let service = RecordService::new(MemoryStore::default(), Duration::from_secs(30));
        service.records().await.unwrap();
        service.records().await.unwrap();
        assert_eq!(service.store().lists.load(Ordering::SeqCst), 1);

        service.invalidate();
        service.records().await.unwrap();
        assert_eq!(service.store().lists.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn export_invalidates_cache() {
        let service = RecordService::new(MemoryStore::default(), Duration::from_secs(30));
        assert!(service.records().await.unwrap().is_empty());

        let request = ExportRequest {
            book_title: "X".into(),
            article_title: "Y".into(),
            text: "文".into(),
            keywords: "文".into(),
            dictionary: "| 文 |".into(),
            ..Default::default()
        };
        service
            .export(&request, ExportMode::CreateOnly, Utc::now())
            .await
            .unwrap();
        assert_eq!(service.records().await.unwrap().len(), 1);
    }
}
