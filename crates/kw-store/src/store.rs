use std::future::Future;

use kw_core::entities::StudyRecord;

use crate::error::StoreError;

/// Tabular backend for study records.
///
/// Rows are addressed by their position in [`list_all`](Self::list_all)
/// order, starting at 0.
pub trait RecordStore {
    fn list_all(&self) -> impl Future<Output = Result<Vec<StudyRecord>, StoreError>> + Send;

    fn append(
        &self,
        record: &StudyRecord,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    fn update_row(
        &self,
        index: usize,
        record: &StudyRecord,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;
}
