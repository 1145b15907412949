use std::time::Duration;

use kw_config::{KewenConfig, StoreBackend};
use kw_core::entities::StudyRecord;

use crate::error::StoreError;
use crate::local::LocalStore;
use crate::sheets::SheetsStore;
use crate::store::RecordStore;

/// The store selected by `store.backend`.
pub enum Backend {
    Sheets(SheetsStore),
    Local(LocalStore),
}

impl Backend {
    /// # Errors
    ///
    /// Returns [`StoreError`] if the Sheets backend is selected but cannot
    /// be built from its configuration.
    pub fn from_config(config: &KewenConfig) -> Result<Self, StoreError> {
        match config.store.backend {
            StoreBackend::Sheets => {
                let timeout = Duration::from_secs(config.general.request_timeout_secs);
                Ok(Self::Sheets(SheetsStore::from_config(&config.sheets, timeout)?))
            }
            StoreBackend::Local => Ok(Self::Local(LocalStore::new(config.local_store_path()))),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sheets(_) => "sheets",
            Self::Local(_) => "local",
        }
    }
}

impl RecordStore for Backend {
    async fn list_all(&self) -> Result<Vec<StudyRecord>, StoreError> {
        match self {
            Self::Sheets(store) => store.list_all().await,
            Self::Local(store) => store.list_all().await,
        }
    }

    async fn append(&self, record: &StudyRecord) -> Result<(), StoreError> {
        match self {
            Self::Sheets(store) => store.append(record).await,
            Self::Local(store) => store.append(record).await,
        }
    }

    async fn update_row(&self, index: usize, record: &StudyRecord) -> Result<(), StoreError> {
        match self {
            Self::Sheets(store) => store.update_row(index, record).await,
            Self::Local(store) => store.update_row(index, record).await,
        }
    }
}
