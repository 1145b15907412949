//! # kw-store
//!
//! Persistence for exported study records.
//!
//! - [`RecordStore`]: list-all, append, and update-by-row over [`StudyRecord`]s
//! - [`SheetsStore`]: Google Sheets backend (service-account auth)
//! - [`LocalStore`]: JSONL file backend for offline use and tests
//! - [`RecordService`]: TTL-cached listing, key lookup, and the export flow
//! - [`review`]: cascading filters and the review view of a record
//!
//! Writes are read-then-write with no concurrency control; the last writer
//! wins.
//!
//! [`StudyRecord`]: kw_core::entities::StudyRecord

mod backend;
mod error;
mod export;
mod key;
mod local;
pub mod review;
mod service;
pub mod sheets;
mod store;

pub use backend::Backend;
pub use error::StoreError;
pub use export::{ExportMode, ExportOutcome, ExportRequest};
pub use key::RecordKey;
pub use local::LocalStore;
pub use service::RecordService;
pub use sheets::SheetsStore;
pub use store::RecordStore;
