//! Entity structs for Kewen domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so they can
//! be stored in session snapshots and validated against their schema.

mod correction;
mod dictionary;
mod record;

pub use correction::TypoCorrection;
pub use dictionary::DictionaryEntry;
pub use record::{RECORD_COLUMNS, StudyRecord};
