//! # kw-session
//!
//! The per-client session: one typed [`SessionContext`] holding everything a
//! learner has entered or generated, persisted by a [`SessionStore`] in a
//! directory no other client shares. Ending a session removes its snapshot
//! and every audio file it produced.

mod context;
mod error;
mod store;

pub use context::{
    ExportDraft, SessionContext, SpeechState, StudyState, ToolOutputs, TypoState,
};
pub use error::SessionError;
pub use store::{EndedSession, SessionStore, StartedSession};
