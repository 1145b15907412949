//! # kw-core
//!
//! Core types shared across all Kewen crates:
//! - Entity structs for study records, typo corrections, and dictionary rows
//! - Enums for the completion model and translation direction
//! - The static voice catalog used for speech synthesis
//! - The export clock (Hong Kong local time)
//! - Cross-cutting error types

pub mod clock;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod notice;
pub mod voice;
