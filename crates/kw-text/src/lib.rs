//! # kw-text
//!
//! Text utilities for Chinese study material:
//! - [`normalize`]: whitespace cleanup, full-width punctuation, and conversion
//!   into a traditional/simplified [`ScriptPair`]
//! - [`highlight`]: wrap a comma-separated word list in both variants
//! - [`is_traditional`]: positional majority vote between the two variants
//! - [`canon_key`]: case/whitespace/variant-insensitive comparison key
//! - [`table`]: defensive markdown table parsing for completion output
//! - [`corrections`]: render typo-check results as marked-up text
//!
//! Nothing here fails on string input; empty input produces empty output.

mod canon;
mod convert;
pub mod corrections;
mod detect;
mod highlight;
mod normalize;
pub mod table;

pub use canon::canon_key;
pub use detect::is_traditional;
pub use highlight::{Marker, highlight, highlight_terms, split_words};
pub use normalize::{ScriptPair, normalize, normalize_cached, paragraphs};
