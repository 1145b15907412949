//! # kw-ai
//!
//! Completion provider clients for Kewen:
//! - Gemini (`generateContent` REST API)
//! - DeepSeek (OpenAI-compatible chat completions)
//!
//! [`CompletionClient`] routes a prompt to whichever provider the session has
//! selected. The [`tasks`] module builds the study prompts and parses the
//! free-text replies into typed results.

mod client;
pub mod deepseek;
mod error;
pub mod gemini;
mod http;
pub mod prompts;
pub mod tasks;

pub use client::{Completion, CompletionClient};
pub use error::AiError;
