//! # kw-speech
//!
//! Text-to-speech for Kewen through the Azure Speech REST API.
//!
//! [`SpeechClient`] turns text and a catalog [`Voice`](kw_core::voice::Voice)
//! into WAV bytes. [`synthesize_dual`] renders one clip per language for a
//! [`VoiceSelection`](kw_core::voice::VoiceSelection) and writes them into a
//! directory the caller owns (the session's audio directory).

mod client;
mod dual;
mod error;
mod ssml;

pub use client::{SpeechClient, Synthesizer};
pub use dual::{Clip, DualSynthesis, remove_audio, synthesize_dual};
pub use error::SpeechError;
pub use ssml::build_ssml;
