//! OpenCC script conversion.
//!
//! Converters load their dictionaries once per thread. If a dictionary fails
//! to load the text passes through unchanged and a warning is logged.

use ferrous_opencc::{OpenCC, config::BuiltinConfig};

thread_local! {
    static TO_TRADITIONAL: Option<OpenCC> = load(BuiltinConfig::S2t, "s2t");
    static TO_SIMPLIFIED: Option<OpenCC> = load(BuiltinConfig::T2s, "t2s");
}

fn load(config: BuiltinConfig, name: &str) -> Option<OpenCC> {
    match OpenCC::from_config(config) {
        Ok(converter) => Some(converter),
        Err(error) => {
            tracing::warn!(converter = name, %error, "failed to load OpenCC dictionary; passing text through");
            None
        }
    }
}

pub fn to_traditional(text: &str) -> String {
    TO_TRADITIONAL.with(|converter| {
        converter
            .as_ref()
            .map_or_else(|| text.to_string(), |cc| cc.convert(text))
    })
}

pub fn to_simplified(text: &str) -> String {
    TO_SIMPLIFIED.with(|converter| {
        converter
            .as_ref()
            .map_or_else(|| text.to_string(), |cc| cc.convert(text))
    })
}
