//! Study tasks: one prompt, one provider call, one parsed result.
//!
//! A reply that parses to zero rows is a valid "no findings" result, never an
//! error.

use kw_core::entities::{DictionaryEntry, TypoCorrection};
use kw_core::enums::{AiModel, TranslationDirection};
use kw_text::table::{parse_dictionary_table, parse_typo_table};
use kw_text::{normalize, split_words};
use serde::{Deserialize, Serialize};

use crate::client::Completion;
use crate::error::AiError;
use crate::prompts;

/// Result of a typo check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypoCheck {
    pub model: AiModel,
    /// Raw reply, kept for display.
    pub response: String,
    pub corrections: Vec<TypoCorrection>,
}

impl TypoCheck {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.corrections.is_empty()
    }
}

/// A dictionary-style table reply and its parsed rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryTable {
    pub model: AiModel,
    pub response: String,
    pub entries: Vec<DictionaryEntry>,
}

/// Ask `model` to flag typos in `traditional`.
///
/// # Errors
///
/// Returns [`AiError`] when the provider call fails.
pub async fn check_typos<C: Completion>(
    client: &C,
    model: AiModel,
    traditional: &str,
) -> Result<TypoCheck, AiError> {
    let response = client.complete(model, &prompts::typo_check(traditional)).await?;
    let corrections = parse_typo_table(&response);
    tracing::debug!(%model, corrections = corrections.len(), "typo check parsed");
    Ok(TypoCheck {
        model,
        response,
        corrections,
    })
}

/// Ask `model` for the key vocabulary of `text`, in order of appearance.
///
/// Words come back in traditional form with duplicates removed.
///
/// # Errors
///
/// Returns [`AiError`] when the provider call fails.
pub async fn suggest_keywords<C: Completion>(
    client: &C,
    model: AiModel,
    text: &str,
) -> Result<Vec<String>, AiError> {
    let response = client.complete(model, &prompts::keywords(text)).await?;
    Ok(parse_keywords(&response))
}

/// Ask `model` to explain each word in `words` as a six-column table.
///
/// # Errors
///
/// Returns [`AiError`] when the provider call fails.
pub async fn lookup_dictionary<C: Completion>(
    client: &C,
    model: AiModel,
    words: &str,
) -> Result<DictionaryTable, AiError> {
    let response = client.complete(model, &prompts::dictionary(words)).await?;
    Ok(DictionaryTable {
        model,
        entries: parse_dictionary_table(&response),
        response,
    })
}

/// Ask `model` for a sentence-level conversion table of `text`.
///
/// # Errors
///
/// Returns [`AiError`] when the provider call fails.
pub async fn conversion_table<C: Completion>(
    client: &C,
    model: AiModel,
    text: &str,
) -> Result<DictionaryTable, AiError> {
    let response = client
        .complete(model, &prompts::conversion_table(text))
        .await?;
    Ok(DictionaryTable {
        model,
        entries: parse_dictionary_table(&response),
        response,
    })
}

/// Translate `text` in `direction`; the reply is returned as-is.
///
/// # Errors
///
/// Returns [`AiError`] when the provider call fails.
pub async fn translate<C: Completion>(
    client: &C,
    model: AiModel,
    direction: TranslationDirection,
    text: &str,
) -> Result<String, AiError> {
    client
        .complete(model, &prompts::translation(direction, text))
        .await
}

fn parse_keywords(response: &str) -> Vec<String> {
    let flattened: String = response
        .chars()
        .map(|c| match c {
            '\n' | '、' | '；' | ';' => ',',
            _ => c,
        })
        .collect();
    let mut words: Vec<String> = Vec::new();
    for word in split_words(&flattened) {
        let word = normalize(word.trim_matches(|c: char| c == '"' || c == '「' || c == '」'))
            .traditional;
        if !word.is_empty() && !words.contains(&word) {
            words.push(word);
        }
    }
    words
}
