//! Markdown table parsing for completion output.
//!
//! Completion models are asked for pipe tables but rarely follow the format
//! exactly. The parser takes any line containing `|`, drops one leading and
//! one trailing pipe, and splits the rest into trimmed cells. Separator rows
//! (`|---|:--:|`), header rows, and blank rows are skipped. Rows with fewer
//! cells than a table needs are dropped and extra cells are ignored, so a
//! response with no usable rows parses to an empty list.

use kw_core::entities::{DictionaryEntry, TypoCorrection};

/// Reply a model gives when the text has no typos.
pub const NO_TYPOS_SENTINEL: &str = "此課文沒有錯字";
const NO_TYPOS_SENTINEL_SIMPLIFIED: &str = "此课文没有错字";

/// Columns in a typo table: flagged, suggestion, explanation.
pub const TYPO_COLUMNS: usize = 3;
/// Columns in a dictionary table: traditional, simplified, pinyin,
/// definition, example (traditional), example (simplified).
pub const DICTIONARY_COLUMNS: usize = 6;

const TYPO_HEADERS: [&str; 4] = ["錯字", "错字", "正確", "正确"];
const DICTIONARY_HEADERS: [&str; 4] = ["繁體", "繁体", "簡體", "简体"];

/// All data rows of every pipe table in `text`.
#[must_use]
pub fn rows(text: &str) -> Vec<Vec<String>> {
    text.lines()
        .filter_map(parse_row)
        .filter(|cells| !is_separator(cells))
        .collect()
}

/// Typo corrections from a three-column table.
///
/// Returns an empty list for the clean-text sentinel or when no row has a
/// flagged span and a suggestion.
#[must_use]
pub fn parse_typo_table(text: &str) -> Vec<TypoCorrection> {
    rows(text)
        .into_iter()
        .filter(|cells| cells.len() >= TYPO_COLUMNS)
        .filter(|cells| !is_header(cells, &TYPO_HEADERS))
        .filter(|cells| !is_sentinel(&cells[0]))
        .filter(|cells| !cells[0].is_empty() && !cells[1].is_empty())
        .map(|cells| TypoCorrection::new(&cells[0], &cells[1], &cells[2]))
        .collect()
}

/// Dictionary entries from a six-column table.
#[must_use]
pub fn parse_dictionary_table(text: &str) -> Vec<DictionaryEntry> {
    rows(text)
        .into_iter()
        .filter(|cells| cells.len() >= DICTIONARY_COLUMNS)
        .filter(|cells| !is_header(cells, &DICTIONARY_HEADERS))
        .filter(|cells| !cells[0].is_empty())
        .map(|mut cells| {
            cells.truncate(DICTIONARY_COLUMNS);
            let mut cells = cells.into_iter();
            let mut next = || cells.next().unwrap_or_default();
            DictionaryEntry {
                traditional: next(),
                simplified: next(),
                pinyin: next(),
                definition: next(),
                example_traditional: next(),
                example_simplified: next(),
            }
        })
        .collect()
}

/// Whether a response says the text has no typos.
#[must_use]
pub fn is_clean_response(text: &str) -> bool {
    is_sentinel(text)
}

fn parse_row(line: &str) -> Option<Vec<String>> {
    let line = line.trim();
    if !line.contains('|') {
        return None;
    }
    let inner = line.strip_prefix('|').unwrap_or(line);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    let cells: Vec<String> = inner.split('|').map(clean_cell).collect();
    if cells.iter().all(String::is_empty) {
        return None;
    }
    Some(cells)
}

fn clean_cell(cell: &str) -> String {
    cell.trim()
        .trim_matches(|c| c == '*' || c == '`')
        .trim()
        .to_string()
}

fn is_separator(cells: &[String]) -> bool {
    cells.iter().any(|cell| cell.contains('-'))
        && cells
            .iter()
            .all(|cell| cell.chars().all(|c| matches!(c, '-' | ':' | ' ')))
}

fn is_header(cells: &[String], headers: &[&str]) -> bool {
    cells
        .iter()
        .take(2)
        .any(|cell| headers.contains(&cell.as_str()))
}

fn is_sentinel(text: &str) -> bool {
    text.contains(NO_TYPOS_SENTINEL) || text.contains(NO_TYPOS_SENTINEL_SIMPLIFIED)
}
