use std::sync::LazyLock;

use moka::sync::Cache;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::convert;

const NORMALIZE_CACHE_CAPACITY: u64 = 16;

static NORMALIZE_CACHE: LazyLock<Cache<String, ScriptPair>> =
    LazyLock::new(|| Cache::new(NORMALIZE_CACHE_CAPACITY));

/// The same text in both Chinese script variants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptPair {
    pub traditional: String,
    pub simplified: String,
}

impl ScriptPair {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.traditional.is_empty() && self.simplified.is_empty()
    }
}

/// Clean `text` and produce its traditional and simplified forms.
///
/// The text is first NFKC-normalized, so full-width ASCII, compatibility
/// ideographs, small-form punctuation and circled digits fold to their plain
/// forms. Each line then has its whitespace runs collapsed to one space and
/// is trimmed. A line holding only whitespace does not turn into a new
/// paragraph break: the number of `\n\n` breaks matches the input. Finally
/// ASCII punctuation maps to full-width Chinese punctuation (`.` becomes
/// `。`). The traditional form uses corner-bracket quotes (`「」『』`) and the
/// simplified form uses curly quotes (`“”‘’`).
///
/// Normalizing either output again returns it unchanged.
#[must_use]
pub fn normalize(text: &str) -> ScriptPair {
    if text.is_empty() {
        return ScriptPair::default();
    }
    let prepared = prepare(text);
    ScriptPair {
        traditional: convert::to_traditional(&prepared)
            .chars()
            .map(traditional_quote)
            .collect(),
        simplified: convert::to_simplified(&prepared)
            .chars()
            .map(simplified_quote)
            .collect(),
    }
}

/// [`normalize`] behind a small in-process cache.
///
/// Highlighting normalizes every word of a keyword list on each render, so
/// repeated inputs are common.
#[must_use]
pub fn normalize_cached(text: &str) -> ScriptPair {
    if text.is_empty() {
        return ScriptPair::default();
    }
    NORMALIZE_CACHE.get_with(text.to_string(), || normalize(text))
}

/// Non-empty paragraphs of `text`, split on blank lines.
pub fn paragraphs(text: &str) -> impl Iterator<Item = &str> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
}

fn prepare(text: &str) -> String {
    let text = text.nfkc().collect::<String>().replace("\r\n", "\n");
    let mut out = String::with_capacity(text.len());
    // Newline runs since the last content line, split at whitespace-only lines.
    let mut runs = Vec::new();
    let mut run = 0_usize;

    for (index, line) in text.split('\n').enumerate() {
        if index > 0 {
            run += 1;
        }
        let collapsed = line.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.is_empty() {
            if !line.is_empty() {
                runs.push(run);
                run = 0;
            }
            continue;
        }
        runs.push(run);
        push_gap(&mut out, &runs);
        runs.clear();
        run = 0;
        out.push_str(&collapsed);
    }
    runs.push(run);
    push_gap(&mut out, &runs);

    out.chars().map(chinese_punctuation).collect()
}

/// Emit the newlines between two lines. A gap that held whitespace-only lines
/// keeps its paragraph-break count rather than its newline count.
fn push_gap(out: &mut String, runs: &[usize]) {
    let newlines: usize = runs.iter().sum();
    let len = if runs.len() > 1 {
        let breaks: usize = runs.iter().map(|run| run / 2).sum();
        if breaks == 0 { newlines.min(1) } else { breaks * 2 }
    } else {
        newlines
    };
    out.extend(std::iter::repeat_n('\n', len));
}

const fn chinese_punctuation(c: char) -> char {
    match c {
        '!' => '！',
        '"' => '＂',
        '#' => '＃',
        '$' => '＄',
        '%' => '％',
        '&' => '＆',
        '\'' => '＇',
        '(' => '（',
        ')' => '）',
        '*' => '＊',
        '+' => '＋',
        ',' => '，',
        '-' => '－',
        '.' => '。',
        '/' => '／',
        ':' => '：',
        ';' => '；',
        '<' => '＜',
        '=' => '＝',
        '>' => '＞',
        '?' => '？',
        '@' => '＠',
        '[' => '［',
        '\\' => '＼',
        ']' => '］',
        '^' => '＾',
        '_' => '＿',
        '`' => '｀',
        '{' => '｛',
        '|' => '｜',
        '}' => '｝',
        '~' => '～',
        '《' => '〈',
        '》' => '〉',
        _ => c,
    }
}

const fn traditional_quote(c: char) -> char {
    match c {
        '“' => '「',
        '”' => '」',
        '‘' => '『',
        '’' => '』',
        _ => c,
    }
}

const fn simplified_quote(c: char) -> char {
    match c {
        '「' => '“',
        '」' => '”',
        '『' => '‘',
        '』' => '’',
        _ => c,
    }
}
