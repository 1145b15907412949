use crate::normalize::{ScriptPair, normalize_cached};

/// Inline style wrapper used to mark words in rendered text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    style: String,
}

impl Marker {
    /// Keyword highlight and unchanged corrections.
    pub const YELLOW: &'static str = "#ffffcc";
    /// Flagged typos.
    pub const RED: &'static str = "#ffcccc";
    /// Corrections the learner edited.
    pub const GREEN: &'static str = "#d0f0c0";

    #[must_use]
    pub fn background(color: &str) -> Self {
        Self {
            style: format!("background-color: {color};"),
        }
    }

    #[must_use]
    pub fn with_style(style: impl Into<String>) -> Self {
        Self {
            style: style.into(),
        }
    }

    #[must_use]
    pub fn style(&self) -> &str {
        &self.style
    }

    #[must_use]
    pub fn wrap(&self, text: &str) -> String {
        format!("<span style=\"{}\">{text}</span>", self.style)
    }
}

impl Default for Marker {
    fn default() -> Self {
        Self::background(Self::YELLOW)
    }
}

/// Split a keyword list on ASCII or full-width commas, trimming each word and
/// dropping empty entries.
#[must_use]
pub fn split_words(words: &str) -> Vec<String> {
    words
        .split([',', '，'])
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(String::from)
        .collect()
}

/// Mark every occurrence of each listed word in both script variants.
///
/// Each word is normalized first, so its traditional form is searched in
/// `traditional` and its simplified form in `simplified`. An empty list
/// returns both texts unchanged.
#[must_use]
pub fn highlight(traditional: &str, simplified: &str, words: &str, marker: &Marker) -> ScriptPair {
    let words = split_words(words);
    highlight_terms(traditional, simplified, &words, marker)
}

/// [`highlight`] for terms that are already split.
#[must_use]
pub fn highlight_terms<S: AsRef<str>>(
    traditional: &str,
    simplified: &str,
    terms: &[S],
    marker: &Marker,
) -> ScriptPair {
    let mut marked = ScriptPair {
        traditional: traditional.to_string(),
        simplified: simplified.to_string(),
    };
    for term in terms {
        let variants = normalize_cached(term.as_ref().trim());
        if !variants.traditional.is_empty() {
            marked.traditional = marked
                .traditional
                .replace(&variants.traditional, &marker.wrap(&variants.traditional));
        }
        if !variants.simplified.is_empty() {
            marked.simplified = marked
                .simplified
                .replace(&variants.simplified, &marker.wrap(&variants.simplified));
        }
    }
    marked
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("學習, 漢語", vec!["學習", "漢語"])]
    #[case("學習，漢語，", vec!["學習", "漢語"])]
    #[case(" , ,", vec![])]
    #[case("", vec![])]
    fn splits_on_either_comma(#[case] input: &str, #[case] expected: Vec<&str>) {
        assert_eq!(split_words(input), expected);
    }

    #[test]
    fn empty_word_list_is_identity() {
        let marked = highlight("繁體文字", "繁体文字", "", &Marker::default());
        assert_eq!(marked.traditional, "繁體文字");
        assert_eq!(marked.simplified, "繁体文字");
    }

    #[test]
    fn marks_once_in_each_variant() {
        let marker = Marker::default();
        let marked = highlight("繁體文字", "繁体文字", "文字", &marker);
        let span = marker.wrap("文字");
        assert_eq!(marked.traditional.matches(&span).count(), 1);
        assert_eq!(marked.simplified.matches(&span).count(), 1);
        assert_eq!(
            marked.traditional,
            "繁體<span style=\"background-color: #ffffcc;\">文字</span>"
        );
    }

    #[test]
    fn words_are_matched_in_their_own_script() {
        let marker = Marker::default();
        let marked = highlight("我愛學習", "我爱学习", "学习", &marker);
        assert!(marked.traditional.contains(&marker.wrap("學習")));
        assert!(marked.simplified.contains(&marker.wrap("学习")));
    }

    #[test]
    fn every_occurrence_is_marked() {
        let marker = Marker::background(Marker::RED);
        let marked = highlight_terms("好好學習", "好好学习", &["好"], &marker);
        assert_eq!(marked.traditional.matches(&marker.wrap("好")).count(), 2);
    }

    #[test]
    fn custom_style_is_used_verbatim() {
        let marker = Marker::with_style("color: red;");
        assert_eq!(marker.wrap("字"), "<span style=\"color: red;\">字</span>");
        assert_eq!(Marker::default().style(), "background-color: #ffffcc;");
    }
}
