use std::sync::LazyLock;

use moka::sync::Cache;

use crate::normalize::normalize_cached;

static CANON_CACHE: LazyLock<Cache<String, String>> = LazyLock::new(|| Cache::new(256));

/// Comparison key for titles: traditional form, whitespace collapsed and
/// trimmed, lowercased.
///
/// Two titles refer to the same book or article when their keys are equal.
#[must_use]
pub fn canon_key(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    CANON_CACHE.get_with(text.to_string(), || {
        normalize_cached(text)
            .traditional
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("  Book A ", "book a")]
    #[case("BOOK\tA", "book a")]
    #[case("小学语文", "小學語文")]
    #[case(" 小學 語文 ", "小學 語文")]
    fn equivalent_titles_share_a_key(#[case] left: &str, #[case] right: &str) {
        assert_eq!(canon_key(left), canon_key(right));
    }

    #[test]
    fn distinct_titles_differ() {
        assert_ne!(canon_key("Book A"), canon_key("Book B"));
    }

    #[test]
    fn key_shape() {
        assert_eq!(canon_key("  Book   A "), "book a");
        assert_eq!(canon_key(""), "");
    }
}
