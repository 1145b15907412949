use std::io::Read;

use anyhow::{Context, bail};

/// Text from a command argument, where `-` reads all of stdin.
pub fn read_text(arg: &str) -> anyhow::Result<String> {
    if arg != "-" {
        return Ok(arg.to_string());
    }
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("failed to read text from stdin")?;
    Ok(text)
}

/// The first non-blank candidate, or an error naming what is missing.
pub fn first_text<'a>(candidates: impl IntoIterator<Item = &'a str>, missing: &str) -> anyhow::Result<String> {
    candidates
        .into_iter()
        .find(|text| !text.trim().is_empty())
        .map(String::from)
        .with_context(|| missing.to_string())
}

/// Zero-based index for a 1-based row number as printed to the user.
pub fn row_index(row: usize, len: usize, what: &str) -> anyhow::Result<usize> {
    if len == 0 {
        bail!("no {what} rows");
    }
    if row == 0 || row > len {
        bail!("{what} row {row} out of range (1-{len})");
    }
    Ok(row - 1)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn plain_argument_is_returned_as_is() {
        assert_eq!(read_text("春眠不覺曉").unwrap(), "春眠不覺曉");
    }

    #[test]
    fn first_text_skips_blank_candidates() {
        assert_eq!(first_text(["", "  ", "文"], "none").unwrap(), "文");
        let err = first_text(["", " "], "no text to speak").unwrap_err();
        assert_eq!(err.to_string(), "no text to speak");
    }

    #[test]
    fn rows_are_one_based() {
        assert_eq!(row_index(1, 3, "typo").unwrap(), 0);
        assert_eq!(row_index(3, 3, "typo").unwrap(), 2);
        assert!(row_index(0, 3, "typo").is_err());
        assert_eq!(
            row_index(4, 3, "typo").unwrap_err().to_string(),
            "typo row 4 out of range (1-3)"
        );
        assert_eq!(row_index(1, 0, "review").unwrap_err().to_string(), "no review rows");
    }
}
