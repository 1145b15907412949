//! Prompt builders for the study tasks.
//!
//! Every prompt that expects a table names its column headings, which the
//! parsers in `kw_text::table` use to skip header rows.

use kw_core::enums::TranslationDirection;
use kw_text::table::NO_TYPOS_SENTINEL;

#[must_use]
pub fn typo_check(text: &str) -> String {
    format!(
        "I just copied the following Chinese text from an image using OCR. I need to study this text \
for my homework and want to make sure the OCR has not picked up the wrong words. Please carefully \
review the passage for any incorrect, uncommon, or misused characters:

\"{text}\"

If there are any issues, list them in a markdown table with the following columns:
Column 1 - heading = \"錯字\", content = problematic character or phrase
Column 2 - heading = \"正確\", content = correct character or phrase
Column 3 - heading = \"解釋\", content = using Chinese, explain why they are incorrect or unusual

Please respond only in Traditional Chinese. If the text is clean, simply respond: \"{NO_TYPOS_SENTINEL}\"
"
    )
}

#[must_use]
pub fn keywords(text: &str) -> String {
    format!(
        "You are a Chinese native speaker, being a language tutor for a 12 year old student.
Please identify the key complex vocabulary in the passage \"{text}\", and provide your selection of \
words in a text string in the order that they appear in the passage, no explanation needed.
Respond only in Traditional Chinese, separate the words with commas.
"
    )
}

#[must_use]
pub fn dictionary(words: &str) -> String {
    format!(
        "You are a Chinese native speaker, being a language tutor for kids 8-10 years old.

Please explain the words in \"{words}\" in Traditional Chinese using a Markdown table with the following columns:

Column 1: Heading = \"繁體\", content = the original word in traditional Chinese
Column 2: Heading = \"簡體\", content = column 1 converted into simplified Chinese
Column 3: Heading = \"拼音\", content = Mandarin pinyin
Column 4: Heading = \"解釋\", content = a beginner-friendly, simple definition
Column 5 & 6: Heading = \"例句\", content = an example sentence, in traditional (column 5) and simplified (column 6) Chinese

Respond only in Traditional Chinese. Format your response as a Markdown table.
"
    )
}

#[must_use]
pub fn conversion_table(text: &str) -> String {
    format!(
        "Please convert the following Chinese text and provide the results in a table with 6 columns:
Column 1: \"繁體\" (original sentence or chunk in Traditional Chinese)
Column 2: \"簡體\" (column 1 converted to Simplified Chinese)
Column 3: \"拼音\" (Mandarin pinyin with tone marks, e.g., mā, má, mǎ, mà)
Column 4: \"解釋\" (beginner-friendly definition)
Column 5 & 6: \"例句\" (example in Traditional and Simplified Chinese)
Text to convert: \"{text}\"
Do not split the text arbitrarily; keep the original sentence structure.
"
    )
}

#[must_use]
pub fn translation(direction: TranslationDirection, text: &str) -> String {
    match direction {
        TranslationDirection::ChineseToEnglish => format!(
            "Please translate the following Chinese text to English: \"{text}\"
Provide a clear and accurate translation.
If the text contains idioms or cultural references, provide both a literal translation and an \
explanation of the meaning in English.
The answer should be a table with 3 columns:
\"中文\" (original), \"英文翻譯\" (translation), \"解釋\" (explanation if needed).
"
        ),
        TranslationDirection::EnglishToChinese => format!(
            "Please translate the following English text to Chinese (Traditional and Simplified): \"{text}\"
Provide a clear and accurate translation.
Return two tables.
Table 1: \"Table 1: Full translation\" with columns: \"英文\", \"繁體\", \"簡體\", \"拼音\"
Table 2: \"Table 2: Breakdown of Translation\" with columns: \"英文\", \"繁體\", \"簡體\", \"拼音\", \"解釋\", \"例句\"
Use tone-mark pinyin (mā, má, mǎ, mà). Keep the original passage format.
"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typo_prompt_embeds_text_and_sentinel() {
        let prompt = typo_check("春眠不覺曉");
        assert!(prompt.contains("\"春眠不覺曉\""));
        assert!(prompt.contains("此課文沒有錯字"));
        assert!(prompt.contains("\"錯字\""));
    }

    #[test]
    fn dictionary_prompt_names_six_columns() {
        let prompt = dictionary("學習,漢語");
        for heading in ["繁體", "簡體", "拼音", "解釋", "例句"] {
            assert!(prompt.contains(heading), "missing {heading}");
        }
    }

    #[test]
    fn translation_prompt_follows_direction() {
        assert!(translation(TranslationDirection::ChineseToEnglish, "你好").contains("to English"));
        assert!(translation(TranslationDirection::EnglishToChinese, "hello").contains("Table 2"));
    }
}
