use kw_core::voice::Voice;

/// SSML document speaking `text` with `voice`.
///
/// The document language is the voice's locale prefix (`yue-CN`, `zh-CN`).
#[must_use]
pub fn build_ssml(text: &str, voice: Voice) -> String {
    format!(
        "<speak version=\"1.0\" xmlns=\"http://www.w3.org/2001/10/synthesis\" xml:lang=\"{lang}\">\
<voice name=\"{name}\">{body}</voice></speak>",
        lang = locale(voice.id()),
        name = voice.id(),
        body = escape_xml(text),
    )
}

fn locale(voice_id: &str) -> &str {
    let mut dashes = voice_id.match_indices('-').map(|(i, _)| i);
    match (dashes.next(), dashes.next()) {
        (Some(_), Some(end)) => &voice_id[..end],
        _ => voice_id,
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use kw_core::voice::{CantoneseVoice, MandarinVoice};
    use pretty_assertions::assert_eq;

    #[test]
    fn document_names_voice_and_locale() {
        let ssml = build_ssml("你好", Voice::Cantonese(CantoneseVoice::XiaoMin));
        assert_eq!(
            ssml,
            "<speak version=\"1.0\" xmlns=\"http://www.w3.org/2001/10/synthesis\" xml:lang=\"yue-CN\">\
<voice name=\"yue-CN-XiaoMinNeural\">你好</voice></speak>"
        );
    }

    #[test]
    fn text_is_escaped() {
        let ssml = build_ssml("A & B <c>", Voice::Mandarin(MandarinVoice::Yunxi));
        assert!(ssml.contains(">A &amp; B &lt;c&gt;</voice>"));
        assert!(ssml.contains("xml:lang=\"zh-CN\""));
    }

    #[test]
    fn locale_of_short_id_is_the_id() {
        assert_eq!(locale("zh"), "zh");
    }
}
