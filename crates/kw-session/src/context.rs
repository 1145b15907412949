use std::path::Path;

use chrono::{DateTime, Utc};
use kw_core::entities::{StudyRecord, TypoCorrection};
use kw_core::enums::{AiModel, TranslationDirection};
use kw_core::voice::VoiceSelection;
use kw_speech::DualSynthesis;
use kw_store::ExportRequest;
use kw_store::review::RecordFilter;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Everything one client has entered or generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    #[serde(default)]
    pub model: AiModel,
    #[serde(default)]
    pub voices: VoiceSelection,
    #[serde(default)]
    pub typo: TypoState,
    #[serde(default)]
    pub study: StudyState,
    #[serde(default)]
    pub export: ExportDraft,
    #[serde(default)]
    pub speech: SpeechState,
    #[serde(default)]
    pub review: RecordFilter,
    #[serde(default)]
    pub tools: ToolOutputs,
}

impl SessionContext {
    #[must_use]
    pub fn new(model: AiModel, voices: VoiceSelection, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: now,
            model,
            voices,
            typo: TypoState::default(),
            study: StudyState::default(),
            export: ExportDraft::default(),
            speech: SpeechState::default(),
            review: RecordFilter::default(),
            tools: ToolOutputs::default(),
        }
    }

    /// Load a stored record back into the study and speech inputs.
    pub fn copy_from_record(&mut self, record: &StudyRecord) {
        self.study.set_text(&record.original_text);
        self.study.set_words(&record.keywords);
        self.speech.input.clone_from(&record.original_text);
    }

    /// The export request for the current study state.
    ///
    /// The model recorded is the one that produced the dictionary, falling
    /// back to the selected model.
    #[must_use]
    pub fn export_request(&self) -> ExportRequest {
        ExportRequest {
            book_title: self.export.book_title.clone(),
            article_title: self.export.article_title.clone(),
            page_number: self.export.page_number.clone(),
            text: self.study.text.clone(),
            keywords: self.study.words.clone(),
            dictionary: self.study.dictionary.clone(),
            model: self.study.dictionary_model.unwrap_or(self.model),
        }
    }

    /// Audio files this session has produced and not yet cleared.
    pub fn audio_paths(&self) -> impl Iterator<Item = &Path> {
        self.speech.last.iter().flat_map(|synthesis| synthesis.paths())
    }
}

/// Typo check input and results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypoState {
    #[serde(default)]
    pub input: String,
    #[serde(default)]
    pub response: String,
    #[serde(default)]
    pub corrections: Vec<TypoCorrection>,
    #[serde(default)]
    pub checked_with: Option<AiModel>,
}

impl TypoState {
    /// Replace the input; a changed input discards earlier results.
    pub fn set_input(&mut self, text: &str) -> bool {
        if self.input == text {
            return false;
        }
        text.clone_into(&mut self.input);
        self.response.clear();
        self.corrections.clear();
        self.checked_with = None;
        true
    }

    pub fn record_check(&mut self, model: AiModel, response: String, corrections: Vec<TypoCorrection>) {
        self.checked_with = Some(model);
        self.response = response;
        self.corrections = corrections;
    }

    #[must_use]
    pub const fn is_checked(&self) -> bool {
        self.checked_with.is_some()
    }

    /// Edit the replacement of row `index`; blank removes the flagged span.
    pub fn set_replacement(&mut self, index: usize, replacement: &str) -> Option<&TypoCorrection> {
        let correction = self.corrections.get_mut(index)?;
        replacement.trim().clone_into(&mut correction.replacement);
        Some(correction)
    }
}

/// Study text, keywords, and the dictionary generated for them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyState {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub words: String,
    #[serde(default)]
    pub suggested_keywords: Vec<String>,
    #[serde(default)]
    pub dictionary: String,
    #[serde(default)]
    pub dictionary_model: Option<AiModel>,
}

impl StudyState {
    /// Replace the study text; a change clears the dictionary.
    pub fn set_text(&mut self, text: &str) -> bool {
        if self.text == text {
            return false;
        }
        text.clone_into(&mut self.text);
        self.suggested_keywords.clear();
        self.clear_dictionary();
        true
    }

    /// Replace the keyword list; a change clears the dictionary.
    pub fn set_words(&mut self, words: &str) -> bool {
        if self.words == words {
            return false;
        }
        words.clone_into(&mut self.words);
        self.clear_dictionary();
        true
    }

    pub fn set_dictionary(&mut self, model: AiModel, response: String) {
        self.dictionary = response;
        self.dictionary_model = Some(model);
    }

    fn clear_dictionary(&mut self) {
        self.dictionary.clear();
        self.dictionary_model = None;
    }
}

/// Titles entered for the next export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDraft {
    #[serde(default)]
    pub book_title: String,
    #[serde(default)]
    pub article_title: String,
    #[serde(default)]
    pub page_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechState {
    #[serde(default)]
    pub input: String,
    #[serde(default)]
    pub last: Option<DualSynthesis>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolOutputs {
    #[serde(default)]
    pub conversion: String,
    #[serde(default)]
    pub translation: String,
    #[serde(default)]
    pub translation_direction: TranslationDirection,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn context() -> SessionContext {
        SessionContext::new(AiModel::Gemini, VoiceSelection::default(), Utc::now())
    }

    #[test]
    fn changing_text_clears_dictionary() {
        let mut ctx = context();
        ctx.study.set_text("春眠不覺曉");
        ctx.study.set_words("春眠");
        ctx.study.set_dictionary(AiModel::DeepSeek, "| 春眠 |".into());

        assert!(!ctx.study.set_text("春眠不覺曉"));
        assert_eq!(ctx.study.dictionary, "| 春眠 |");

        assert!(ctx.study.set_text("處處聞啼鳥"));
        assert!(ctx.study.dictionary.is_empty());
        assert!(ctx.study.dictionary_model.is_none());
    }

    #[test]
    fn changing_words_clears_dictionary() {
        let mut ctx = context();
        ctx.study.set_words("春眠");
        ctx.study.set_dictionary(AiModel::Gemini, "| 春眠 |".into());
        ctx.study.set_words("春眠,啼鳥");
        assert!(ctx.study.dictionary.is_empty());
    }

    #[test]
    fn export_uses_dictionary_model() {
        let mut ctx = context();
        ctx.export.book_title = "X".into();
        ctx.study.set_text("文");
        ctx.study.set_words("文");
        assert_eq!(ctx.export_request().model, AiModel::Gemini);

        ctx.study.set_dictionary(AiModel::DeepSeek, "| 文 |".into());
        let request = ctx.export_request();
        assert_eq!(request.model, AiModel::DeepSeek);
        assert_eq!(request.book_title, "X");
        assert_eq!(request.dictionary, "| 文 |");
    }

    #[test]
    fn copy_from_record_fills_study_and_speech() {
        let mut ctx = context();
        let record = StudyRecord {
            original_text: "春眠不覺曉".into(),
            keywords: "春眠".into(),
            ..Default::default()
        };
        ctx.copy_from_record(&record);
        assert_eq!(ctx.study.text, "春眠不覺曉");
        assert_eq!(ctx.study.words, "春眠");
        assert_eq!(ctx.speech.input, "春眠不覺曉");
    }

    #[test]
    fn typo_replacement_edits_and_new_input_resets() {
        let mut ctx = context();
        ctx.typo.set_input("他己經走了");
        ctx.typo.record_check(
            AiModel::Gemini,
            "| 己經 | 已經 | 字形 |".into(),
            vec![TypoCorrection::new("己經", "已經", "字形")],
        );
        assert!(ctx.typo.is_checked());

        let edited = ctx.typo.set_replacement(0, " 已 ").unwrap();
        assert_eq!(edited.replacement, "已");
        assert!(ctx.typo.set_replacement(3, "x").is_none());

        assert!(ctx.typo.set_input("新的文字"));
        assert!(!ctx.typo.is_checked());
        assert!(ctx.typo.corrections.is_empty());
    }

    #[test]
    fn snapshot_tolerates_missing_sections() {
        let json = format!(
            r#"{{"id":"{}","started_at":"2025-03-01T00:00:00Z"}}"#,
            Uuid::new_v4()
        );
        let ctx: SessionContext = serde_json::from_str(&json).unwrap();
        assert_eq!(ctx.model, AiModel::Gemini);
        assert!(ctx.study.text.is_empty());
    }
}
