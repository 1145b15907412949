//! Serde roundtrip and JsonSchema validation tests for entity types.

use kw_core::entities::*;
use kw_core::enums::*;
use kw_core::voice::*;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    study_record_roundtrip,
    StudyRecord,
    StudyRecord {
        export_date: "2025-03-02 04:15:00".into(),
        book_title: "小學語文".into(),
        article_title: "春曉".into(),
        page_number: "12".into(),
        original_text: "春眠不覺曉，處處聞啼鳥。".into(),
        keywords: "春眠,啼鳥".into(),
        dictionary_data: "| 繁體 | 簡體 | 拼音 |\n|---|---|---|\n| 啼鳥 | 啼鸟 | tí niǎo |".into(),
        model_used: "Gemini".into(),
    }
);

roundtrip_and_validate!(
    typo_correction_roundtrip,
    TypoCorrection,
    TypoCorrection::new("己經", "已經", "「己」與「已」字形相近")
);

roundtrip_and_validate!(
    dictionary_entry_roundtrip,
    DictionaryEntry,
    DictionaryEntry {
        traditional: "學習".into(),
        simplified: "学习".into(),
        pinyin: "xué xí".into(),
        definition: "獲得知識".into(),
        example_traditional: "我喜歡學習。".into(),
        example_simplified: "我喜欢学习。".into(),
    }
);

roundtrip_and_validate!(
    voice_selection_roundtrip,
    VoiceSelection,
    VoiceSelection {
        cantonese: CantoneseVoice::YunSong,
        mandarin: MandarinVoice::Yunyang,
    }
);

roundtrip_and_validate!(ai_model_roundtrip, AiModel, AiModel::DeepSeek);

roundtrip_and_validate!(
    translation_direction_roundtrip,
    TranslationDirection,
    TranslationDirection::EnglishToChinese
);

#[test]
fn study_record_uses_sheet_header_names() {
    let json = serde_json::to_value(StudyRecord::default()).unwrap();
    let keys: Vec<&str> = json
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    for column in RECORD_COLUMNS {
        assert!(keys.contains(&column), "missing column {column}");
    }
}

#[test]
fn study_record_tolerates_missing_fields() {
    let record: StudyRecord =
        serde_json::from_str(r#"{"book_title":"書","model_used":"Gemini"}"#).unwrap();
    assert_eq!(record.book_title, "書");
    assert!(record.keywords.is_empty());
}
