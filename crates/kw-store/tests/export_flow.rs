//! Export against the local JSONL backend: create, duplicate detection,
//! overwrite, and rename.

use std::time::Duration;

use chrono::{TimeZone, Utc};
use kw_core::enums::AiModel;
use kw_store::{
    ExportMode, ExportOutcome, ExportRequest, LocalStore, RecordKey, RecordService, RecordStore,
};
use pretty_assertions::assert_eq;

fn service(dir: &tempfile::TempDir) -> RecordService<LocalStore> {
    RecordService::new(
        LocalStore::new(dir.path().join("records.jsonl")),
        Duration::from_secs(30),
    )
}

fn request(text: &str) -> ExportRequest {
    ExportRequest {
        book_title: "X".into(),
        article_title: "Y".into(),
        page_number: "3".into(),
        text: text.into(),
        keywords: "春眠".into(),
        dictionary: "| 春眠 | 春眠 | chūn mián | 春天睡覺 | 春眠不覺曉 | 春眠不觉晓 |".into(),
        model: AiModel::Gemini,
    }
}

fn key() -> RecordKey {
    RecordKey::new("X", "Y", "Gemini")
}

#[tokio::test]
async fn new_key_creates_exactly_one_record() {
    let dir = tempfile::tempdir().unwrap();
    let service = service(&dir);

    let outcome = service
        .export(&request("春眠不覺曉"), ExportMode::CreateOnly, Utc::now())
        .await
        .unwrap();
    assert_eq!(outcome, ExportOutcome::Created { total: 1 });

    let records = service.records().await.unwrap();
    assert_eq!(records.iter().filter(|r| key().matches(r)).count(), 1);
    assert!(service.exists(&key()).await.unwrap());
}

#[tokio::test]
async fn overwrite_replaces_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let service = service(&dir);
    let first = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let second = Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap();

    service
        .export(&request("春眠不覺曉"), ExportMode::CreateOnly, first)
        .await
        .unwrap();

    let duplicate = service
        .export(&request("處處聞啼鳥"), ExportMode::CreateOnly, second)
        .await
        .unwrap();
    match duplicate {
        ExportOutcome::Duplicate { existing } => assert_eq!(existing.original_text, "春眠不覺曉"),
        other => panic!("expected duplicate, got {other:?}"),
    }

    let outcome = service
        .export(&request("處處聞啼鳥"), ExportMode::Overwrite, second)
        .await
        .unwrap();
    assert_eq!(outcome, ExportOutcome::Updated { total: 1 });

    let stored = service.store().list_all().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].original_text, "處處聞啼鳥");
    assert_eq!(stored[0].export_date, "2025-02-01 08:00:00");
}

#[tokio::test]
async fn key_ignores_case_spacing_and_script() {
    let dir = tempfile::tempdir().unwrap();
    let service = service(&dir);
    let mut first = request("文");
    first.book_title = "小学语文".into();
    service
        .export(&first, ExportMode::CreateOnly, Utc::now())
        .await
        .unwrap();

    let mut again = request("文");
    again.book_title = "  小學語文 ".into();
    let outcome = service
        .export(&again, ExportMode::CreateOnly, Utc::now())
        .await
        .unwrap();
    assert!(matches!(outcome, ExportOutcome::Duplicate { .. }));
}

#[tokio::test]
async fn renamed_export_is_a_new_record() {
    let dir = tempfile::tempdir().unwrap();
    let service = service(&dir);
    service
        .export(&request("文"), ExportMode::CreateOnly, Utc::now())
        .await
        .unwrap();

    let mut renamed = request("文");
    renamed.article_title = "Y2".into();
    let outcome = service
        .export(&renamed, ExportMode::CreateOnly, Utc::now())
        .await
        .unwrap();
    assert_eq!(outcome, ExportOutcome::Created { total: 2 });

    let mut other_model = request("文");
    other_model.model = AiModel::DeepSeek;
    let outcome = service
        .export(&other_model, ExportMode::CreateOnly, Utc::now())
        .await
        .unwrap();
    assert_eq!(outcome, ExportOutcome::Created { total: 3 });
}

#[tokio::test]
async fn incomplete_export_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let service = service(&dir);
    let mut incomplete = request("文");
    incomplete.dictionary.clear();
    let err = service
        .export(&incomplete, ExportMode::CreateOnly, Utc::now())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "請先生成字典。");
    assert!(service.records().await.unwrap().is_empty());
}
