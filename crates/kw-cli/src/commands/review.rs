use kw_core::entities::StudyRecord;
use kw_session::SessionContext;
use kw_store::review::{FilterField, FilterOptions, RecordFilter, ReviewView};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{ReviewCommands, ReviewFilterArgs};
use crate::commands::shared::input::row_index;
use crate::context::AppContext;
use crate::output::{notice, output};
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct ReviewRow {
    row: usize,
    label: String,
}

#[derive(Debug, Serialize)]
struct ReviewList<'a> {
    filter: &'a RecordFilter,
    /// Filters reset because their value no longer matches any record.
    reset: Vec<&'static str>,
    options: FilterOptions,
    records: Vec<ReviewRow>,
}

#[derive(Debug, Serialize)]
struct CopyResponse<'a> {
    copied: String,
    text: &'a str,
    words: &'a str,
}

/// Handle `kw review`.
pub async fn handle(
    action: &ReviewCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut session = ctx.session()?;
    if let ReviewCommands::List(args) = action {
        apply_args(&mut session.review, args);
    }

    let service = match ctx.records() {
        Ok(service) => service,
        Err(error) => return notice(&error.notice(), flags.format),
    };
    let spinner = Progress::spinner("載入記錄中...");
    let result = service.records().await;
    spinner.finish_clear();
    let records = match result {
        Ok(records) => records,
        Err(error) => {
            tracing::warn!(%error, "record listing failed");
            return notice(&error.notice(), flags.format);
        }
    };

    let reset = session.review.reconcile(&records);
    for field in &reset {
        tracing::info!(filter = field.label(), "filter value no longer available");
    }
    ctx.save(&session)?;

    match action {
        ReviewCommands::List(_) => output(
            &ReviewList {
                filter: &session.review,
                reset: reset.iter().map(|field| field.label()).collect(),
                options: session.review.options(&records),
                records: rows(&session.review.apply(&records)),
            },
            flags.format,
        ),
        ReviewCommands::Show { row } => {
            let record = pick(&session, &records, *row)?;
            output(&ReviewView::new(record), flags.format)
        }
        ReviewCommands::Copy { row } => {
            let record = pick(&session, &records, *row)?.clone();
            session.copy_from_record(&record);
            ctx.save(&session)?;
            output(
                &CopyResponse {
                    copied: record.label(),
                    text: &session.study.text,
                    words: &session.study.words,
                },
                flags.format,
            )
        }
    }
}

fn apply_args(filter: &mut RecordFilter, args: &ReviewFilterArgs) {
    if args.reset {
        *filter = RecordFilter::default();
    }
    for (field, value) in [
        (FilterField::Book, &args.book),
        (FilterField::Article, &args.article),
        (FilterField::Page, &args.page),
        (FilterField::Model, &args.model),
    ] {
        if value.is_some() {
            filter.set(field, value.as_deref());
        }
    }
}

fn rows(records: &[&StudyRecord]) -> Vec<ReviewRow> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| ReviewRow {
            row: index + 1,
            label: record.label(),
        })
        .collect()
}

fn pick<'a>(
    session: &SessionContext,
    records: &'a [StudyRecord],
    row: usize,
) -> anyhow::Result<&'a StudyRecord> {
    let matched = session.review.apply(records);
    let index = row_index(row, matched.len(), "review")?;
    Ok(matched[index])
}

#[cfg(test)]
mod tests {
    use kw_store::review::ALL;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn only_given_filters_change() {
        let mut filter = RecordFilter::default();
        filter.set(FilterField::Book, Some("甲書"));

        apply_args(
            &mut filter,
            &ReviewFilterArgs {
                model: Some("Gemini".into()),
                ..Default::default()
            },
        );
        assert_eq!(filter.book.as_deref(), Some("甲書"));
        assert_eq!(filter.model.as_deref(), Some("Gemini"));

        apply_args(
            &mut filter,
            &ReviewFilterArgs {
                book: Some(ALL.into()),
                ..Default::default()
            },
        );
        assert!(filter.book.is_none());
        assert_eq!(filter.model.as_deref(), Some("Gemini"));
    }

    #[test]
    fn reset_clears_before_applying() {
        let mut filter = RecordFilter::default();
        filter.set(FilterField::Page, Some("3"));
        apply_args(
            &mut filter,
            &ReviewFilterArgs {
                article: Some("一".into()),
                reset: true,
                ..Default::default()
            },
        );
        assert!(filter.page.is_none());
        assert_eq!(filter.article.as_deref(), Some("一"));
    }

    #[test]
    fn rows_are_numbered_from_one() {
        let record = StudyRecord {
            book_title: "甲書".into(),
            article_title: "一".into(),
            page_number: "1".into(),
            model_used: "Gemini".into(),
            ..Default::default()
        };
        let listed = rows(&[&record]);
        assert_eq!(listed[0].row, 1);
        assert_eq!(listed[0].label, "甲書 - 一 (頁 1) - Gemini - ");
    }
}
