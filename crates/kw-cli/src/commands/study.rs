use anyhow::bail;
use chrono::Utc;
use kw_ai::tasks;
use kw_core::entities::DictionaryEntry;
use kw_core::enums::AiModel;
use kw_session::{ExportDraft, SessionContext};
use kw_store::{ExportMode, ExportOutcome};
use kw_text::table::parse_dictionary_table;
use kw_text::{Marker, ScriptPair, highlight, normalize};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{ExportArgs, StudyCommands};
use crate::commands::shared::input::read_text;
use crate::context::AppContext;
use crate::output::{notice, output};
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct StudyView<'a> {
    /// Study text in both scripts with the keywords highlighted.
    text: ScriptPair,
    words: &'a str,
    suggested_keywords: &'a [String],
    dictionary: Vec<DictionaryEntry>,
    dictionary_model: Option<AiModel>,
    export: &'a ExportDraft,
}

#[derive(Debug, Serialize)]
struct KeywordsResponse<'a> {
    suggested: &'a [String],
    applied: bool,
    words: &'a str,
}

#[derive(Debug, Serialize)]
struct ExportResponse {
    #[serde(flatten)]
    outcome: ExportOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    hint: Option<&'static str>,
}

const DUPLICATE_HINT: &str =
    "記錄已存在。使用 --overwrite 覆蓋，或以 --book/--article/--page 另存新標題。";

/// Handle `kw study`.
pub async fn handle(
    action: &StudyCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut session = ctx.session()?;
    match action {
        StudyCommands::Text { text } => {
            session.study.set_text(&read_text(text)?);
            ctx.save(&session)?;
            output(&view(&session), flags.format)
        }
        StudyCommands::Words { words } => {
            session.study.set_words(words);
            ctx.save(&session)?;
            output(&view(&session), flags.format)
        }
        StudyCommands::Keywords { apply } => keywords(&mut session, *apply, ctx, flags).await,
        StudyCommands::Dict => dictionary(&mut session, ctx, flags).await,
        StudyCommands::Meta {
            book,
            article,
            page,
        } => {
            set_titles(&mut session.export, book.as_deref(), article.as_deref(), page.as_deref());
            ctx.save(&session)?;
            output(&session.export, flags.format)
        }
        StudyCommands::Show => output(&view(&session), flags.format),
        StudyCommands::Export(args) => export(&mut session, args, ctx, flags).await,
    }
}

fn view(session: &SessionContext) -> StudyView<'_> {
    let study = &session.study;
    let pair = normalize(&study.text);
    StudyView {
        text: highlight(&pair.traditional, &pair.simplified, &study.words, &Marker::default()),
        words: &study.words,
        suggested_keywords: &study.suggested_keywords,
        dictionary: parse_dictionary_table(&study.dictionary),
        dictionary_model: study.dictionary_model,
        export: &session.export,
    }
}

fn set_titles(draft: &mut ExportDraft, book: Option<&str>, article: Option<&str>, page: Option<&str>) {
    for (field, value) in [
        (&mut draft.book_title, book),
        (&mut draft.article_title, article),
        (&mut draft.page_number, page),
    ] {
        if let Some(value) = value {
            value.trim().clone_into(field);
        }
    }
}

async fn keywords(
    session: &mut SessionContext,
    apply: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if session.study.text.trim().is_empty() {
        bail!("no study text; run `kw study text` first");
    }

    let spinner = Progress::spinner(&format!("{} 提取關鍵詞中...", session.model));
    let result = tasks::suggest_keywords(&ctx.ai, session.model, &session.study.text).await;
    spinner.finish_clear();

    let suggested = match result {
        Ok(words) => words,
        Err(error) => {
            tracing::warn!(%error, "keyword suggestion failed");
            return notice(&error.notice(), flags.format);
        }
    };
    if apply && !suggested.is_empty() {
        session.study.set_words(&suggested.join(","));
    }
    session.study.suggested_keywords = suggested;
    ctx.save(session)?;

    output(
        &KeywordsResponse {
            suggested: &session.study.suggested_keywords,
            applied: apply,
            words: &session.study.words,
        },
        flags.format,
    )
}

async fn dictionary(session: &mut SessionContext, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if session.study.words.trim().is_empty() {
        bail!("no keywords; run `kw study words` or `kw study keywords --apply` first");
    }

    let spinner = Progress::spinner(&format!("{} 生成字典中...", session.model));
    let result = tasks::lookup_dictionary(&ctx.ai, session.model, &session.study.words).await;
    spinner.finish_clear();

    match result {
        Ok(table) => {
            session
                .study
                .set_dictionary(table.model, table.response.clone());
            ctx.save(session)?;
            if table.entries.is_empty() {
                tracing::info!(model = %table.model, "dictionary reply had no table rows");
            }
            output(&table, flags.format)
        }
        Err(error) => {
            tracing::warn!(%error, "dictionary lookup failed");
            notice(&error.notice(), flags.format)
        }
    }
}

async fn export(
    session: &mut SessionContext,
    args: &ExportArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    // New titles are the "save under another name" answer to a duplicate.
    set_titles(
        &mut session.export,
        args.book.as_deref(),
        args.article.as_deref(),
        args.page.as_deref(),
    );
    ctx.save(session)?;

    let mode = if args.overwrite {
        ExportMode::Overwrite
    } else {
        ExportMode::CreateOnly
    };
    let service = match ctx.records() {
        Ok(service) => service,
        Err(error) => return notice(&error.notice(), flags.format),
    };

    let spinner = Progress::spinner("保存記錄中...");
    let result = service
        .export(&session.export_request(), mode, Utc::now())
        .await;
    spinner.finish_clear();

    match result {
        Ok(outcome) => {
            let hint = matches!(outcome, ExportOutcome::Duplicate { .. }).then_some(DUPLICATE_HINT);
            output(&ExportResponse { outcome, hint }, flags.format)
        }
        Err(error) => {
            tracing::warn!(%error, "export failed");
            notice(&error.notice(), flags.format)
        }
    }
}
