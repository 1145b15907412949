use anyhow::{Context, bail};
use kw_ai::tasks;
use kw_core::entities::TypoCorrection;
use kw_core::enums::AiModel;
use kw_session::TypoState;
use kw_text::corrections::{CorrectionKind, apply_corrections, corrected_text, mark_flagged};
use kw_text::table::NO_TYPOS_SENTINEL;
use kw_text::{ScriptPair, normalize};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TypoCommands;
use crate::commands::shared::input::{first_text, read_text, row_index};
use crate::context::AppContext;
use crate::output::{notice, output};
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct CorrectionRow {
    row: usize,
    flagged: String,
    suggested: String,
    replacement: String,
    explanation: String,
    kind: &'static str,
}

#[derive(Debug, Serialize)]
struct TypoView {
    model: Option<AiModel>,
    summary: String,
    corrections: Vec<CorrectionRow>,
    /// Original text with flagged spans marked.
    flagged: ScriptPair,
    /// Corrected text with each change marked.
    corrected: String,
    /// Corrected text without markup.
    plain: String,
}

/// Handle `kw typo`.
pub async fn handle(
    action: &TypoCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut session = ctx.session()?;
    match action {
        TypoCommands::Check { text } => {
            let text = match text {
                Some(arg) => read_text(arg)?,
                None => first_text(
                    [session.typo.input.as_str()],
                    "no text to check; pass TEXT or `-` to read stdin",
                )?,
            };
            session.typo.set_input(&text);
            let traditional = normalize(&text).traditional;

            let spinner = Progress::spinner(&format!("{} 檢查錯字中...", session.model));
            let result = tasks::check_typos(&ctx.ai, session.model, &traditional).await;
            spinner.finish_clear();

            match result {
                Ok(check) => {
                    session
                        .typo
                        .record_check(check.model, check.response, check.corrections);
                    ctx.save(&session)?;
                    output(&view(&session.typo), flags.format)
                }
                Err(error) => {
                    tracing::warn!(%error, "typo check failed");
                    ctx.save(&session)?;
                    notice(&error.notice(), flags.format)
                }
            }
        }
        TypoCommands::Fix { row, replacement } => {
            if !session.typo.is_checked() {
                bail!("no typo check yet; run `kw typo check` first");
            }
            let index = row_index(*row, session.typo.corrections.len(), "typo")?;
            session
                .typo
                .set_replacement(index, replacement.as_deref().unwrap_or_default())
                .context("typo row disappeared")?;
            ctx.save(&session)?;
            output(&view(&session.typo), flags.format)
        }
        TypoCommands::Show => {
            if !session.typo.is_checked() {
                bail!("no typo check yet; run `kw typo check` first");
            }
            output(&view(&session.typo), flags.format)
        }
    }
}

fn view(typo: &TypoState) -> TypoView {
    let pair = normalize(&typo.input);
    let corrections = &typo.corrections;
    let summary = if corrections.is_empty() {
        NO_TYPOS_SENTINEL.to_string()
    } else {
        format!("發現 {} 處可能的錯字", corrections.len())
    };

    TypoView {
        model: typo.checked_with,
        summary,
        corrections: corrections.iter().enumerate().map(row).collect(),
        flagged: mark_flagged(&pair.traditional, &pair.simplified, corrections),
        corrected: corrected_text(&pair.traditional, corrections),
        plain: apply_corrections(&pair.traditional, corrections),
    }
}

fn row((index, correction): (usize, &TypoCorrection)) -> CorrectionRow {
    let kind = match CorrectionKind::of(correction) {
        CorrectionKind::Kept => "kept",
        CorrectionKind::Edited => "edited",
        CorrectionKind::Removed => "removed",
    };
    CorrectionRow {
        row: index + 1,
        flagged: correction.flagged.clone(),
        suggested: correction.suggested.clone(),
        replacement: correction.replacement.clone(),
        explanation: correction.explanation.clone(),
        kind,
    }
}
