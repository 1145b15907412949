use kw_ai::tasks;
use kw_core::enums::TranslationDirection;
use kw_text::{is_traditional, normalize};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ToolsCommands;
use crate::commands::shared::input::read_text;
use crate::context::AppContext;
use crate::output::{notice, output};
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct TranslationResponse<'a> {
    direction: TranslationDirection,
    translation: &'a str,
}

#[derive(Debug, Serialize)]
struct ScriptResponse {
    input_script: &'static str,
    traditional: String,
    simplified: String,
}

/// Handle `kw tools`.
pub async fn handle(
    action: &ToolsCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ToolsCommands::Convert { text } => {
            let text = read_text(text)?;
            let mut session = ctx.session()?;

            let spinner = Progress::spinner(&format!("{} 生成轉換表中...", session.model));
            let result = tasks::conversion_table(&ctx.ai, session.model, &text).await;
            spinner.finish_clear();

            match result {
                Ok(table) => {
                    session.tools.conversion.clone_from(&table.response);
                    ctx.save(&session)?;
                    output(&table, flags.format)
                }
                Err(error) => {
                    tracing::warn!(%error, "conversion table failed");
                    notice(&error.notice(), flags.format)
                }
            }
        }
        ToolsCommands::Translate { text, direction } => {
            let text = read_text(text)?;
            let mut session = ctx.session()?;
            let direction = direction.unwrap_or(session.tools.translation_direction);

            let spinner = Progress::spinner(&format!("{} 翻譯中...", session.model));
            let result = tasks::translate(&ctx.ai, session.model, direction, &text).await;
            spinner.finish_clear();

            match result {
                Ok(translation) => {
                    session.tools.translation = translation;
                    session.tools.translation_direction = direction;
                    ctx.save(&session)?;
                    output(
                        &TranslationResponse {
                            direction,
                            translation: &session.tools.translation,
                        },
                        flags.format,
                    )
                }
                Err(error) => {
                    tracing::warn!(%error, "translation failed");
                    notice(&error.notice(), flags.format)
                }
            }
        }
        ToolsCommands::Script { text } => output(&script(&read_text(text)?), flags.format),
    }
}

fn script(text: &str) -> ScriptResponse {
    let pair = normalize(text);
    let input_script = if is_traditional(text, &pair.traditional, &pair.simplified) {
        "traditional"
    } else {
        "simplified"
    };
    ScriptResponse {
        input_script,
        traditional: pair.traditional,
        simplified: pair.simplified,
    }
}
