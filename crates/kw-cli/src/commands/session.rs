use kw_core::enums::AiModel;
use kw_core::voice::VoiceSelection;
use kw_session::EndedSession;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SessionCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SessionEndResponse {
    ended: Option<EndedSession>,
}

/// Handle `kw session`.
pub async fn handle(
    action: &SessionCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SessionCommands::Start { model } => start(model.as_deref(), ctx, flags),
        SessionCommands::Show => output(&ctx.session()?, flags.format),
        SessionCommands::End => {
            let ended = ctx.sessions.end()?;
            output(&SessionEndResponse { ended }, flags.format)
        }
    }
}

fn start(model: Option<&str>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let general = &ctx.config.general;
    let model = model
        .map(str::parse::<AiModel>)
        .transpose()?
        .unwrap_or(general.default_model);
    let voices = VoiceSelection {
        cantonese: general.cantonese_voice,
        mandarin: general.mandarin_voice,
    };
    let started = ctx.sessions.start(model, voices)?;
    if let Some(replaced) = started.replaced {
        tracing::info!(%replaced, "ended previous session");
    }
    output(&started, flags.format)
}
