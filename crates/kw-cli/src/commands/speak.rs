use std::path::PathBuf;

use kw_core::notice::Notice;
use kw_speech::{DualSynthesis, synthesize_dual};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SpeakArgs;
use crate::commands::shared::input::{first_text, read_text};
use crate::context::AppContext;
use crate::output::{notice, output};
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct ClipView {
    heading: String,
    voice: String,
    path: Option<PathBuf>,
    notice: Option<Notice>,
}

#[derive(Debug, Serialize)]
struct SpeakResponse {
    text: String,
    complete: bool,
    clips: Vec<ClipView>,
}

#[derive(Debug, Serialize)]
struct ClearResponse {
    removed: usize,
}

/// Handle `kw speak`.
pub async fn handle(args: &SpeakArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut session = ctx.session()?;
    if args.clear {
        let removed = ctx.sessions.clear_audio(&mut session)?;
        return output(&ClearResponse { removed }, flags.format);
    }

    let text = match &args.text {
        Some(arg) => read_text(arg)?,
        None => first_text(
            [session.speech.input.as_str(), session.study.text.as_str()],
            "no text to speak; pass TEXT or `-` to read stdin",
        )?,
    };
    let speech = match ctx.speech() {
        Ok(speech) => speech,
        Err(error) => return notice(&error.notice(), flags.format),
    };

    // Each request replaces the previous clips.
    ctx.sessions.clear_audio(&mut session)?;
    session.speech.input.clone_from(&text);

    let spinner = Progress::spinner("生成語音中...");
    let result = synthesize_dual(&speech, &text, session.voices, &ctx.sessions.audio_dir()).await;
    spinner.finish_clear();

    match result {
        Ok(synthesis) => {
            let response = response(&synthesis);
            session.speech.last = Some(synthesis);
            ctx.save(&session)?;
            output(&response, flags.format)
        }
        Err(error) => {
            tracing::warn!(%error, "speech synthesis failed");
            ctx.save(&session)?;
            notice(&error.notice(), flags.format)
        }
    }
}

fn response(synthesis: &DualSynthesis) -> SpeakResponse {
    SpeakResponse {
        text: synthesis.text.clone(),
        complete: synthesis.is_complete(),
        clips: synthesis
            .clips
            .iter()
            .map(|clip| ClipView {
                heading: clip.heading(),
                voice: clip.voice_id.clone(),
                path: clip.path.clone(),
                notice: clip.notice.clone(),
            })
            .collect(),
    }
}
