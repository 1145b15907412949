use kw_core::voice::{SpeechLanguage, Voice, VoiceSelection};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::VoicesCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct VoiceRow {
    language: SpeechLanguage,
    id: &'static str,
    label: &'static str,
    selected: bool,
}

/// Handle `kw voices`.
pub async fn handle(
    action: &VoicesCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let selection = match action {
        VoicesCommands::List => match ctx.sessions.load()? {
            Some(session) => session.voices,
            None => VoiceSelection {
                cantonese: ctx.config.general.cantonese_voice,
                mandarin: ctx.config.general.mandarin_voice,
            },
        },
        VoicesCommands::Set { voice } => {
            let voice: Voice = voice.parse()?;
            let mut session = ctx.session()?;
            session.voices = session.voices.with(voice);
            ctx.save(&session)?;
            session.voices
        }
    };
    output(&catalog(selection), flags.format)
}

fn catalog(selection: VoiceSelection) -> Vec<VoiceRow> {
    let selected = selection.voices();
    Voice::catalog()
        .map(|voice| VoiceRow {
            language: voice.language(),
            id: voice.id(),
            label: voice.label(),
            selected: selected.contains(&voice),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use kw_core::voice::{CantoneseVoice, MandarinVoice};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn catalog_marks_one_voice_per_language() {
        let rows = catalog(VoiceSelection {
            cantonese: CantoneseVoice::YunSong,
            mandarin: MandarinVoice::Yunxi,
        });
        assert_eq!(rows.len(), 6);
        let selected: Vec<&str> = rows.iter().filter(|r| r.selected).map(|r| r.id).collect();
        assert_eq!(selected, vec!["yue-CN-YunSongNeural", "zh-CN-YunxiNeural"]);
    }
}
