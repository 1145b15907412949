use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use kw_core::notice::Notice;
use kw_core::voice::{SpeechLanguage, Voice, VoiceSelection};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::client::Synthesizer;
use crate::error::SpeechError;

/// One synthesized clip, or the reason it is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clip {
    pub language: SpeechLanguage,
    pub voice_id: String,
    pub voice_label: String,
    pub path: Option<PathBuf>,
    pub notice: Option<Notice>,
}

impl Clip {
    /// Heading for display, e.g. `粵語發音 - 曉敏 (Female)`.
    #[must_use]
    pub fn heading(&self) -> String {
        format!("{} - {}", self.language.heading(), self.voice_label)
    }
}

/// Cantonese and Mandarin renderings of the same text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DualSynthesis {
    pub text: String,
    pub clips: Vec<Clip>,
}

impl DualSynthesis {
    /// Both clips were written.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.clips.is_empty() && self.clips.iter().all(|clip| clip.path.is_some())
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.clips.iter().filter_map(|clip| clip.path.as_deref())
    }
}

/// Synthesize `text` once per voice in `selection` and write WAV files into
/// `out_dir`.
///
/// Calls run one after the other. A failed clip keeps its notice and the
/// other clip is still attempted. Blank text synthesizes nothing.
///
/// # Errors
///
/// Returns [`SpeechError::Io`] if `out_dir` cannot be created.
pub async fn synthesize_dual<S: Synthesizer>(
    synthesizer: &S,
    text: &str,
    selection: VoiceSelection,
    out_dir: &Path,
) -> Result<DualSynthesis, SpeechError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(DualSynthesis::default());
    }
    std::fs::create_dir_all(out_dir)?;

    let mut clips = Vec::with_capacity(2);
    for voice in selection.voices() {
        let (path, notice) = match render(synthesizer, text, voice, out_dir).await {
            Ok(path) => (Some(path), None),
            Err(error) => {
                tracing::warn!(voice = voice.id(), %error, "speech synthesis failed");
                (None, Some(error.notice()))
            }
        };
        clips.push(Clip {
            language: voice.language(),
            voice_id: voice.id().to_string(),
            voice_label: voice.label().to_string(),
            path,
            notice,
        });
    }

    Ok(DualSynthesis {
        text: text.to_string(),
        clips,
    })
}

async fn render<S: Synthesizer>(
    synthesizer: &S,
    text: &str,
    voice: Voice,
    out_dir: &Path,
) -> Result<PathBuf, SpeechError> {
    let audio = synthesizer.synthesize(text, voice).await?;
    let path = out_dir.join(format!(
        "{}-{}.wav",
        voice.language(),
        Uuid::new_v4().simple()
    ));
    std::fs::write(&path, audio)?;
    Ok(path)
}

/// Delete audio files, ignoring ones that are already gone.
pub fn remove_audio<'a>(paths: impl IntoIterator<Item = &'a Path>) {
    for path in paths {
        match std::fs::remove_file(path) {
            Ok(()) => tracing::debug!(path = %path.display(), "removed audio"),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(path = %path.display(), %e, "failed to remove audio"),
        }
    }
}
