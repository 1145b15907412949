use kw_core::voice::{CantoneseVoice, MandarinVoice, SpeechLanguage, Voice, VoiceSelection};
use kw_speech::{SpeechError, Synthesizer, remove_audio, synthesize_dual};
use pretty_assertions::assert_eq;
use std::sync::Mutex;

/// Returns the voice id as "audio" and fails for Mandarin when asked to.
struct FakeSynth {
    fail_mandarin: bool,
    calls: Mutex<Vec<String>>,
}

impl FakeSynth {
    fn new(fail_mandarin: bool) -> Self {
        Self {
            fail_mandarin,
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl Synthesizer for FakeSynth {
    async fn synthesize(&self, text: &str, voice: Voice) -> Result<Vec<u8>, SpeechError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{}:{text}", voice.id()));
        if self.fail_mandarin && voice.language() == SpeechLanguage::Mandarin {
            return Err(SpeechError::Canceled {
                reason: "quota".into(),
            });
        }
        Ok(voice.id().as_bytes().to_vec())
    }
}

#[tokio::test]
async fn writes_one_clip_per_language() {
    let dir = tempfile::tempdir().unwrap();
    let synth = FakeSynth::new(false);
    let selection = VoiceSelection {
        cantonese: CantoneseVoice::YunSong,
        mandarin: MandarinVoice::Xiaoyi,
    };

    let result = synthesize_dual(&synth, "  你好  ", selection, dir.path())
        .await
        .unwrap();

    assert_eq!(result.text, "你好");
    assert!(result.is_complete());
    assert_eq!(result.clips[0].heading(), "粵語發音 - 雲松 (Male)");
    assert_eq!(result.clips[1].voice_id, "zh-CN-XiaoyiNeural");

    let audio = std::fs::read(result.clips[0].path.as_ref().unwrap()).unwrap();
    assert_eq!(audio, b"yue-CN-YunSongNeural");

    let calls = synth.calls.lock().unwrap().clone();
    assert_eq!(
        calls,
        vec!["yue-CN-YunSongNeural:你好", "zh-CN-XiaoyiNeural:你好"]
    );
}

#[tokio::test]
async fn one_failure_keeps_the_other_clip() {
    let dir = tempfile::tempdir().unwrap();
    let result = synthesize_dual(
        &FakeSynth::new(true),
        "早晨",
        VoiceSelection::default(),
        dir.path(),
    )
    .await
    .unwrap();

    assert!(!result.is_complete());
    assert!(result.clips[0].path.is_some());
    assert!(result.clips[1].path.is_none());
    assert_eq!(
        result.clips[1].notice.as_ref().unwrap().message,
        "語音合成失敗: quota"
    );
}

#[tokio::test]
async fn blank_text_synthesizes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let synth = FakeSynth::new(false);
    let result = synthesize_dual(&synth, "   ", VoiceSelection::default(), dir.path())
        .await
        .unwrap();
    assert!(result.clips.is_empty());
    assert!(synth.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn remove_audio_deletes_files_and_tolerates_missing() {
    let dir = tempfile::tempdir().unwrap();
    let result = synthesize_dual(
        &FakeSynth::new(false),
        "再見",
        VoiceSelection::default(),
        &dir.path().join("audio"),
    )
    .await
    .unwrap();
    let paths: Vec<_> = result.paths().map(std::path::Path::to_path_buf).collect();
    assert_eq!(paths.len(), 2);

    remove_audio(paths.iter().map(std::path::PathBuf::as_path));
    assert!(paths.iter().all(|p| !p.exists()));

    remove_audio(paths.iter().map(std::path::PathBuf::as_path));
}
