use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use kw_core::enums::AiModel;
use kw_core::voice::VoiceSelection;
use serde::Serialize;
use uuid::Uuid;

use crate::context::SessionContext;
use crate::error::SessionError;

const SNAPSHOT_FILE: &str = "session.json";
const AUDIO_DIR: &str = "audio";

/// Result of [`SessionStore::start`].
#[derive(Debug, Serialize)]
pub struct StartedSession {
    pub session: SessionContext,
    /// Session that was still active and got ended first.
    pub replaced: Option<Uuid>,
}

/// Result of [`SessionStore::end`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndedSession {
    pub id: Uuid,
    pub removed_audio: usize,
}

/// One active session per directory.
///
/// Layout: `{dir}/session.json` holds the snapshot and `{dir}/audio/` the
/// synthesized clips.
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn audio_dir(&self) -> PathBuf {
        self.dir.join(AUDIO_DIR)
    }

    fn snapshot_path(&self) -> PathBuf {
        self.dir.join(SNAPSHOT_FILE)
    }

    /// Start a fresh session, ending (and cleaning up) any active one.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the old session cannot be read or the new
    /// one cannot be written.
    pub fn start(
        &self,
        model: AiModel,
        voices: VoiceSelection,
    ) -> Result<StartedSession, SessionError> {
        let replaced = self.end()?.map(|ended| ended.id);
        let session = SessionContext::new(model, voices, Utc::now());
        self.save(&session)?;
        tracing::info!(session = %session.id, ?replaced, "session started");
        Ok(StartedSession { session, replaced })
    }

    /// The active session, if any.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the snapshot exists but cannot be read.
    pub fn load(&self) -> Result<Option<SessionContext>, SessionError> {
        let raw = match std::fs::read_to_string(self.snapshot_path()) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    /// The active session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotActive`] when no session is active.
    pub fn require(&self) -> Result<SessionContext, SessionError> {
        self.load()?.ok_or(SessionError::NotActive)
    }

    /// Write the snapshot atomically: a temp file in the same directory,
    /// renamed over the old snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the directory or file cannot be written.
    pub fn save(&self, session: &SessionContext) -> Result<(), SessionError> {
        std::fs::create_dir_all(&self.dir)?;
        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir)?;
        serde_json::to_writer_pretty(&mut tmp, session)?;
        tmp.write_all(b"\n")?;
        tmp.persist(self.snapshot_path())
            .map_err(|e| SessionError::Io(e.error))?;
        Ok(())
    }

    /// End the active session: delete its audio and its snapshot.
    ///
    /// Cleanup is best-effort; a file that cannot be removed is logged.
    /// Returns `None` when no session was active.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the snapshot cannot be read or removed.
    pub fn end(&self) -> Result<Option<EndedSession>, SessionError> {
        let Some(session) = self.load()? else {
            return Ok(None);
        };

        let tracked: Vec<&Path> = session.audio_paths().collect();
        let removed_audio = tracked.iter().filter(|path| path.exists()).count();
        kw_speech::remove_audio(tracked);

        let audio_dir = self.audio_dir();
        match std::fs::remove_dir_all(&audio_dir) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(dir = %audio_dir.display(), %e, "failed to remove audio dir"),
        }

        std::fs::remove_file(self.snapshot_path())?;
        tracing::info!(session = %session.id, removed_audio, "session ended");
        Ok(Some(EndedSession {
            id: session.id,
            removed_audio,
        }))
    }

    /// Delete the session's audio files and forget them.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the updated snapshot cannot be saved.
    pub fn clear_audio(&self, session: &mut SessionContext) -> Result<usize, SessionError> {
        let Some(last) = session.speech.last.take() else {
            return Ok(0);
        };
        let paths: Vec<&Path> = last.paths().collect();
        let removed = paths.iter().filter(|path| path.exists()).count();
        kw_speech::remove_audio(paths);
        self.save(session)?;
        Ok(removed)
    }
}
