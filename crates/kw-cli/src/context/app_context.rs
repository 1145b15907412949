use std::time::Duration;

use anyhow::Context;
use kw_ai::CompletionClient;
use kw_config::KewenConfig;
use kw_session::{SessionContext, SessionStore};
use kw_speech::{SpeechClient, SpeechError};
use kw_store::{Backend, RecordService, StoreError};

/// Shared application resources initialized once at startup.
///
/// The speech client and record store are built on first use so commands
/// that never touch them work without their credentials.
pub struct AppContext {
    pub config: KewenConfig,
    pub sessions: SessionStore,
    pub ai: CompletionClient,
}

impl AppContext {
    pub fn init(config: KewenConfig) -> anyhow::Result<Self> {
        let ai = CompletionClient::from_config(&config)
            .context("failed to build completion client")?;
        let sessions = SessionStore::new(config.session_dir());
        tracing::debug!(dir = %sessions.dir().display(), "session directory");
        Ok(Self {
            config,
            sessions,
            ai,
        })
    }

    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.config.general.request_timeout_secs)
    }

    pub fn speech(&self) -> Result<SpeechClient, SpeechError> {
        SpeechClient::new(&self.config.speech, self.timeout())
    }

    pub fn records(&self) -> Result<RecordService<Backend>, StoreError> {
        let backend = Backend::from_config(&self.config)?;
        tracing::debug!(backend = backend.name(), "record store");
        Ok(RecordService::new(
            backend,
            Duration::from_secs(self.config.store.cache_ttl_secs),
        ))
    }

    /// The active session, or an error telling the user to start one.
    pub fn session(&self) -> anyhow::Result<SessionContext> {
        Ok(self.sessions.require()?)
    }

    pub fn save(&self, session: &SessionContext) -> anyhow::Result<()> {
        self.sessions
            .save(session)
            .context("failed to save session")
    }
}
