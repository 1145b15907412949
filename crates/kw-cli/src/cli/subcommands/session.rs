use clap::Subcommand;

/// Session lifecycle commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SessionCommands {
    /// Start a new session, ending any active one.
    Start {
        /// Completion model for the session (defaults to `general.default_model`).
        #[arg(long)]
        model: Option<String>,
    },
    /// Show everything stored in the active session.
    Show,
    /// End the active session and delete its audio.
    End,
}
