use clap::Subcommand;

/// Voice catalog commands.
#[derive(Clone, Debug, Subcommand)]
pub enum VoicesCommands {
    /// List every voice, marking the session's selection.
    List,
    /// Select a voice for its language.
    Set {
        /// Voice identifier, e.g. `yue-CN-XiaoMinNeural`.
        voice: String,
    },
}
