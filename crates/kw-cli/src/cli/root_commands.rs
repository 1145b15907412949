use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    ReviewCommands, SessionCommands, StudyCommands, ToolsCommands, TypoCommands, VoicesCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Session lifecycle.
    Session {
        #[command(subcommand)]
        action: SessionCommands,
    },
    /// Show or select the completion model.
    Model {
        /// Model to select: gemini or deepseek.
        name: Option<String>,
    },
    /// Speech voices.
    Voices {
        #[command(subcommand)]
        action: VoicesCommands,
    },
    /// Typo check of OCR'd text.
    Typo {
        #[command(subcommand)]
        action: TypoCommands,
    },
    /// Study text, vocabulary, dictionary, and export.
    Study {
        #[command(subcommand)]
        action: StudyCommands,
    },
    /// Cantonese and Mandarin audio.
    Speak(SpeakArgs),
    /// Review exported records.
    Review {
        #[command(subcommand)]
        action: ReviewCommands,
    },
    /// Conversion and translation tools.
    Tools {
        #[command(subcommand)]
        action: ToolsCommands,
    },
}

/// Arguments for `kw speak`.
#[derive(Clone, Debug, Args)]
pub struct SpeakArgs {
    /// Text to speak (`-` reads stdin). Defaults to the last spoken or
    /// studied text.
    #[arg(conflicts_with = "clear")]
    pub text: Option<String>,
    /// Delete the session's audio files instead.
    #[arg(long)]
    pub clear: bool,
}
