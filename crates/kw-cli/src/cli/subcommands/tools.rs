use clap::Subcommand;
use kw_core::enums::TranslationDirection;

/// Conversion and translation tools.
#[derive(Clone, Debug, Subcommand)]
pub enum ToolsCommands {
    /// AI conversion table: both scripts, pinyin, meaning, and examples.
    Convert {
        /// Text to convert (`-` reads stdin).
        text: String,
    },
    /// Translate between Chinese and English.
    Translate {
        /// Text to translate (`-` reads stdin).
        text: String,
        /// zh-en or en-zh (defaults to the last direction used).
        #[arg(long)]
        direction: Option<TranslationDirection>,
    },
    /// Convert locally between traditional and simplified script.
    Script {
        /// Text to convert (`-` reads stdin).
        text: String,
    },
}
