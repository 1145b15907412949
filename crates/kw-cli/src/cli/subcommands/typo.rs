use clap::Subcommand;

/// Typo check commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TypoCommands {
    /// Check text for typos with the session's model.
    Check {
        /// Text to check (`-` reads stdin). Defaults to the last checked text.
        text: Option<String>,
    },
    /// Edit the replacement for one flagged row.
    Fix {
        /// Row number as shown by `typo show`.
        row: usize,
        /// New replacement; omit to delete the flagged span.
        replacement: Option<String>,
    },
    /// Show the flagged and corrected text.
    Show,
}
