use clap::{Args, Subcommand};

/// Vocabulary study commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StudyCommands {
    /// Set the study text.
    Text {
        /// Study text (`-` reads stdin).
        text: String,
    },
    /// Set the comma-separated keyword list.
    Words { words: String },
    /// Ask the model for key vocabulary of the study text.
    Keywords {
        /// Use the suggestions as the keyword list.
        #[arg(long)]
        apply: bool,
    },
    /// Generate the dictionary table for the keyword list.
    Dict,
    /// Set the titles used on export.
    Meta {
        #[arg(long)]
        book: Option<String>,
        #[arg(long)]
        article: Option<String>,
        #[arg(long)]
        page: Option<String>,
    },
    /// Show the highlighted text, keywords, and dictionary.
    Show,
    /// Save the study session to the record store.
    Export(ExportArgs),
}

/// Arguments for `kw study export`.
///
/// Without flags an existing record is reported and left alone.
#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    /// Replace the existing record with the same titles and model.
    #[arg(long, conflicts_with_all = ["book", "article", "page"])]
    pub overwrite: bool,
    /// Save under a different book title.
    #[arg(long)]
    pub book: Option<String>,
    /// Save under a different article title.
    #[arg(long)]
    pub article: Option<String>,
    /// Save under a different page number.
    #[arg(long)]
    pub page: Option<String>,
}
