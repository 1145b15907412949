use clap::{Args, Subcommand};

/// Review commands over exported records.
#[derive(Clone, Debug, Subcommand)]
pub enum ReviewCommands {
    /// List records matching the session's filters.
    List(ReviewFilterArgs),
    /// Show one listed record with highlighting and its dictionary.
    Show {
        /// Row number as shown by `review list`.
        row: usize,
    },
    /// Copy one listed record into the study and speech inputs.
    Copy {
        /// Row number as shown by `review list`.
        row: usize,
    },
}

/// Filter updates; `所有` clears a filter.
#[derive(Clone, Debug, Default, Args)]
pub struct ReviewFilterArgs {
    #[arg(long)]
    pub book: Option<String>,
    #[arg(long)]
    pub article: Option<String>,
    #[arg(long)]
    pub page: Option<String>,
    #[arg(long)]
    pub model: Option<String>,
    /// Clear every filter first.
    #[arg(long)]
    pub reset: bool,
}
