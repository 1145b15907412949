use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Session { action } => commands::session::handle(&action, ctx, flags).await,
        Commands::Model { name } => commands::model::handle(name.as_deref(), ctx, flags).await,
        Commands::Voices { action } => commands::voices::handle(&action, ctx, flags).await,
        Commands::Typo { action } => commands::typo::handle(&action, ctx, flags).await,
        Commands::Study { action } => commands::study::handle(&action, ctx, flags).await,
        Commands::Speak(args) => commands::speak::handle(&args, ctx, flags).await,
        Commands::Review { action } => commands::review::handle(&action, ctx, flags).await,
        Commands::Tools { action } => commands::tools::handle(&action, ctx, flags).await,
    }
}
