use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Init => commands::init::handle(ctx, flags).await,
        Commands::Profile { action } => commands::profile::handle(&action, ctx, flags).await,
        Commands::University { action } => commands::university::handle(&action, ctx, flags).await,
        Commands::Deadline { action } => commands::deadline::handle(&action, ctx, flags).await,
        Commands::Document { action } => commands::document::handle(&action, ctx, flags).await,
        Commands::Requirement { action } => {
            commands::requirement::handle(&action, ctx, flags).await
        }
        Commands::PostGrad { action } => commands::post_grad::handle(&action, ctx, flags).await,
        Commands::Dashboard => commands::dashboard::handle(ctx, flags).await,
        Commands::Notifications(args) => commands::notifications::handle(&args, ctx, flags).await,
        Commands::Timeline => commands::timeline::handle(ctx, flags).await,
        Commands::Ai { action } => commands::ai::handle(&action, ctx, flags).await,
    }
}
