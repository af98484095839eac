use clap::Subcommand;

/// Profile commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProfileCommands {
    /// Show the local profile.
    Show,
    /// Update email or display name.
    Update {
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        name: Option<String>,
    },
}
