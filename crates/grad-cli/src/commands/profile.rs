use anyhow::Context;
use grad_db::updates::profile::ProfileUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProfileCommands;
use crate::commands::shared::parse::non_blank;
use crate::context::AppContext;
use crate::output::output;

/// Handle `gradt profile`.
pub async fn handle(
    action: &ProfileCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProfileCommands::Show => {
            let profile = ctx
                .service
                .get_profile()
                .await
                .context("no profile yet. Run 'gradt init' first")?;
            output(&profile, flags.format)
        }
        ProfileCommands::Update { email, name } => {
            if email.is_none() && name.is_none() {
                anyhow::bail!("At least one of --email or --name must be provided");
            }
            let mut builder = ProfileUpdateBuilder::new();
            if let Some(email) = email {
                builder = builder.email(non_blank(email));
            }
            if let Some(name) = name {
                builder = builder.full_name(non_blank(name));
            }
            let profile = ctx
                .service
                .update_profile(&builder.build())
                .await
                .context("no profile yet. Run 'gradt init' first")?;
            output(&profile, flags.format)
        }
    }
}
