use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct InitResponse {
    database: String,
    user_id: String,
    email: Option<String>,
    full_name: Option<String>,
    ai_configured: bool,
}

/// Handle `gradt init`. The store is already migrated by the app context;
/// this only creates the profile row.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user = &ctx.config.user;
    let profile = ctx
        .service
        .ensure_profile(user.email(), user.full_name())
        .await?;

    tracing::info!(path = %ctx.db_path.display(), "gradtrack initialized");
    output(
        &InitResponse {
            database: ctx.db_path.display().to_string(),
            user_id: profile.id,
            email: profile.email,
            full_name: profile.full_name,
            ai_configured: ctx.config.ai.is_configured(),
        },
        flags.format,
    )
}
