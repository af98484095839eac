use chrono::Utc;
use grad_core::entities::Deadline;
use grad_core::views::notifications::build_notifications;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::NotificationsArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `gradt notifications`.
pub async fn handle(
    args: &NotificationsArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let window = args
        .days
        .unwrap_or(ctx.config.general.notification_window_days);
    if window < 0 {
        anyhow::bail!("--days must not be negative");
    }

    let universities = ctx.service.list_universities(None).await?;
    let documents = ctx.service.list_documents(None).await?;
    let deadlines: Vec<Deadline> = ctx
        .service
        .list_deadlines(None)
        .await?
        .into_iter()
        .map(|d| d.deadline)
        .collect();

    let mut notices =
        build_notifications(&deadlines, &universities, &documents, Utc::now(), window);
    if let Some(limit) = flags.limit {
        notices.truncate(usize::try_from(limit)?);
    }
    output(&notices, flags.format)
}
