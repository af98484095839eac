use chrono::Utc;
use grad_core::entities::Deadline;
use grad_core::views::dashboard::{DEFAULT_DASHBOARD_LIMIT, DashboardSummary};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `gradt dashboard`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let universities = ctx.service.list_universities(None).await?;
    let deadlines: Vec<Deadline> = ctx
        .service
        .list_deadlines(None)
        .await?
        .into_iter()
        .map(|d| d.deadline)
        .collect();

    let limit = flags
        .limit
        .map_or(Ok(DEFAULT_DASHBOARD_LIMIT), usize::try_from)?;
    let summary = DashboardSummary::build(
        &universities,
        &deadlines,
        Utc::now(),
        ctx.config.general.upcoming_window_days,
        limit,
    );
    tracing::debug!(
        total = summary.counts.total,
        upcoming = summary.upcoming.len(),
        "dashboard built"
    );
    output(&summary, flags.format)
}
