use grad_core::views::timeline::build_timeline;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `gradt timeline`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let universities = ctx.service.list_universities(None).await?;
    output(&build_timeline(&universities), flags.format)
}
