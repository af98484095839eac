use grad_core::entities::PostGradInfo;
use grad_core::views::post_grad::{PostGradSummary, placement_rating, salary_band, visa_badge};
use grad_db::repos::PostGradInput;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PostGradCommands;
use crate::context::AppContext;
use crate::output::output;

/// Post-graduation info with its display ratings.
#[derive(Debug, Serialize)]
struct PostGradView<'a> {
    #[serde(flatten)]
    info: &'a PostGradInfo,
    salary_band: &'static str,
    placement_rating: &'static str,
    visa: &'static str,
}

impl<'a> From<&'a PostGradInfo> for PostGradView<'a> {
    fn from(info: &'a PostGradInfo) -> Self {
        Self {
            info,
            salary_band: salary_band(info.average_salary),
            placement_rating: placement_rating(info.job_placement_rate),
            visa: visa_badge(info),
        }
    }
}

/// Handle `gradt postgrad`.
pub async fn handle(
    action: &PostGradCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        PostGradCommands::Set {
            university_id,
            opt,
            stem,
            h1b,
            salary,
            employers,
            placement_rate,
            notes,
        } => {
            let input = PostGradInput {
                opt_eligible: *opt,
                stem_designated: *stem,
                h1b_sponsorship: *h1b,
                average_salary: *salary,
                top_employers: employers
                    .iter()
                    .map(|e| e.trim().to_string())
                    .filter(|e| !e.is_empty())
                    .collect(),
                job_placement_rate: *placement_rate,
                notes: notes.clone(),
            };
            let info = ctx.service.upsert_post_grad(university_id, &input).await?;
            output(&PostGradView::from(&info), flags.format)
        }
        PostGradCommands::Get { university_id } => {
            let info = ctx
                .service
                .get_post_grad_for_university(university_id)
                .await?;
            output(&PostGradView::from(&info), flags.format)
        }
        PostGradCommands::List => {
            let infos = ctx.service.list_post_grad().await?;
            let views: Vec<PostGradView<'_>> = infos.iter().map(PostGradView::from).collect();
            output(&views, flags.format)
        }
        PostGradCommands::Summary => {
            let infos = ctx.service.list_post_grad().await?;
            output(&PostGradSummary::from_infos(&infos), flags.format)
        }
        PostGradCommands::Delete { university_id } => {
            ctx.service.delete_post_grad(university_id).await?;
            output(
                &serde_json::json!({ "deleted": university_id }),
                flags.format,
            )
        }
    }
}
