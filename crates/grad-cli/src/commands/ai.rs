use chrono::Utc;
use grad_ai::UserProfile;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AiCommands;
use crate::commands::shared::university::{from_search_result, pick};
use crate::context::AppContext;
use crate::output::output;

/// Handle `gradt ai`.
pub async fn handle(action: &AiCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = ctx.ai_client()?;

    match action {
        AiCommands::Search { query, save } => {
            let results = client.search_universities(query).await?;
            tracing::debug!(count = results.len(), "search returned");

            match save {
                Some(index) => {
                    let result = pick(&results, *index)?;
                    let new = from_search_result(result, None, Utc::now().date_naive());
                    let university = ctx.service.create_university(&new).await?;
                    output(&university, flags.format)
                }
                None => output(&results, flags.format),
            }
        }
        AiCommands::Details { name } => {
            let details = client
                .university_details(name)
                .await
                .ok_or_else(|| anyhow::anyhow!("no details available for '{name}'"))?;
            output(&details, flags.format)
        }
        AiCommands::Recommend {
            interests,
            locations,
            budget,
            background,
            save,
        } => {
            let profile = UserProfile {
                interests: interests.clone(),
                preferred_locations: locations.clone(),
                budget_range: budget.clone(),
                academic_background: background.clone(),
            };
            let recommendations = client.recommendations(&profile).await?;

            match save {
                Some(index) => {
                    let picked = pick(&recommendations, *index)?;
                    let new = from_search_result(
                        &picked.university,
                        picked.tag(),
                        Utc::now().date_naive(),
                    );
                    let university = ctx.service.create_university(&new).await?;
                    output(&university, flags.format)
                }
                None => output(&recommendations, flags.format),
            }
        }
    }
}
