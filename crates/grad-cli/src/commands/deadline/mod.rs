mod calendar;
mod list;
mod update;

use chrono::Utc;
use grad_core::enums::DeadlineType;
use grad_core::views::dashboard::{DEFAULT_DASHBOARD_LIMIT, upcoming_deadlines};
use grad_db::repos::NewDeadline;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::DeadlineCommands;
use crate::commands::shared::parse::{parse_date, parse_enum};
use crate::context::AppContext;
use crate::output::output;

/// Handle `gradt deadline`.
pub async fn handle(
    action: &DeadlineCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        DeadlineCommands::Add {
            university,
            title,
            date,
            deadline_type,
            notes,
        } => {
            let new = NewDeadline {
                university_id: university.clone(),
                title: title.trim().to_string(),
                date: parse_date(date, "date")?,
                deadline_type: deadline_type
                    .as_deref()
                    .map(|t| parse_enum::<DeadlineType>(t, "type"))
                    .transpose()?
                    .unwrap_or_default(),
                completed: false,
                notes: notes.clone(),
            };
            let deadline = ctx.service.create_deadline(&new).await?;
            output(&deadline, flags.format)
        }
        DeadlineCommands::Update {
            id,
            university,
            title,
            date,
            deadline_type,
            notes,
        } => {
            update::run(
                update::Params {
                    id: id.clone(),
                    university: university.clone(),
                    title: title.clone(),
                    date: date.clone(),
                    deadline_type: deadline_type.clone(),
                    notes: notes.clone(),
                },
                ctx,
                flags,
            )
            .await
        }
        DeadlineCommands::Get { id } => {
            let deadline = ctx.service.get_deadline(id).await?;
            output(&deadline, flags.format)
        }
        DeadlineCommands::List {
            university,
            deadline_type,
            done,
            open,
            search,
        } => {
            list::run(
                list::Params {
                    university: university.as_deref(),
                    deadline_type: deadline_type.as_deref(),
                    completed: completion_filter(*done, *open),
                    search: search.as_deref(),
                },
                ctx,
                flags,
            )
            .await
        }
        DeadlineCommands::Complete { id } => {
            let deadline = ctx.service.set_deadline_completed(id, true).await?;
            output(&deadline, flags.format)
        }
        DeadlineCommands::Reopen { id } => {
            let deadline = ctx.service.set_deadline_completed(id, false).await?;
            output(&deadline, flags.format)
        }
        DeadlineCommands::Delete { id } => {
            ctx.service.delete_deadline(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
        DeadlineCommands::Upcoming { days } => {
            let window = days.unwrap_or(ctx.config.general.upcoming_window_days);
            if window < 0 {
                anyhow::bail!("--days must not be negative");
            }
            let limit = flags
                .limit
                .map_or(Ok(DEFAULT_DASHBOARD_LIMIT), usize::try_from)?;

            let universities = ctx.service.list_universities(None).await?;
            let deadlines = ctx.service.list_deadlines(None).await?;
            let deadlines: Vec<_> = deadlines.into_iter().map(|d| d.deadline).collect();

            let upcoming = upcoming_deadlines(&deadlines, &universities, Utc::now(), window, limit);
            output(&upcoming, flags.format)
        }
        DeadlineCommands::Calendar { month, day } => {
            calendar::run(month.as_deref(), day.as_deref(), ctx, flags).await
        }
    }
}

/// `--done` and `--open` map onto the tri-state completion filter.
const fn completion_filter(done: bool, open: bool) -> Option<bool> {
    match (done, open) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}
