mod add;
mod list;
mod update;

use serde::Serialize;

use grad_core::views::filter::unique_locations;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UniversityCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct DeleteResponse {
    requested: usize,
    deleted: u64,
}

/// Handle `gradt university`.
pub async fn handle(
    action: &UniversityCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        UniversityCommands::Add {
            name,
            program,
            location,
            deadline,
            url,
            status,
            tag,
            fee,
            notes,
        } => {
            add::run(
                add::Params {
                    name,
                    program,
                    location,
                    deadline,
                    url: url.as_deref(),
                    status: status.as_deref(),
                    tag: tag.as_deref(),
                    fee: *fee,
                    notes: notes.as_deref(),
                },
                ctx,
                flags,
            )
            .await
        }
        UniversityCommands::Update {
            id,
            name,
            program,
            location,
            deadline,
            url,
            status,
            tag,
            fee,
            notes,
        } => {
            update::run(
                update::Params {
                    id: id.clone(),
                    name: name.clone(),
                    program: program.clone(),
                    location: location.clone(),
                    deadline: deadline.clone(),
                    url: url.clone(),
                    status: status.clone(),
                    tag: tag.clone(),
                    fee: *fee,
                    notes: notes.clone(),
                },
                ctx,
                flags,
            )
            .await
        }
        UniversityCommands::Get { id } => {
            let university = ctx.service.get_university(id).await?;
            output(&university, flags.format)
        }
        UniversityCommands::List {
            search,
            status,
            tag,
            location,
            sort,
            desc,
        } => {
            list::run(
                list::Params {
                    search: search.as_deref(),
                    status: status.as_deref(),
                    tag: tag.as_deref(),
                    location: location.as_deref(),
                    sort: sort.as_deref(),
                    desc: *desc,
                },
                ctx,
                flags,
            )
            .await
        }
        UniversityCommands::Delete { ids } => {
            let deleted = if let [id] = ids.as_slice() {
                ctx.service.delete_university(id).await?;
                1
            } else {
                ctx.service.delete_universities(ids).await?
            };
            output(
                &DeleteResponse {
                    requested: ids.len(),
                    deleted,
                },
                flags.format,
            )
        }
        UniversityCommands::Locations => {
            let universities = ctx.service.list_universities(None).await?;
            output(&unique_locations(&universities), flags.format)
        }
    }
}
