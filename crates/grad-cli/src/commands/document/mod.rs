mod list;
mod update;

use grad_core::enums::DocumentType;
use grad_db::repos::NewDocument;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::DocumentCommands;
use crate::commands::shared::parse::{non_blank, parse_enum};
use crate::context::AppContext;
use crate::output::output;

/// Handle `gradt document`.
pub async fn handle(
    action: &DocumentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        DocumentCommands::Add {
            name,
            doc_type,
            university,
            content,
            file_url,
        } => {
            let new = NewDocument {
                university_id: university.clone(),
                name: name.trim().to_string(),
                doc_type: parse_enum::<DocumentType>(doc_type, "type")?,
                content: content.as_deref().and_then(non_blank),
                file_url: file_url.as_deref().and_then(non_blank),
            };
            let document = ctx.service.create_document(&new).await?;
            output(&document, flags.format)
        }
        DocumentCommands::Update {
            id,
            name,
            doc_type,
            university,
            general,
            content,
            file_url,
            bump_version,
        } => {
            update::run(
                update::Params {
                    id: id.clone(),
                    name: name.clone(),
                    doc_type: doc_type.clone(),
                    university: university.clone(),
                    general: *general,
                    content: content.clone(),
                    file_url: file_url.clone(),
                    bump_version: *bump_version,
                },
                ctx,
                flags,
            )
            .await
        }
        DocumentCommands::Get { id } => {
            let document = ctx.service.get_document(id).await?;
            output(&list::DocumentView::from(&document), flags.format)
        }
        DocumentCommands::List {
            university,
            general,
            doc_type,
            search,
        } => {
            list::run(
                list::Params {
                    university: university.as_deref(),
                    general: *general,
                    doc_type: doc_type.as_deref(),
                    search: search.as_deref(),
                },
                ctx,
                flags,
            )
            .await
        }
        DocumentCommands::Delete { id } => {
            ctx.service.delete_document(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
    }
}
