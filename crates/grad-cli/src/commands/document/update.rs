use grad_core::enums::DocumentType;
use grad_db::updates::document::{DocumentUpdate, DocumentUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::commands::document::list::DocumentView;
use crate::commands::shared::parse::{non_blank, parse_enum};
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub id: String,
    pub name: Option<String>,
    pub doc_type: Option<String>,
    pub university: Option<String>,
    pub general: bool,
    pub content: Option<String>,
    pub file_url: Option<String>,
    pub bump_version: bool,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let update = build(&params)?;
    let document = ctx.service.update_document(&params.id, &update).await?;
    output(&DocumentView::from(&document), flags.format)
}

fn build(params: &Params) -> anyhow::Result<DocumentUpdate> {
    if params.name.is_none()
        && params.doc_type.is_none()
        && params.university.is_none()
        && !params.general
        && params.content.is_none()
        && params.file_url.is_none()
    {
        anyhow::bail!(
            "At least one of --name, --type, --university, --general, --content, or --file-url \
             must be provided"
        );
    }

    let mut builder = DocumentUpdateBuilder::new().bump_version(params.bump_version);
    if let Some(name) = params.name.as_deref() {
        builder = builder.name(name.trim());
    }
    if let Some(doc_type) = params.doc_type.as_deref() {
        builder = builder.doc_type(parse_enum::<DocumentType>(doc_type, "type")?);
    }
    if params.general {
        builder = builder.university_id(None);
    } else if let Some(university) = params.university.clone() {
        builder = builder.university_id(Some(university));
    }
    if let Some(content) = params.content.as_deref() {
        builder = builder.content(non_blank(content));
    }
    if let Some(file_url) = params.file_url.as_deref() {
        builder = builder.file_url(non_blank(file_url));
    }
    Ok(builder.build())
}
