use grad_core::entities::Document;
use grad_core::enums::DocumentType;
use grad_core::views::documents::{can_preview, display_name, file_extension, is_image};
use grad_core::views::filter::{DocumentQuery, DocumentScope};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub struct Params<'a> {
    pub university: Option<&'a str>,
    pub general: bool,
    pub doc_type: Option<&'a str>,
    pub search: Option<&'a str>,
}

/// A document with its display label and file facts.
#[derive(Debug, Serialize)]
pub struct DocumentView<'a> {
    #[serde(flatten)]
    pub document: &'a Document,
    pub type_label: &'static str,
    pub file_extension: Option<String>,
    pub previewable: bool,
    pub image: bool,
}

impl<'a> From<&'a Document> for DocumentView<'a> {
    fn from(document: &'a Document) -> Self {
        let url = document.file_url.as_deref().unwrap_or_default();
        Self {
            document,
            type_label: display_name(document.doc_type),
            file_extension: file_extension(url),
            previewable: can_preview(url),
            image: is_image(url),
        }
    }
}

pub async fn run(params: Params<'_>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let query = build_query(&params)?;
    let documents = ctx.service.list_documents(None).await?;

    let mut views: Vec<DocumentView<'_>> = query
        .apply(&documents)
        .into_iter()
        .map(DocumentView::from)
        .collect();
    views.truncate(usize::try_from(ctx.limit(flags.limit))?);
    output(&views, flags.format)
}

fn build_query(params: &Params<'_>) -> anyhow::Result<DocumentQuery> {
    let scope = if params.general {
        Some(DocumentScope::General)
    } else {
        params
            .university
            .map(|id| DocumentScope::University(id.to_string()))
    };
    Ok(DocumentQuery {
        scope,
        doc_type: params
            .doc_type
            .map(|t| parse_enum::<DocumentType>(t, "type"))
            .transpose()?,
        search: params.search.map(String::from),
    })
}
