use grad_core::enums::DeadlineType;
use grad_db::updates::deadline::DeadlineUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{non_blank, parse_date, parse_enum};
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub id: String,
    pub university: Option<String>,
    pub title: Option<String>,
    pub date: Option<String>,
    pub deadline_type: Option<String>,
    pub notes: Option<String>,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if params.university.is_none()
        && params.title.is_none()
        && params.date.is_none()
        && params.deadline_type.is_none()
        && params.notes.is_none()
    {
        anyhow::bail!(
            "At least one of --university, --title, --date, --type, or --notes must be provided"
        );
    }

    let mut builder = DeadlineUpdateBuilder::new();
    if let Some(university) = params.university {
        builder = builder.university_id(university);
    }
    if let Some(title) = params.title.as_deref() {
        builder = builder.title(title.trim());
    }
    if let Some(date) = params.date.as_deref() {
        builder = builder.date(parse_date(date, "date")?);
    }
    if let Some(deadline_type) = params.deadline_type.as_deref() {
        builder = builder.deadline_type(parse_enum::<DeadlineType>(deadline_type, "type")?);
    }
    if let Some(notes) = params.notes.as_deref() {
        builder = builder.notes(non_blank(notes));
    }

    let deadline = ctx
        .service
        .update_deadline(&params.id, &builder.build())
        .await?;
    output(&deadline, flags.format)
}
