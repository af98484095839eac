use grad_core::enums::{ApplicationStatus, UniversityTag};
use grad_db::updates::university::{UniversityUpdate, UniversityUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{non_blank, parse_date, parse_enum};
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub id: String,
    pub name: Option<String>,
    pub program: Option<String>,
    pub location: Option<String>,
    pub deadline: Option<String>,
    pub url: Option<String>,
    pub status: Option<String>,
    pub tag: Option<String>,
    pub fee: Option<i64>,
    pub notes: Option<String>,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    validate_update_params(&params)?;
    let update = build(&params)?;
    let university = ctx.service.update_university(&params.id, &update).await?;
    output(&university, flags.format)
}

fn build(params: &Params) -> anyhow::Result<UniversityUpdate> {
    let mut builder = UniversityUpdateBuilder::new();
    if let Some(name) = params.name.as_deref() {
        builder = builder.name(name.trim());
    }
    if let Some(program) = params.program.as_deref() {
        builder = builder.program_name(program.trim());
    }
    if let Some(location) = params.location.as_deref() {
        builder = builder.location(location.trim());
    }
    if let Some(deadline) = params.deadline.as_deref() {
        builder = builder.deadline(parse_date(deadline, "deadline")?);
    }
    if let Some(url) = params.url.as_deref() {
        builder = builder.url(non_blank(url));
    }
    if let Some(status) = params.status.as_deref() {
        builder = builder.status(parse_enum::<ApplicationStatus>(status, "status")?);
    }
    if let Some(tag) = params.tag.as_deref() {
        builder = builder.tag(parse_enum::<UniversityTag>(tag, "tag")?);
    }
    if let Some(fee) = params.fee {
        builder = builder.application_fee(Some(fee));
    }
    if let Some(notes) = params.notes.as_deref() {
        builder = builder.notes(non_blank(notes));
    }
    Ok(builder.build())
}

fn validate_update_params(params: &Params) -> anyhow::Result<()> {
    if params.name.is_none()
        && params.program.is_none()
        && params.location.is_none()
        && params.deadline.is_none()
        && params.url.is_none()
        && params.status.is_none()
        && params.tag.is_none()
        && params.fee.is_none()
        && params.notes.is_none()
    {
        anyhow::bail!(
            "At least one of --name, --program, --location, --deadline, --url, --status, --tag, \
             --fee, or --notes must be provided"
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;

    fn empty() -> Params {
        Params {
            id: String::from("uni-1"),
            name: None,
            program: None,
            location: None,
            deadline: None,
            url: None,
            status: None,
            tag: None,
            fee: None,
            notes: None,
        }
    }

    #[test]
    fn rejects_noop_update() {
        assert!(validate_update_params(&empty()).is_err());
    }

    #[test]
    fn status_and_deadline_are_parsed() {
        let params = Params {
            status: Some(String::from("admitted")),
            deadline: Some(String::from("2025-01-15")),
            ..empty()
        };
        assert!(validate_update_params(&params).is_ok());

        let update = build(&params).unwrap();
        assert_eq!(update.status, Some(ApplicationStatus::Admitted));
        assert_eq!(update.deadline, NaiveDate::from_ymd_opt(2025, 1, 15));
        assert_eq!(update.name, None);
    }

    #[test]
    fn empty_notes_clear_the_field() {
        let params = Params {
            notes: Some(String::new()),
            ..empty()
        };
        assert_eq!(build(&params).unwrap().notes, Some(None));
    }
}
