use grad_core::enums::{ApplicationStatus, UniversityTag};
use grad_db::repos::NewUniversity;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_date, parse_enum};
use crate::context::AppContext;
use crate::output::output;

pub struct Params<'a> {
    pub name: &'a str,
    pub program: &'a str,
    pub location: &'a str,
    pub deadline: &'a str,
    pub url: Option<&'a str>,
    pub status: Option<&'a str>,
    pub tag: Option<&'a str>,
    pub fee: Option<i64>,
    pub notes: Option<&'a str>,
}

pub async fn run(params: Params<'_>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let new = build(&params)?;
    let university = ctx.service.create_university(&new).await?;
    output(&university, flags.format)
}

fn build(params: &Params<'_>) -> anyhow::Result<NewUniversity> {
    Ok(NewUniversity {
        name: params.name.trim().to_string(),
        program_name: params.program.trim().to_string(),
        url: params.url.map(String::from),
        location: params.location.trim().to_string(),
        deadline: parse_date(params.deadline, "deadline")?,
        status: params
            .status
            .map(|s| parse_enum::<ApplicationStatus>(s, "status"))
            .transpose()?
            .unwrap_or_default(),
        tag: params
            .tag
            .map(|t| parse_enum::<UniversityTag>(t, "tag"))
            .transpose()?
            .unwrap_or_default(),
        application_fee: params.fee,
        notes: params.notes.map(String::from),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn params<'a>(status: Option<&'a str>, tag: Option<&'a str>) -> Params<'a> {
        Params {
            name: " Carnegie Mellon University ",
            program: "MS Machine Learning",
            location: "Pittsburgh, PA",
            deadline: "2024-12-10",
            url: None,
            status,
            tag,
            fee: Some(90),
            notes: None,
        }
    }

    #[test]
    fn defaults_to_researching_target() {
        let new = build(&params(None, None)).unwrap();
        assert_eq!(new.name, "Carnegie Mellon University");
        assert_eq!(new.status, ApplicationStatus::Researching);
        assert_eq!(new.tag, UniversityTag::Target);
        assert_eq!(new.application_fee, Some(90));
    }

    #[test]
    fn rejects_unknown_tag() {
        let err = build(&params(Some("applied"), Some("dream"))).unwrap_err();
        assert!(err.to_string().contains("invalid tag 'dream'"));
    }
}
