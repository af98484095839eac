use grad_core::enums::{ApplicationStatus, UniversityTag};
use grad_core::views::filter::{SortKey, SortOrder, SortState, UniversityQuery};

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub struct Params<'a> {
    pub search: Option<&'a str>,
    pub status: Option<&'a str>,
    pub tag: Option<&'a str>,
    pub location: Option<&'a str>,
    pub sort: Option<&'a str>,
    pub desc: bool,
}

/// Filters and sorting run over the full list, then the limit applies.
pub async fn run(params: Params<'_>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let query = build_query(&params)?;
    let universities = ctx.service.list_universities(None).await?;

    let mut matched = query.apply(&universities);
    matched.truncate(usize::try_from(ctx.limit(flags.limit))?);
    output(&matched, flags.format)
}

fn build_query(params: &Params<'_>) -> anyhow::Result<UniversityQuery> {
    let key = params
        .sort
        .map(|s| parse_enum::<SortKey>(s, "sort"))
        .transpose()?
        .unwrap_or(SortKey::Deadline);
    let order = if params.desc {
        SortOrder::Desc
    } else {
        SortOrder::Asc
    };

    Ok(UniversityQuery {
        search: params.search.map(String::from),
        status: params
            .status
            .map(|s| parse_enum::<ApplicationStatus>(s, "status"))
            .transpose()?,
        tag: params
            .tag
            .map(|t| parse_enum::<UniversityTag>(t, "tag"))
            .transpose()?,
        location: params.location.map(String::from),
        sort: SortState::new(key, order),
    })
}
