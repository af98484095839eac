use std::collections::HashMap;

use grad_core::entities::{Deadline, DeadlineWithUniversity};
use grad_core::enums::DeadlineType;
use grad_core::views::filter::DeadlineQuery;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub struct Params<'a> {
    pub university: Option<&'a str>,
    pub deadline_type: Option<&'a str>,
    pub completed: Option<bool>,
    pub search: Option<&'a str>,
}

pub async fn run(params: Params<'_>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let query = DeadlineQuery {
        university_id: params.university.map(String::from),
        deadline_type: params
            .deadline_type
            .map(|t| parse_enum::<DeadlineType>(t, "type"))
            .transpose()?,
        completed: params.completed,
        search: params.search.map(String::from),
    };

    let joined = ctx.service.list_deadlines(None).await?;
    let mut rows = filter_joined(&joined, &query);
    rows.truncate(usize::try_from(ctx.limit(flags.limit))?);
    output(&rows, flags.format)
}

/// Run the query over plain deadlines, keeping the joined university names.
fn filter_joined<'a>(
    joined: &'a [DeadlineWithUniversity],
    query: &DeadlineQuery,
) -> Vec<&'a DeadlineWithUniversity> {
    let deadlines: Vec<Deadline> = joined.iter().map(|j| j.deadline.clone()).collect();
    let by_id: HashMap<&str, &DeadlineWithUniversity> = joined
        .iter()
        .map(|j| (j.deadline.id.as_str(), j))
        .collect();

    query
        .apply(&deadlines)
        .into_iter()
        .filter_map(|d| by_id.get(d.id.as_str()).copied())
        .collect()
}
