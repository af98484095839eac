use std::fmt::Write as _;

use chrono::{Datelike, NaiveDate, Utc};
use grad_core::entities::Deadline;
use grad_core::views::calendar::{DeadlineCalendar, Week};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_date, parse_month};
use crate::context::AppContext;
use crate::output::{output, output_text};

const WEEKDAY_HEADER: &str = " Su  Mo  Tu  We  Th  Fr  Sa";

#[derive(Debug, Serialize)]
struct MonthView<'a> {
    year: i32,
    month: u32,
    weeks: Vec<Week>,
    marked_dates: Vec<&'a str>,
}

/// Handle `gradt deadline calendar`: one day's entries with `--day`, otherwise a month grid.
pub async fn run(
    month: Option<&str>,
    day: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let universities = ctx.service.list_universities(None).await?;
    let deadlines: Vec<Deadline> = ctx
        .service
        .list_deadlines(None)
        .await?
        .into_iter()
        .map(|d| d.deadline)
        .collect();
    let calendar = DeadlineCalendar::new(&deadlines);

    if let Some(day) = day {
        let date = parse_date(day, "day")?;
        return output(&calendar.entries_on(date, &universities), flags.format);
    }

    let (year, month) = match month {
        Some(raw) => parse_month(raw)?,
        None => {
            let today = Utc::now().date_naive();
            (today.year(), today.month())
        }
    };
    let weeks = calendar
        .month_grid(year, month)
        .ok_or_else(|| anyhow::anyhow!("invalid month {year}-{month:02}"))?;

    let prefix = format!("{year:04}-{month:02}-");
    let view = MonthView {
        year,
        month,
        marked_dates: calendar
            .marked_dates()
            .filter(|key| key.starts_with(&prefix))
            .collect(),
        weeks,
    };
    output_text(&view, || render_month(year, month, &view.weeks), flags.format)
}

/// Text month grid; days with deadlines carry a `*`.
fn render_month(year: i32, month: u32, weeks: &[Week]) -> String {
    let title = NaiveDate::from_ymd_opt(year, month, 1)
        .map_or_else(|| format!("{year}-{month:02}"), |d| d.format("%B %Y").to_string());

    let mut out = format!("{title:^27}\n{WEEKDAY_HEADER}\n");
    for week in weeks {
        let line: String = week
            .iter()
            .map(|cell| match cell {
                Some(cell) => format!(" {:>2}{}", cell.date.day(), if cell.marked { '*' } else { ' ' }),
                None => String::from("    "),
            })
            .collect();
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out.trim_end().to_string()
}
