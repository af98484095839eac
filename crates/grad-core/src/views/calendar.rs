//! Deadline calendar: per-day buckets and a month grid.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::entities::{Deadline, University};
use crate::views::university_name;

/// Label used when a deadline points at a university that is not loaded.
pub const UNKNOWN_UNIVERSITY: &str = "Unknown";

/// Bucket key for a date, `YYYY-MM-DD`.
#[must_use]
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Group items by the date `key` extracts. Insertion order is kept within a bucket.
pub fn bucket_by_date<'a, T, F>(items: &'a [T], key: F) -> BTreeMap<String, Vec<&'a T>>
where
    F: Fn(&T) -> NaiveDate,
{
    let mut buckets: BTreeMap<String, Vec<&T>> = BTreeMap::new();
    for item in items {
        buckets.entry(date_key(key(item))).or_default().push(item);
    }
    buckets
}

/// One cell of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    /// At least one deadline falls on this day.
    pub marked: bool,
}

/// A Sunday-first week; `None` pads days outside the month.
pub type Week = [Option<DayCell>; 7];

/// A selected day's deadline with its university label.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarEntry<'a> {
    #[serde(flatten)]
    pub deadline: &'a Deadline,
    pub university_name: &'a str,
}

/// Deadlines indexed by day.
#[derive(Debug)]
pub struct DeadlineCalendar<'a> {
    buckets: BTreeMap<String, Vec<&'a Deadline>>,
}

impl<'a> DeadlineCalendar<'a> {
    #[must_use]
    pub fn new(deadlines: &'a [Deadline]) -> Self {
        Self {
            buckets: bucket_by_date(deadlines, |d| d.date),
        }
    }

    #[must_use]
    pub fn has_marker(&self, date: NaiveDate) -> bool {
        self.buckets
            .get(&date_key(date))
            .is_some_and(|bucket| !bucket.is_empty())
    }

    #[must_use]
    pub fn deadlines_on(&self, date: NaiveDate) -> &[&'a Deadline] {
        self.buckets
            .get(&date_key(date))
            .map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn entries_on(
        &self,
        date: NaiveDate,
        universities: &'a [University],
    ) -> Vec<CalendarEntry<'a>> {
        self.deadlines_on(date)
            .iter()
            .map(|deadline| CalendarEntry {
                deadline,
                university_name: university_name(
                    universities,
                    &deadline.university_id,
                    UNKNOWN_UNIVERSITY,
                ),
            })
            .collect()
    }

    /// Weeks of the given month, Sunday first. `None` for an invalid month.
    #[must_use]
    pub fn month_grid(&self, year: i32, month: u32) -> Option<Vec<Week>> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let lead = first.weekday().num_days_from_sunday() as usize;

        let mut weeks = Vec::new();
        let mut week: Week = [None; 7];
        let mut slot = lead;

        // `iter_days` ends at `NaiveDate::MAX` instead of overflowing.
        for day in first.iter_days().take_while(|d| d.month() == month) {
            week[slot] = Some(DayCell {
                date: day,
                marked: self.has_marker(day),
            });
            slot += 1;
            if slot == 7 {
                weeks.push(week);
                week = [None; 7];
                slot = 0;
            }
        }
        if slot > 0 {
            weeks.push(week);
        }
        Some(weeks)
    }

    /// Dates with at least one deadline, ascending.
    pub fn marked_dates(&self) -> impl Iterator<Item = &str> {
        self.buckets
            .iter()
            .filter(|(_, bucket)| !bucket.is_empty())
            .map(|(key, _)| key.as_str())
    }
}
