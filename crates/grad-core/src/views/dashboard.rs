//! Dashboard aggregates: status counts, upcoming deadlines, recent universities.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::entities::{Deadline, University};
use crate::enums::ApplicationStatus;
use crate::views::university_name;

pub const DEFAULT_UPCOMING_WINDOW_DAYS: i64 = 60;
pub const DEFAULT_DASHBOARD_LIMIT: usize = 5;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Number of universities in each status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub total: usize,
    pub researching: usize,
    pub applied: usize,
    pub admitted: usize,
    pub rejected: usize,
    pub pending: usize,
}

impl StatusCounts {
    #[must_use]
    pub fn from_universities(universities: &[University]) -> Self {
        let mut counts = Self::default();
        for university in universities {
            counts.total += 1;
            match university.status {
                ApplicationStatus::Researching => counts.researching += 1,
                ApplicationStatus::Applied => counts.applied += 1,
                ApplicationStatus::Admitted => counts.admitted += 1,
                ApplicationStatus::Rejected => counts.rejected += 1,
                ApplicationStatus::Pending => counts.pending += 1,
            }
        }
        counts
    }

    #[must_use]
    pub const fn get(&self, status: ApplicationStatus) -> usize {
        match status {
            ApplicationStatus::Researching => self.researching,
            ApplicationStatus::Applied => self.applied,
            ApplicationStatus::Admitted => self.admitted,
            ApplicationStatus::Rejected => self.rejected,
            ApplicationStatus::Pending => self.pending,
        }
    }
}

/// Whole days from `now` until midnight UTC of `date`, rounded up.
///
/// A deadline later today counts as 0, tomorrow as 1.
#[must_use]
pub fn days_until_ceil(now: DateTime<Utc>, date: NaiveDate) -> i64 {
    let target = date.and_time(chrono::NaiveTime::MIN).and_utc();
    let millis = (target - now).num_milliseconds();
    let days = millis.div_euclid(MILLIS_PER_DAY);
    if millis.rem_euclid(MILLIS_PER_DAY) == 0 {
        days
    } else {
        days + 1
    }
}

/// A deadline due soon, with the days remaining and its university name.
#[derive(Debug, Clone, Serialize)]
pub struct UpcomingDeadline {
    #[serde(flatten)]
    pub deadline: Deadline,
    pub university_name: String,
    pub days_left: i64,
}

/// Incomplete deadlines due within `1..=window_days`, earliest first.
#[must_use]
pub fn upcoming_deadlines(
    deadlines: &[Deadline],
    universities: &[University],
    now: DateTime<Utc>,
    window_days: i64,
    limit: usize,
) -> Vec<UpcomingDeadline> {
    let mut upcoming: Vec<UpcomingDeadline> = deadlines
        .iter()
        .filter(|d| !d.completed)
        .filter_map(|d| {
            let days_left = days_until_ceil(now, d.date);
            (1..=window_days).contains(&days_left).then(|| UpcomingDeadline {
                deadline: d.clone(),
                university_name: university_name(universities, &d.university_id, "Unknown")
                    .to_string(),
                days_left,
            })
        })
        .collect();
    upcoming.sort_by(|a, b| a.deadline.date.cmp(&b.deadline.date));
    upcoming.truncate(limit);
    upcoming
}

/// Most recently updated universities first.
#[must_use]
pub fn recent_universities(universities: &[University], limit: usize) -> Vec<University> {
    let mut recent = universities.to_vec();
    recent.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    recent.truncate(limit);
    recent
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub counts: StatusCounts,
    pub upcoming: Vec<UpcomingDeadline>,
    pub recent: Vec<University>,
}

impl DashboardSummary {
    #[must_use]
    pub fn build(
        universities: &[University],
        deadlines: &[Deadline],
        now: DateTime<Utc>,
        window_days: i64,
        limit: usize,
    ) -> Self {
        Self {
            counts: StatusCounts::from_universities(universities),
            upcoming: upcoming_deadlines(deadlines, universities, now, window_days, limit),
            recent: recent_universities(universities, limit),
        }
    }
}
