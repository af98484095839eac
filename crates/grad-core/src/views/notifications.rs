//! Notices derived from stored deadlines, universities, and documents.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::{Deadline, Document, University};
use crate::enums::ApplicationStatus;
use crate::views::university_name;

pub const DEFAULT_NOTIFICATION_WINDOW_DAYS: i64 = 7;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Priority for a deadline `days_left` days away.
    #[must_use]
    pub const fn for_days_left(days_left: i64) -> Self {
        if days_left <= 1 {
            Self::High
        } else if days_left <= 3 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Deadline,
    Status,
    Document,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Notification {
    pub kind: NotificationKind,
    pub priority: Priority,
    pub title: String,
    pub message: String,
    /// Id of the record the notice is about.
    pub subject_id: String,
}

fn plural_days(days: i64) -> &'static str {
    if days == 1 { "day" } else { "days" }
}

/// Build notices, highest priority first. Ties keep generation order
/// (deadlines, then statuses, then documents).
#[must_use]
pub fn build_notifications(
    deadlines: &[Deadline],
    universities: &[University],
    documents: &[Document],
    now: DateTime<Utc>,
    window_days: i64,
) -> Vec<Notification> {
    let today = now.date_naive();
    let mut notices = Vec::new();

    for deadline in deadlines.iter().filter(|d| !d.completed) {
        let days_left = (deadline.date - today).num_days();
        if !(0..=window_days).contains(&days_left) {
            continue;
        }
        let uni = university_name(universities, &deadline.university_id, "Unknown");
        notices.push(Notification {
            kind: NotificationKind::Deadline,
            priority: Priority::for_days_left(days_left),
            title: "Upcoming Deadline".to_string(),
            message: format!(
                "{} for {uni} is due in {days_left} {}",
                deadline.title,
                plural_days(days_left)
            ),
            subject_id: deadline.id.clone(),
        });
    }

    for university in universities
        .iter()
        .filter(|u| u.status == ApplicationStatus::Applied)
    {
        notices.push(Notification {
            kind: NotificationKind::Status,
            priority: Priority::Low,
            title: "Application Submitted".to_string(),
            message: format!(
                "Your application to {} ({}) is awaiting a decision",
                university.name, university.program_name
            ),
            subject_id: university.id.clone(),
        });
    }

    for document in documents
        .iter()
        .filter(|d| d.content.is_none() && d.file_url.is_none())
    {
        notices.push(Notification {
            kind: NotificationKind::Document,
            priority: Priority::Medium,
            title: "Document Incomplete".to_string(),
            message: format!("{} has no content or attached file", document.name),
            subject_id: document.id.clone(),
        });
    }

    notices.sort_by(|a, b| b.priority.cmp(&a.priority));
    notices
}
