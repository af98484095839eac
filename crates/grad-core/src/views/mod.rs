//! Pure view logic over records that have already been fetched in full.
//!
//! Nothing here touches the store; every function takes slices and returns
//! owned or borrowed results for the CLI to render.

pub mod calendar;
pub mod dashboard;
pub mod documents;
pub mod filter;
pub mod notifications;
pub mod post_grad;
pub mod requirements;
pub mod timeline;

use crate::entities::University;

/// Look up a university's name by id, with a fallback label for dangling ids.
#[must_use]
pub fn university_name<'a>(universities: &'a [University], id: &str, fallback: &'a str) -> &'a str {
    universities
        .iter()
        .find(|u| u.id == id)
        .map_or(fallback, |u| u.name.as_str())
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};

    use crate::entities::{Deadline, Document, University};
    use crate::enums::{ApplicationStatus, DeadlineType, DocumentType, UniversityTag};

    pub fn ts(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    pub fn university(id: &str, name: &str, location: &str, deadline: NaiveDate) -> University {
        University {
            id: id.into(),
            user_id: "usr".into(),
            name: name.into(),
            program_name: "MS Computer Science".into(),
            url: None,
            location: location.into(),
            deadline,
            status: ApplicationStatus::Researching,
            tag: UniversityTag::Target,
            application_fee: None,
            notes: None,
            created_at: ts(2024, 9, 1),
            updated_at: ts(2024, 9, 1),
        }
    }

    pub fn deadline(id: &str, university_id: &str, title: &str, on: NaiveDate) -> Deadline {
        Deadline {
            id: id.into(),
            user_id: "usr".into(),
            university_id: university_id.into(),
            title: title.into(),
            date: on,
            deadline_type: DeadlineType::Application,
            completed: false,
            notes: None,
            created_at: ts(2024, 9, 1),
            updated_at: ts(2024, 9, 1),
        }
    }

    pub fn document(id: &str, university_id: Option<&str>, name: &str) -> Document {
        Document {
            id: id.into(),
            user_id: "usr".into(),
            university_id: university_id.map(String::from),
            name: name.into(),
            doc_type: DocumentType::Sop,
            content: None,
            file_url: None,
            version: 1,
            created_at: ts(2024, 9, 1),
            updated_at: ts(2024, 9, 1),
        }
    }
}
