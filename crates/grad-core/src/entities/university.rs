use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ApplicationStatus, UniversityTag};

/// A university program on the user's application list.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct University {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub program_name: String,
    pub url: Option<String>,
    pub location: String,
    /// Main application deadline for the program.
    pub deadline: NaiveDate,
    pub status: ApplicationStatus,
    pub tag: UniversityTag,
    /// Application fee in whole currency units.
    pub application_fee: Option<i64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
