use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::DeadlineType;

/// A dated task tied to one university.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Deadline {
    pub id: String,
    pub user_id: String,
    pub university_id: String,
    pub title: String,
    pub date: NaiveDate,
    pub deadline_type: DeadlineType,
    pub completed: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A deadline joined with the name of the university it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeadlineWithUniversity {
    #[serde(flatten)]
    pub deadline: Deadline,
    pub university_name: String,
    pub program_name: String,
}
