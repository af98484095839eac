use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Post-graduation outcome data for one university.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PostGradInfo {
    pub id: String,
    pub user_id: String,
    pub university_id: String,
    pub opt_eligible: bool,
    pub stem_designated: bool,
    pub h1b_sponsorship: bool,
    pub average_salary: i64,
    pub top_employers: Vec<String>,
    /// Percentage of graduates placed, 0-100.
    pub job_placement_rate: f64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
