use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Admission requirements for one university. A zero score means "not required".
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Requirement {
    pub id: String,
    pub user_id: String,
    pub university_id: String,
    pub gre: u32,
    pub toefl: u32,
    pub gpa: f64,
    pub background: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
