use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::DocumentType;

/// An application document, optionally tied to a university.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    pub user_id: String,
    /// `None` means the document is general-purpose.
    pub university_id: Option<String>,
    pub name: String,
    pub doc_type: DocumentType,
    pub content: Option<String>,
    pub file_url: Option<String>,
    /// Revision counter, starts at 1.
    pub version: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
