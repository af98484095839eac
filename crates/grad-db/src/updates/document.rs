//! Document update builder.

use grad_core::enums::DocumentType;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct DocumentUpdate {
    /// `Some(None)` detaches the document, making it general.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub university_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_type: Option<DocumentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<Option<String>>,
    /// Increment `version` if content or file changes.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub bump_version: bool,
}

impl DocumentUpdate {
    /// Whether this update touches the document body.
    #[must_use]
    pub const fn changes_body(&self) -> bool {
        self.content.is_some() || self.file_url.is_some()
    }
}

pub struct DocumentUpdateBuilder(DocumentUpdate);

impl DocumentUpdateBuilder {
    pub fn new() -> Self {
        Self(DocumentUpdate::default())
    }

    pub fn university_id(mut self, val: Option<String>) -> Self {
        self.0.university_id = Some(val);
        self
    }

    pub fn name(mut self, val: impl Into<String>) -> Self {
        self.0.name = Some(val.into());
        self
    }

    pub const fn doc_type(mut self, val: DocumentType) -> Self {
        self.0.doc_type = Some(val);
        self
    }

    pub fn content(mut self, val: Option<String>) -> Self {
        self.0.content = Some(val);
        self
    }

    pub fn file_url(mut self, val: Option<String>) -> Self {
        self.0.file_url = Some(val);
        self
    }

    pub const fn bump_version(mut self, val: bool) -> Self {
        self.0.bump_version = val;
        self
    }

    pub fn build(self) -> DocumentUpdate {
        self.0
    }
}

impl Default for DocumentUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
