//! University update builder.

use chrono::NaiveDate;
use grad_core::enums::{ApplicationStatus, UniversityTag};
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct UniversityUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ApplicationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<UniversityTag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_fee: Option<Option<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
}

pub struct UniversityUpdateBuilder(UniversityUpdate);

impl UniversityUpdateBuilder {
    pub fn new() -> Self {
        Self(UniversityUpdate::default())
    }

    pub fn name(mut self, val: impl Into<String>) -> Self {
        self.0.name = Some(val.into());
        self
    }

    pub fn program_name(mut self, val: impl Into<String>) -> Self {
        self.0.program_name = Some(val.into());
        self
    }

    pub fn url(mut self, val: Option<String>) -> Self {
        self.0.url = Some(val);
        self
    }

    pub fn location(mut self, val: impl Into<String>) -> Self {
        self.0.location = Some(val.into());
        self
    }

    pub const fn deadline(mut self, val: NaiveDate) -> Self {
        self.0.deadline = Some(val);
        self
    }

    pub const fn status(mut self, val: ApplicationStatus) -> Self {
        self.0.status = Some(val);
        self
    }

    pub const fn tag(mut self, val: UniversityTag) -> Self {
        self.0.tag = Some(val);
        self
    }

    pub const fn application_fee(mut self, val: Option<i64>) -> Self {
        self.0.application_fee = Some(val);
        self
    }

    pub fn notes(mut self, val: Option<String>) -> Self {
        self.0.notes = Some(val);
        self
    }

    pub fn build(self) -> UniversityUpdate {
        self.0
    }
}

impl Default for UniversityUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
