//! Deadline update builder.

use chrono::NaiveDate;
use grad_core::enums::DeadlineType;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct DeadlineUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub university_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline_type: Option<DeadlineType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
}

pub struct DeadlineUpdateBuilder(DeadlineUpdate);

impl DeadlineUpdateBuilder {
    pub fn new() -> Self {
        Self(DeadlineUpdate::default())
    }

    pub fn university_id(mut self, val: impl Into<String>) -> Self {
        self.0.university_id = Some(val.into());
        self
    }

    pub fn title(mut self, val: impl Into<String>) -> Self {
        self.0.title = Some(val.into());
        self
    }

    pub const fn date(mut self, val: NaiveDate) -> Self {
        self.0.date = Some(val);
        self
    }

    pub const fn deadline_type(mut self, val: DeadlineType) -> Self {
        self.0.deadline_type = Some(val);
        self
    }

    pub const fn completed(mut self, val: bool) -> Self {
        self.0.completed = Some(val);
        self
    }

    pub fn notes(mut self, val: Option<String>) -> Self {
        self.0.notes = Some(val);
        self
    }

    pub fn build(self) -> DeadlineUpdate {
        self.0
    }
}

impl Default for DeadlineUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
