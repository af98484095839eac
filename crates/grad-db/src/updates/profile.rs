//! Profile update builder.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<Option<String>>,
}

pub struct ProfileUpdateBuilder(ProfileUpdate);

impl ProfileUpdateBuilder {
    pub fn new() -> Self {
        Self(ProfileUpdate::default())
    }

    pub fn email(mut self, val: Option<String>) -> Self {
        self.0.email = Some(val);
        self
    }

    pub fn full_name(mut self, val: Option<String>) -> Self {
        self.0.full_name = Some(val);
        self
    }

    pub fn build(self) -> ProfileUpdate {
        self.0
    }
}

impl Default for ProfileUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
