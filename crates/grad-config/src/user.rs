//! Active user identity.

use grad_core::identity::Owner;
use serde::{Deserialize, Serialize};

fn default_user_id() -> String {
    "local".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserConfig {
    /// Owner id every stored row is scoped to.
    #[serde(default = "default_user_id")]
    pub id: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub full_name: String,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            id: default_user_id(),
            email: String::new(),
            full_name: String::new(),
        }
    }
}

impl UserConfig {
    pub fn is_configured(&self) -> bool {
        !self.id.trim().is_empty()
    }

    pub fn owner(&self) -> Owner {
        Owner::new(self.id.trim())
    }

    pub fn email(&self) -> Option<&str> {
        Some(self.email.as_str()).filter(|e| !e.is_empty())
    }

    pub fn full_name(&self) -> Option<&str> {
        Some(self.full_name.as_str()).filter(|n| !n.is_empty())
    }
}
