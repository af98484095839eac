use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The user every stored row is scoped to.
///
/// Resolved by `grad-cli` from configuration and handed to `grad-db`, which
/// adds an owner predicate to every statement it issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Owner {
    pub user_id: String,
}

impl Owner {
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}
