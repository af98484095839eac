//! Chat-completion search API configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://api.perplexity.ai/chat/completions";
pub const DEFAULT_MODEL: &str = "llama-3.1-sonar-large-128k-online";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

const fn default_temperature() -> f32 {
    0.2
}

const fn default_max_tokens() -> u32 {
    4000
}

const fn default_top_p() -> f32 {
    0.9
}

const fn default_timeout_secs() -> u64 {
    60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AiConfig {
    /// Bearer token for the completion endpoint.
    #[serde(default)]
    pub api_key: String,

    /// Full URL of the chat-completions endpoint.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_top_p")]
    pub top_p: f32,

    /// Request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            top_p: default_top_p(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl AiConfig {
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Reject sampling parameters the API would refuse.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..2.0).contains(&self.temperature) {
            return Err(ConfigError::InvalidValue {
                field: "ai.temperature".into(),
                reason: format!("{} is outside [0, 2)", self.temperature),
            });
        }
        if !(self.top_p > 0.0 && self.top_p <= 1.0) {
            return Err(ConfigError::InvalidValue {
                field: "ai.top_p".into(),
                reason: format!("{} is outside (0, 1]", self.top_p),
            });
        }
        if self.max_tokens == 0 {
            return Err(ConfigError::InvalidValue {
                field: "ai.max_tokens".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}
