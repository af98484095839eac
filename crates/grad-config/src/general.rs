//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

const fn default_upcoming_window_days() -> i64 {
    60
}

const fn default_notification_window_days() -> i64 {
    7
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// How far ahead the dashboard looks for upcoming deadlines.
    #[serde(default = "default_upcoming_window_days")]
    pub upcoming_window_days: i64,

    /// How far ahead deadline notifications are raised.
    #[serde(default = "default_notification_window_days")]
    pub notification_window_days: i64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            upcoming_window_days: default_upcoming_window_days(),
            notification_window_days: default_notification_window_days(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_limit, 20);
        assert_eq!(config.upcoming_window_days, 60);
        assert_eq!(config.notification_window_days, 7);
    }
}
