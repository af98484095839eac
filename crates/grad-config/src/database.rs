//! Local store configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to the libSQL database file. Empty means the platform data dir.
    #[serde(default)]
    pub path: String,
}

impl DatabaseConfig {
    /// Whether an explicit path was set.
    pub fn is_configured(&self) -> bool {
        !self.path.is_empty()
    }

    /// Database file to open: the explicit path, or
    /// `<data_dir>/gradtrack/gradtrack.db`.
    pub fn resolved_path(&self) -> Result<PathBuf, ConfigError> {
        if self.is_configured() {
            return Ok(PathBuf::from(&self.path));
        }
        dirs::data_dir()
            .map(|dir| dir.join("gradtrack").join("gradtrack.db"))
            .ok_or_else(|| ConfigError::NotConfigured {
                section: "database".into(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let config = DatabaseConfig {
            path: "/tmp/grad.db".into(),
        };
        assert!(config.is_configured());
        assert_eq!(config.resolved_path().unwrap(), PathBuf::from("/tmp/grad.db"));
    }

    #[test]
    fn default_path_lives_under_data_dir() {
        let config = DatabaseConfig::default();
        assert!(!config.is_configured());
        if let Ok(path) = config.resolved_path() {
            assert!(path.ends_with("gradtrack/gradtrack.db"));
        }
    }
}
