//! # grad-config
//!
//! Layered configuration loading for gradtrack using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GRADTRACK_*` prefix, `__` as separator)
//! 2. Project-level `.gradtrack/config.toml`
//! 3. User-level `~/.config/gradtrack/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `GRADTRACK_AI__API_KEY` -> `ai.api_key`, `GRADTRACK_USER__ID` -> `user.id`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use grad_config::GradConfig;
//!
//! let config = GradConfig::load_with_dotenv().expect("config");
//!
//! if config.ai.is_configured() {
//!     println!("Search model: {}", config.ai.model);
//! }
//! ```

mod ai;
mod applicant;
mod database;
mod error;
mod general;
mod user;

pub use ai::{AiConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use applicant::ApplicantConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use user::UserConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix for every config key.
pub const ENV_PREFIX: &str = "GRADTRACK_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GradConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub user: UserConfig,
    #[serde(default)]
    pub applicant: ApplicantConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl GradConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load `.env` from the working directory, then the layered config.
    ///
    /// See [`Self::load_dotenv_from`] for which file wins.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from(Path::new("."))?;
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".gradtrack/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Cross-field checks that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ai.validate()?;
        if !self.user.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "user".into(),
            });
        }
        if self.general.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.default_limit".into(),
                reason: "must be greater than zero".into(),
            });
        }
        for (field, value) in [
            ("general.upcoming_window_days", self.general.upcoming_window_days),
            (
                "general.notification_window_days",
                self.general.notification_window_days,
            ),
        ] {
            if value < 0 {
                return Err(ConfigError::InvalidValue {
                    field: field.into(),
                    reason: format!("{value} is negative"),
                });
            }
        }
        Ok(())
    }

    /// Path to the user-global config file.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gradtrack").join("config.toml"))
    }

    /// Load `<dir>/.gradtrack/.env`, or `<dir>/.env` when there is no project
    /// file. Returns the file that was loaded. Variables already set in the
    /// process environment are not overwritten.
    pub fn load_dotenv_from(dir: &Path) -> Result<Option<PathBuf>, ConfigError> {
        let candidates = [dir.join(".gradtrack").join(".env"), dir.join(".env")];
        let Some(path) = candidates.into_iter().find(|p| p.is_file()) else {
            return Ok(None);
        };
        dotenvy::from_path(&path).map_err(|source| ConfigError::Dotenv {
            path: path.clone(),
            source,
        })?;
        Ok(Some(path))
    }
}
