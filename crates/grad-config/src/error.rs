use std::path::PathBuf;

use thiserror::Error;

/// Why gradtrack could not produce a usable [`GradConfig`](crate::GradConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A section the caller needs is blank, e.g. `user` with an empty id.
    #[error("Configuration section '{section}' is not configured (missing required fields)")]
    NotConfigured { section: String },

    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    /// A `.env` file exists but does not parse.
    #[error("Failed to load dotenv file at {}: {source}", path.display())]
    Dotenv {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}
