use anyhow::Context;
use grad_config::GradConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, then the layered config, then apply flag overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<GradConfig> {
    let mut config =
        GradConfig::load_with_dotenv().context("failed to load gradtrack configuration")?;
    apply_flag_overrides(&mut config, flags);
    Ok(config)
}

fn apply_flag_overrides(config: &mut GradConfig, flags: &GlobalFlags) {
    if let Some(db) = &flags.db {
        config.database.path = db.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn flags(db: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            limit: None,
            quiet: false,
            verbose: false,
            db: db.map(String::from),
        }
    }

    #[test]
    fn db_flag_overrides_configured_path() {
        let mut config = GradConfig::default();
        config.database.path = "/var/lib/gradtrack.db".into();

        apply_flag_overrides(&mut config, &flags(Some(":memory:")));
        assert_eq!(config.database.path, ":memory:");
    }

    #[test]
    fn no_db_flag_keeps_config() {
        let mut config = GradConfig::default();
        config.database.path = "/var/lib/gradtrack.db".into();

        apply_flag_overrides(&mut config, &flags(None));
        assert_eq!(config.database.path, "/var/lib/gradtrack.db");
    }
}
