use std::path::PathBuf;

use anyhow::Context;
use grad_ai::AiClient;
use grad_config::GradConfig;
use grad_db::service::GradService;

const MEMORY_PATH: &str = ":memory:";

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: GradService,
    pub config: GradConfig,
    pub db_path: PathBuf,
}

impl AppContext {
    /// Open the store for the configured owner, creating its directory if needed.
    pub async fn init(config: GradConfig) -> anyhow::Result<Self> {
        let db_path = config
            .database
            .resolved_path()
            .context("failed to resolve database path")?;

        if db_path.as_os_str() != MEMORY_PATH {
            if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create data directory {}", parent.display())
                })?;
            }
        }

        let service = GradService::new_local(&db_path.to_string_lossy(), config.user.owner())
            .await
            .with_context(|| format!("failed to open database at {}", db_path.display()))?;

        tracing::debug!(path = %db_path.display(), user = %config.user.id, "app context ready");
        Ok(Self {
            service,
            config,
            db_path,
        })
    }

    /// Build the AI client on demand; only `gradt ai` needs credentials.
    pub fn ai_client(&self) -> anyhow::Result<AiClient> {
        AiClient::from_config(&self.config.ai).context(
            "AI search is not configured. Set GRADTRACK_AI__API_KEY or ai.api_key in config.toml",
        )
    }

    /// Listing limit: explicit flag, then `general.default_limit`.
    pub fn limit(&self, flag: Option<u32>) -> u32 {
        flag.unwrap_or(self.config.general.default_limit)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn memory_config() -> GradConfig {
        let mut config = GradConfig::default();
        config.database.path = MEMORY_PATH.into();
        config
    }

    #[tokio::test]
    async fn init_opens_in_memory_store() {
        let ctx = AppContext::init(memory_config()).await.unwrap();
        assert_eq!(ctx.db_path, PathBuf::from(MEMORY_PATH));
        assert_eq!(ctx.service.owner().user_id, "local");
    }

    #[tokio::test]
    async fn init_creates_missing_data_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("gradtrack.db");
        let mut config = GradConfig::default();
        config.database.path = path.to_string_lossy().into_owned();

        let ctx = AppContext::init(config).await.unwrap();
        assert!(path.parent().unwrap().is_dir());
        assert_eq!(ctx.db_path, path);
    }

    #[tokio::test]
    async fn ai_client_requires_api_key() {
        let ctx = AppContext::init(memory_config()).await.unwrap();
        let err = ctx.ai_client().err().unwrap();
        assert!(format!("{err:#}").contains("GRADTRACK_AI__API_KEY"));
    }

    #[tokio::test]
    async fn limit_falls_back_to_config() {
        let mut config = memory_config();
        config.general.default_limit = 7;
        let ctx = AppContext::init(config).await.unwrap();
        assert_eq!(ctx.limit(None), 7);
        assert_eq!(ctx.limit(Some(3)), 3);
    }
}
