use grad_config::GradConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &GradConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &GradConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let sections = [
        ("AI", "GRADTRACK_AI_", config.ai.is_configured(), "GRADTRACK_AI__API_KEY"),
        (
            "Database",
            "GRADTRACK_DATABASE_",
            config.database.is_configured(),
            "GRADTRACK_DATABASE__PATH",
        ),
        (
            "Applicant",
            "GRADTRACK_APPLICANT_",
            config.applicant.is_configured(),
            "GRADTRACK_APPLICANT__GRE",
        ),
    ];

    sections
        .into_iter()
        .filter(|(_, prefix, configured, _)| !configured && has_single_underscore_key(&env_keys, prefix))
        .map(|(label, prefix, _, example)| {
            format!(
                "{label} config appears default while {prefix}* env vars exist. \
                 Use double underscores (example: {example})."
            )
        })
        .collect()
}

/// A key under `prefix` that is not the `__`-separated form.
fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    keys.iter()
        .any(|key| key.starts_with(prefix) && !key[prefix.len()..].starts_with('_'))
}

#[cfg(test)]
mod tests {
    use grad_config::{AiConfig, GradConfig};

    use super::collect_unconfigured_warnings;

    fn env(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn warns_for_single_underscore_keys() {
        let config = GradConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            env(&[
                ("GRADTRACK_AI_API_KEY", "pplx-123"),
                ("GRADTRACK_DATABASE_PATH", "/tmp/g.db"),
                ("GRADTRACK_APPLICANT_GRE", "320"),
            ]),
        );
        assert_eq!(warnings.len(), 3);
        assert!(warnings[0].contains("GRADTRACK_AI__API_KEY"));
    }

    #[test]
    fn double_underscore_keys_do_not_warn() {
        let config = GradConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            env(&[("GRADTRACK_AI__MODEL", "sonar"), ("GRADTRACK_LOG", "debug")]),
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn configured_sections_do_not_warn() {
        let config = GradConfig {
            ai: AiConfig {
                api_key: "pplx-123".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        let warnings =
            collect_unconfigured_warnings(&config, env(&[("GRADTRACK_AI_API_KEY", "pplx-123")]));
        assert!(warnings.is_empty());
    }
}
