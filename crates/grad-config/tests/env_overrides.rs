use figment::Jail;
use grad_config::{ConfigError, GradConfig};

#[test]
fn env_vars_fill_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("GRADTRACK_AI__API_KEY", "pplx-env");
        jail.set_env("GRADTRACK_USER__ID", "grace");
        jail.set_env("GRADTRACK_APPLICANT__TOEFL", "110");
        jail.set_env("GRADTRACK_GENERAL__NOTIFICATION_WINDOW_DAYS", "14");

        let config = GradConfig::load().expect("config loads");
        assert_eq!(config.ai.api_key, "pplx-env");
        assert_eq!(config.user.id, "grace");
        assert_eq!(config.applicant.toefl, Some(110));
        assert_eq!(config.general.notification_window_days, 14);
        Ok(())
    });
}

#[test]
fn single_underscore_is_not_a_section_separator() {
    Jail::expect_with(|jail| {
        jail.set_env("GRADTRACK_AI_API_KEY", "pplx-typo");

        let config = GradConfig::load().expect("config loads");
        assert!(!config.ai.is_configured());
        Ok(())
    });
}

#[test]
fn invalid_values_fail_load() {
    Jail::expect_with(|jail| {
        jail.set_env("GRADTRACK_AI__TOP_P", "0");

        let err = GradConfig::load().expect_err("top_p of zero is rejected");
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}

#[test]
fn malformed_values_surface_figment_errors() {
    Jail::expect_with(|jail| {
        jail.set_env("GRADTRACK_GENERAL__DEFAULT_LIMIT", "lots");

        let err = GradConfig::load().expect_err("non-numeric limit");
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
