#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::config::{
        parse_time, BotConfig, StorageBackend, ENV_DATA_DIR, ENV_GENERATOR_MODEL, ENV_TELEGRAM_TOKEN,
    };
    use crate::progress::DayBoundary;
    use chrono::{NaiveTime, Weekday};

    #[test]
    fn test_defaults() {
        let config = BotConfig::default();
        assert_eq!(config.schedule.morning_lesson, "08:00");
        assert_eq!(config.schedule.summary_weekday().unwrap(), Weekday::Sun);
        assert_eq!(config.course.day_boundary, DayBoundary::Calendar);
        assert_eq!(config.review.window_weeks, 4);
        assert_eq!(config.review.session_cap, 20);
        assert_eq!(config.storage.backend, StorageBackend::Json);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = BotConfig::from_toml_str(
            r#"
            [course]
            target_language = "French"
            day_boundary = "rolling"

            [review]
            session_cap = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.course.target_language, "French");
        assert_eq!(config.course.source_language, "English");
        assert_eq!(config.course.day_boundary, DayBoundary::Rolling);
        assert_eq!(config.review.session_cap, 10);
        assert_eq!(config.review.window_weeks, 4);
        assert_eq!(config.schedule.evening_review, "20:00");
    }

    #[test]
    fn test_invalid_time_rejected() {
        let err = BotConfig::from_toml_str("[schedule]\nmorning_lesson = \"8am\"\n").unwrap_err();
        assert_eq!(err.stage, "config");
    }

    #[test]
    fn test_invalid_weekday_rejected() {
        assert!(BotConfig::from_toml_str("[schedule]\nweekly_summary_day = \"Funday\"\n").is_err());
    }

    #[test]
    fn test_zero_review_cap_rejected() {
        assert!(BotConfig::from_toml_str("[review]\nsession_cap = 0\n").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            (ENV_TELEGRAM_TOKEN, "secret"),
            (ENV_GENERATOR_MODEL, "llama3"),
            (ENV_DATA_DIR, "/var/lib/vocabot"),
        ]
        .into_iter()
        .collect();

        let mut config = BotConfig::default();
        config.apply_env(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.telegram.token, "secret");
        assert_eq!(config.generator.model, "llama3");
        assert_eq!(config.storage.data_dir, std::path::PathBuf::from("/var/lib/vocabot"));
        assert_eq!(config.generator.endpoint, "http://localhost:11434/api/generate");
    }

    #[test]
    fn test_admin_ids() {
        let config = BotConfig::from_toml_str("[telegram]\nadmin_ids = [\"7\"]\n").unwrap();
        assert!(config.is_admin("7"));
        assert!(!config.is_admin("8"));
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time(" 21:00 ").unwrap(), NaiveTime::from_hms_opt(21, 0, 0).unwrap());
        assert!(parse_time("25:00").is_err());
    }
}
