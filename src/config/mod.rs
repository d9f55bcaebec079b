use std::path::{Path, PathBuf};
use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use crate::error::BotError;
use crate::progress::DayBoundary;
use crate::review::ReviewPolicy;

pub const ENV_TELEGRAM_TOKEN: &str = "VOCABOT_TELEGRAM_TOKEN";
pub const ENV_GENERATOR_URL: &str = "VOCABOT_GENERATOR_URL";
pub const ENV_GENERATOR_MODEL: &str = "VOCABOT_GENERATOR_MODEL";
pub const ENV_DATA_DIR: &str = "VOCABOT_DATA_DIR";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    pub generator: GeneratorConfig,
    pub course: CourseConfig,
    pub schedule: ScheduleConfig,
    pub storage: StorageConfig,
    pub review: ReviewPolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TelegramConfig {
    pub api_base: String,
    /// Usually supplied through VOCABOT_TELEGRAM_TOKEN instead of the file.
    pub token: String,
    pub poll_timeout_secs: u64,
    /// Learners allowed to use /setstart.
    pub admin_ids: Vec<String>,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        TelegramConfig {
            api_base: "https://api.telegram.org".to_string(),
            token: String::new(),
            poll_timeout_secs: 30,
            admin_ids: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub endpoint: String,
    pub model: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub timeout_secs: u64,
    pub max_retries: u32,
    pub circuit_failure_threshold: u32,
    pub circuit_cooldown_secs: u64,
    pub cache_capacity: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            endpoint: "http://localhost:11434/api/generate".to_string(),
            model: "qwen2.5:7b-instruct".to_string(),
            temperature: 0.7,
            max_output_tokens: 1024,
            timeout_secs: 60,
            max_retries: 2,
            circuit_failure_threshold: 3,
            circuit_cooldown_secs: 120,
            cache_capacity: 200,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseConfig {
    pub source_language: String,
    pub target_language: String,
    pub day_boundary: DayBoundary,
    /// TOML curriculum; the built-in one is used when unset.
    pub curriculum_path: Option<PathBuf>,
}

impl Default for CourseConfig {
    fn default() -> Self {
        CourseConfig {
            source_language: "English".to_string(),
            target_language: "Spanish".to_string(),
            day_boundary: DayBoundary::Calendar,
            curriculum_path: None,
        }
    }
}

/// Broadcast times, all UTC, as "HH:MM".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    pub morning_lesson: String,
    pub evening_review: String,
    pub practice_prompt: String,
    pub weekly_summary: String,
    pub weekly_summary_day: String,
    pub inter_learner_delay_ms: u64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        ScheduleConfig {
            morning_lesson: "08:00".to_string(),
            evening_review: "20:00".to_string(),
            practice_prompt: "21:00".to_string(),
            weekly_summary: "19:00".to_string(),
            weekly_summary_day: "Sun".to_string(),
            inter_learner_delay_ms: 500,
        }
    }
}

pub fn parse_time(value: &str) -> Result<NaiveTime, BotError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|e| BotError::new(
        format!("Invalid time '{}': {}", value, e),
        "config"
    ).with_context("expected HH:MM"))
}

impl ScheduleConfig {
    pub fn summary_weekday(&self) -> Result<Weekday, BotError> {
        self.weekly_summary_day
            .trim()
            .parse::<Weekday>()
            .map_err(|_| BotError::new(
                format!("Invalid weekday '{}'", self.weekly_summary_day),
                "config"
            ))
    }

    fn validate(&self) -> Result<(), BotError> {
        for time in [
            &self.morning_lesson,
            &self.evening_review,
            &self.practice_prompt,
            &self.weekly_summary,
        ] {
            parse_time(time)?;
        }
        self.summary_weekday()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    #[default]
    Json,
    Memory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            backend: StorageBackend::Json,
            data_dir: PathBuf::from("data"),
        }
    }
}

impl BotConfig {
    /// Parse TOML and validate. Environment overrides are not applied here.
    pub fn from_toml_str(content: &str) -> Result<Self, BotError> {
        let config: BotConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` (defaults when absent), then apply environment overrides.
    pub async fn load(path: Option<&Path>) -> Result<Self, BotError> {
        let mut config = match path {
            Some(path) => {
                let content = tokio::fs::read_to_string(path)
                    .await
                    .map_err(|e| BotError::new(
                        format!("Failed to read config: {}", e),
                        "io"
                    ).with_context(format!("path: {:?}", path)))?;
                let config = Self::from_toml_str(&content)?;
                tracing::info!(path = ?path, "Loaded config");
                config
            }
            None => {
                tracing::info!("No config file given, using defaults");
                BotConfig::default()
            }
        };
        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup (std::env in production).
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup(ENV_TELEGRAM_TOKEN) {
            self.telegram.token = token;
        }
        if let Some(url) = lookup(ENV_GENERATOR_URL) {
            self.generator.endpoint = url;
        }
        if let Some(model) = lookup(ENV_GENERATOR_MODEL) {
            self.generator.model = model;
        }
        if let Some(dir) = lookup(ENV_DATA_DIR) {
            self.storage.data_dir = PathBuf::from(dir);
        }
    }

    fn validate(&self) -> Result<(), BotError> {
        self.schedule.validate()?;
        if self.review.session_cap == 0 || self.review.window_weeks == 0 {
            return Err(BotError::new(
                "review.session_cap and review.window_weeks must be positive",
                "config"
            ));
        }
        if !(0.0..=2.0).contains(&self.generator.temperature) {
            return Err(BotError::new(
                format!("generator.temperature {} out of range 0..=2", self.generator.temperature),
                "config"
            ));
        }
        Ok(())
    }

    pub fn is_admin(&self, learner_id: &str) -> bool {
        self.telegram.admin_ids.iter().any(|id| id == learner_id)
    }
}
