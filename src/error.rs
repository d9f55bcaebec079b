use serde::{Serialize, Deserialize};
use std::fmt;

/// Unified error type for the bot.
/// Storage, messaging and broadcast code return Result<T, BotError>.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotError {
    pub message: String,
    pub stage: String,
    pub learner: Option<String>,
    pub context: Option<String>,
    pub source: Option<String>,
}

impl BotError {
    /// Create a new error with stage and message
    pub fn new<S: Into<String>>(message: S, stage: &'static str) -> Self {
        BotError {
            message: message.into(),
            stage: stage.to_string(),
            learner: None,
            context: None,
            source: None,
        }
    }

    /// Attach the learner the failing step was working for
    pub fn with_learner<S: Into<String>>(mut self, learner: S) -> Self {
        self.learner = Some(learner.into());
        self
    }

    /// Add additional context information
    pub fn with_context<S: Into<String>>(mut self, context: S) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Add source error information
    pub fn with_source<S: Into<String>>(mut self, source: S) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl fmt::Display for BotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.stage, self.message)?;
        if let Some(ref learner) = self.learner {
            write!(f, " (learner: {})", learner)?;
        }
        if let Some(ref context) = self.context {
            write!(f, " (context: {})", context)?;
        }
        if let Some(ref source) = self.source {
            write!(f, " (source: {})", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for BotError {}

impl From<anyhow::Error> for BotError {
    fn from(err: anyhow::Error) -> Self {
        BotError::new(err.to_string(), "unknown").with_source("anyhow")
    }
}

impl From<std::io::Error> for BotError {
    fn from(err: std::io::Error) -> Self {
        BotError::new(format!("I/O error: {}", err), "io").with_source("std::io")
    }
}

impl From<serde_json::Error> for BotError {
    fn from(err: serde_json::Error) -> Self {
        BotError::new(format!("JSON error: {}", err), "json_parse").with_source("serde_json")
    }
}

impl From<toml::de::Error> for BotError {
    fn from(err: toml::de::Error) -> Self {
        BotError::new(format!("TOML error: {}", err), "config").with_source("toml")
    }
}

impl From<reqwest::Error> for BotError {
    fn from(err: reqwest::Error) -> Self {
        BotError::new(format!("HTTP error: {}", err), "http").with_source("reqwest")
    }
}

impl From<tokio::time::error::Elapsed> for BotError {
    fn from(_: tokio::time::error::Elapsed) -> Self {
        BotError::new("Operation timed out", "timeout").with_source("tokio::time")
    }
}

impl From<CurriculumError> for BotError {
    fn from(err: CurriculumError) -> Self {
        BotError::new(err.to_string(), "curriculum")
    }
}

/// Curriculum lookups and curriculum file validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CurriculumError {
    /// Week/day outside [1,12]x[1,7]. A correctly clamped snapshot never produces this.
    #[error("curriculum entry not found for week {week}, day {day}")]
    EntryNotFound { week: u32, day: u32 },
    #[error("invalid curriculum: {0}")]
    Invalid(String),
}

/// Why a generation call did not produce usable content.
/// Every variant is recovered by the dispatcher with fallback content.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error("generator unavailable: {0}")]
    Unavailable(String),
    #[error("generator timed out after {0}s")]
    Timeout(u64),
    #[error("circuit open, generator skipped")]
    CircuitOpen,
    #[error("malformed generator output: {0}")]
    Malformed(String),
    #[error("expected {expected} items, got {actual}")]
    CountMismatch { expected: usize, actual: usize },
}

impl GenerationError {
    /// Short label for structured logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            GenerationError::Unavailable(_) => "unavailable",
            GenerationError::Timeout(_) => "timeout",
            GenerationError::CircuitOpen => "circuit_open",
            GenerationError::Malformed(_) => "malformed",
            GenerationError::CountMismatch { .. } => "count_mismatch",
        }
    }
}
