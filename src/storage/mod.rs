pub mod memory;
pub mod json_store;

use std::collections::BTreeMap;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use crate::error::BotError;
use crate::review::VocabularyItem;

pub use memory::InMemoryStorage;
pub use json_store::JsonFileStorage;

/// A learner's start record. `enrolled_at` anchors all progress math.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    /// Opaque learner id, also the chat handle used by the messenger.
    pub learner_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    pub enrolled_at: DateTime<Utc>,
    pub active: bool,
}

impl Enrollment {
    pub fn new<S: Into<String>>(learner_id: S, display_name: Option<String>, now: DateTime<Utc>) -> Self {
        Enrollment {
            learner_id: learner_id.into(),
            display_name,
            enrolled_at: now,
            active: true,
        }
    }

    /// Administrative start-date override (testing and demos only).
    /// Reactivates the learner so the new position gets content again.
    pub fn override_start(&mut self, enrolled_at: DateTime<Utc>) {
        self.enrolled_at = enrolled_at;
        self.active = true;
    }

    /// Soft deactivation once the program is exhausted.
    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

/// Per-day delivery flags. Recording merges with what is already stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCompletion {
    #[serde(default)]
    pub lesson_sent: bool,
    #[serde(default)]
    pub review_sent: bool,
    #[serde(default)]
    pub practice_sent: bool,
    #[serde(default)]
    pub summary_sent: bool,
    #[serde(default)]
    pub quiz_correct: Option<u32>,
    #[serde(default)]
    pub quiz_total: Option<u32>,
}

impl DailyCompletion {
    pub fn lesson() -> Self {
        DailyCompletion { lesson_sent: true, ..Default::default() }
    }

    pub fn review() -> Self {
        DailyCompletion { review_sent: true, ..Default::default() }
    }

    pub fn practice() -> Self {
        DailyCompletion { practice_sent: true, ..Default::default() }
    }

    pub fn summary() -> Self {
        DailyCompletion { summary_sent: true, ..Default::default() }
    }

    pub fn quiz(correct: u32, total: u32) -> Self {
        DailyCompletion {
            quiz_correct: Some(correct),
            quiz_total: Some(total),
            ..Default::default()
        }
    }

    /// Sent flags are sticky; a newer quiz score replaces the old one.
    pub fn merge(&mut self, other: &DailyCompletion) {
        self.lesson_sent |= other.lesson_sent;
        self.review_sent |= other.review_sent;
        self.practice_sent |= other.practice_sent;
        self.summary_sent |= other.summary_sent;
        if other.quiz_total.is_some() {
            self.quiz_correct = other.quiz_correct;
            self.quiz_total = other.quiz_total;
        }
    }
}

/// Everything stored for one learner. Both backends keep this shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LearnerRecord {
    #[serde(default)]
    pub enrollment: Option<Enrollment>,
    #[serde(default)]
    pub vocabulary: BTreeMap<u32, Vec<VocabularyItem>>,
    /// Keyed by `completion_key(week, day)`.
    #[serde(default)]
    pub completions: BTreeMap<String, DailyCompletion>,
}

pub fn completion_key(week: u32, day: u32) -> String {
    format!("w{:02}d{}", week, day)
}

impl LearnerRecord {
    /// Insert or replace items by target term (case-insensitive) within a week.
    pub fn upsert_vocabulary(&mut self, week: u32, items: &[VocabularyItem]) {
        let list = self.vocabulary.entry(week).or_default();
        for item in items {
            match list.iter_mut().find(|v| v.same_word(item)) {
                Some(existing) => *existing = item.clone(),
                None => list.push(item.clone()),
            }
        }
    }

    pub fn record_completion(&mut self, week: u32, day: u32, flags: &DailyCompletion) {
        self.completions
            .entry(completion_key(week, day))
            .or_default()
            .merge(flags);
    }
}

/// Storage collaborator. Implementations must behave identically;
/// the core never special-cases the in-memory backend.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn get_enrollment(&self, learner_id: &str) -> Result<Option<Enrollment>, BotError>;

    async fn save_enrollment(&self, enrollment: &Enrollment) -> Result<(), BotError>;

    async fn list_active_enrollments(&self) -> Result<Vec<Enrollment>, BotError>;

    async fn get_vocabulary(&self, learner_id: &str, week: u32) -> Result<Vec<VocabularyItem>, BotError>;

    async fn upsert_vocabulary(
        &self,
        learner_id: &str,
        week: u32,
        items: &[VocabularyItem],
    ) -> Result<(), BotError>;

    /// All vocabulary across weeks, ordered by week.
    async fn list_all_vocabulary(&self, learner_id: &str) -> Result<Vec<VocabularyItem>, BotError>;

    async fn get_daily_completion(
        &self,
        learner_id: &str,
        week: u32,
        day: u32,
    ) -> Result<Option<DailyCompletion>, BotError>;

    async fn record_daily_completion(
        &self,
        learner_id: &str,
        week: u32,
        day: u32,
        flags: &DailyCompletion,
    ) -> Result<(), BotError>;
}
