pub mod quiz;

use std::collections::HashMap;
use std::sync::Arc;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Serialize, Deserialize};
use crate::error::BotError;
use crate::progress::DayBoundary;
use crate::storage::{Enrollment, Storage};

pub const MIN_MASTERY: u8 = 1;
pub const MAX_MASTERY: u8 = 5;
/// Consecutive same-direction answers needed to move a level.
pub const STREAK_TO_MOVE: u32 = 2;

/// Minimum days between reviews for a mastery level.
pub fn review_interval_days(level: u8) -> i64 {
    match level.clamp(MIN_MASTERY, MAX_MASTERY) {
        1 => 1,
        2 => 3,
        3 => 7,
        4 => 14,
        _ => 30,
    }
}

/// One learned word, scoped to (learner, week).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyItem {
    pub week: u32,
    /// Word in the learner's own language.
    pub source_term: String,
    /// Word being learned.
    pub target_term: String,
    #[serde(default)]
    pub pronunciation: String,
    #[serde(default)]
    pub example: String,
    pub mastery_level: u8,
    pub learned_at: DateTime<Utc>,
    #[serde(default)]
    pub last_reviewed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub correct_streak: u32,
    #[serde(default)]
    pub incorrect_streak: u32,
}

impl VocabularyItem {
    pub fn new(
        week: u32,
        source_term: &str,
        target_term: &str,
        pronunciation: &str,
        example: &str,
        learned_at: DateTime<Utc>,
    ) -> Self {
        VocabularyItem {
            week,
            source_term: source_term.trim().to_string(),
            target_term: target_term.trim().to_string(),
            pronunciation: pronunciation.trim().to_string(),
            example: example.trim().to_string(),
            mastery_level: MIN_MASTERY,
            learned_at,
            last_reviewed_at: None,
            correct_streak: 0,
            incorrect_streak: 0,
        }
    }

    /// Identity within a week: the target term, case-insensitive.
    pub fn same_word(&self, other: &VocabularyItem) -> bool {
        self.target_term.to_lowercase() == other.target_term.to_lowercase()
    }

    pub fn is_mastered(&self) -> bool {
        self.mastery_level >= MAX_MASTERY
    }

    /// Never-reviewed items are due one day after being learned;
    /// reviewed items once their level's interval has passed.
    pub fn is_due(&self, now: DateTime<Utc>, boundary: DayBoundary) -> bool {
        match self.last_reviewed_at {
            None => boundary.days_between(self.learned_at, now) >= 1,
            Some(reviewed) => {
                boundary.days_between(reviewed, now) >= review_interval_days(self.mastery_level)
            }
        }
    }

    fn last_touched(&self) -> DateTime<Utc> {
        self.last_reviewed_at.unwrap_or(self.learned_at)
    }
}

/// Trailing window and per-session cap for review selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewPolicy {
    pub window_weeks: u32,
    pub session_cap: usize,
}

impl Default for ReviewPolicy {
    fn default() -> Self {
        ReviewPolicy {
            window_weeks: 4,
            session_cap: 20,
        }
    }
}

impl ReviewPolicy {
    /// Weeks scanned for a learner currently in `current_week`.
    pub fn window(&self, current_week: u32) -> std::ops::RangeInclusive<u32> {
        let span = self.window_weeks.max(1) - 1;
        current_week.saturating_sub(span).max(1)..=current_week.max(1)
    }
}

/// Due items from the trailing window, weakest and most overdue first, capped.
pub fn select_due_items<I>(
    items: I,
    current_week: u32,
    now: DateTime<Utc>,
    boundary: DayBoundary,
    policy: &ReviewPolicy,
) -> Vec<VocabularyItem>
where
    I: IntoIterator<Item = VocabularyItem>,
{
    let window = policy.window(current_week);
    let mut due: Vec<VocabularyItem> = items
        .into_iter()
        .filter(|item| window.contains(&item.week))
        .filter(|item| item.is_due(now, boundary))
        .collect();

    due.sort_by(|a, b| {
        a.mastery_level
            .cmp(&b.mastery_level)
            .then(a.last_touched().cmp(&b.last_touched()))
            .then(a.week.cmp(&b.week))
            .then(a.target_term.cmp(&b.target_term))
    });
    due.truncate(policy.session_cap);
    due
}

/// Apply one review answer. Two consecutive answers in the same direction
/// move the level by one; a single opposite answer only breaks the streak.
pub fn record_outcome(mut item: VocabularyItem, correct: bool, now: DateTime<Utc>) -> VocabularyItem {
    if correct {
        item.correct_streak += 1;
        item.incorrect_streak = 0;
        if item.correct_streak >= STREAK_TO_MOVE {
            item.mastery_level = (item.mastery_level + 1).min(MAX_MASTERY);
            item.correct_streak = 0;
        }
    } else {
        item.incorrect_streak += 1;
        item.correct_streak = 0;
        if item.incorrect_streak >= STREAK_TO_MOVE {
            item.mastery_level = item.mastery_level.saturating_sub(1).max(MIN_MASTERY);
            item.incorrect_streak = 0;
        }
    }
    item.mastery_level = item.mastery_level.clamp(MIN_MASTERY, MAX_MASTERY);
    item.last_reviewed_at = Some(now);
    item
}

type ItemKey = (String, u32, String);

/// Storage-backed review selection and outcome recording.
/// Outcome writes are serialised per (learner, week, word).
#[derive(Clone)]
pub struct ReviewScheduler {
    storage: Arc<dyn Storage>,
    boundary: DayBoundary,
    policy: ReviewPolicy,
    item_locks: Arc<Mutex<HashMap<ItemKey, Arc<tokio::sync::Mutex<()>>>>>,
}

impl ReviewScheduler {
    pub fn new(storage: Arc<dyn Storage>, boundary: DayBoundary, policy: ReviewPolicy) -> Self {
        ReviewScheduler {
            storage,
            boundary,
            policy,
            item_locks: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn policy(&self) -> &ReviewPolicy {
        &self.policy
    }

    /// Items due for the enrolled learner at `now`.
    pub async fn select_due(
        &self,
        enrollment: &Enrollment,
        current_week: u32,
        now: DateTime<Utc>,
    ) -> Result<Vec<VocabularyItem>, BotError> {
        let mut candidates = Vec::new();
        for week in self.policy.window(current_week) {
            let items = self
                .storage
                .get_vocabulary(&enrollment.learner_id, week)
                .await
                .map_err(|e| e.with_learner(enrollment.learner_id.clone()))?;
            candidates.extend(items);
        }
        let due = select_due_items(candidates, current_week, now, self.boundary, &self.policy);
        tracing::debug!(
            learner = %enrollment.learner_id,
            week = current_week,
            due = due.len(),
            "Selected due vocabulary"
        );
        Ok(due)
    }

    /// Record a review answer for one stored word and persist the new state.
    pub async fn record_review(
        &self,
        learner_id: &str,
        week: u32,
        target_term: &str,
        correct: bool,
        now: DateTime<Utc>,
    ) -> Result<VocabularyItem, BotError> {
        let key = (learner_id.to_string(), week, target_term.to_lowercase());
        let lock = self.item_locks.lock().entry(key.clone()).or_default().clone();

        let result = {
            let _guard = lock.lock().await;
            self.apply_outcome(learner_id, week, target_term, correct, now).await
        };

        // Drop the entry once nobody else holds or waits on it.
        let mut locks = self.item_locks.lock();
        if Arc::strong_count(&lock) == 2 {
            locks.remove(&key);
        }
        result
    }

    #[cfg(test)]
    pub(crate) fn tracked_items(&self) -> usize {
        self.item_locks.lock().len()
    }

    async fn apply_outcome(
        &self,
        learner_id: &str,
        week: u32,
        target_term: &str,
        correct: bool,
        now: DateTime<Utc>,
    ) -> Result<VocabularyItem, BotError> {
        let items = self.storage.get_vocabulary(learner_id, week).await?;
        let item = items
            .into_iter()
            .find(|v| v.target_term.to_lowercase() == target_term.to_lowercase())
            .ok_or_else(|| BotError::new(
                format!("Unknown vocabulary item '{}'", target_term),
                "review"
            ).with_learner(learner_id).with_context(format!("week: {}", week)))?;

        let before = item.mastery_level;
        let updated = record_outcome(item, correct, now);
        self.storage
            .upsert_vocabulary(learner_id, week, std::slice::from_ref(&updated))
            .await?;

        if updated.mastery_level != before {
            tracing::info!(
                learner = learner_id,
                word = %updated.target_term,
                from = before,
                to = updated.mastery_level,
                "Mastery level changed"
            );
        }
        Ok(updated)
    }
}
