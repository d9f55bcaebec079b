use std::collections::HashMap;
use async_trait::async_trait;
use parking_lot::RwLock;
use crate::error::BotError;
use crate::review::VocabularyItem;
use crate::storage::{completion_key, DailyCompletion, Enrollment, LearnerRecord, Storage};

/// Process-local storage. Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryStorage {
    learners: RwLock<HashMap<String, LearnerRecord>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn get_enrollment(&self, learner_id: &str) -> Result<Option<Enrollment>, BotError> {
        Ok(self
            .learners
            .read()
            .get(learner_id)
            .and_then(|r| r.enrollment.clone()))
    }

    async fn save_enrollment(&self, enrollment: &Enrollment) -> Result<(), BotError> {
        self.learners
            .write()
            .entry(enrollment.learner_id.clone())
            .or_default()
            .enrollment = Some(enrollment.clone());
        Ok(())
    }

    async fn list_active_enrollments(&self) -> Result<Vec<Enrollment>, BotError> {
        let mut active: Vec<Enrollment> = self
            .learners
            .read()
            .values()
            .filter_map(|r| r.enrollment.clone())
            .filter(|e| e.active)
            .collect();
        active.sort_by(|a, b| a.learner_id.cmp(&b.learner_id));
        Ok(active)
    }

    async fn get_vocabulary(&self, learner_id: &str, week: u32) -> Result<Vec<VocabularyItem>, BotError> {
        Ok(self
            .learners
            .read()
            .get(learner_id)
            .and_then(|r| r.vocabulary.get(&week).cloned())
            .unwrap_or_default())
    }

    async fn upsert_vocabulary(
        &self,
        learner_id: &str,
        week: u32,
        items: &[VocabularyItem],
    ) -> Result<(), BotError> {
        self.learners
            .write()
            .entry(learner_id.to_string())
            .or_default()
            .upsert_vocabulary(week, items);
        Ok(())
    }

    async fn list_all_vocabulary(&self, learner_id: &str) -> Result<Vec<VocabularyItem>, BotError> {
        Ok(self
            .learners
            .read()
            .get(learner_id)
            .map(|r| r.vocabulary.values().flatten().cloned().collect())
            .unwrap_or_default())
    }

    async fn get_daily_completion(
        &self,
        learner_id: &str,
        week: u32,
        day: u32,
    ) -> Result<Option<DailyCompletion>, BotError> {
        Ok(self
            .learners
            .read()
            .get(learner_id)
            .and_then(|r| r.completions.get(&completion_key(week, day)).cloned()))
    }

    async fn record_daily_completion(
        &self,
        learner_id: &str,
        week: u32,
        day: u32,
        flags: &DailyCompletion,
    ) -> Result<(), BotError> {
        self.learners
            .write()
            .entry(learner_id.to_string())
            .or_default()
            .record_completion(week, day, flags);
        Ok(())
    }
}
