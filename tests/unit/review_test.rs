#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::progress::DayBoundary;
    use crate::review::{
        record_outcome, review_interval_days, select_due_items, ReviewPolicy, ReviewScheduler,
        VocabularyItem, MAX_MASTERY, MIN_MASTERY,
    };
    use crate::error::BotError;
    use crate::storage::{DailyCompletion, Enrollment, InMemoryStorage, Storage};
    use async_trait::async_trait;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use proptest::prelude::*;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap()
    }

    fn word(week: u32, term: &str) -> VocabularyItem {
        VocabularyItem::new(week, "meaning", term, "", "", t0())
    }

    fn at_level(mut item: VocabularyItem, level: u8) -> VocabularyItem {
        item.mastery_level = level;
        item
    }

    #[test]
    fn test_intervals_by_level() {
        let days: Vec<i64> = (1..=5).map(review_interval_days).collect();
        assert_eq!(days, vec![1, 3, 7, 14, 30]);
    }

    #[test]
    fn test_two_correct_answers_raise_level() {
        let item = at_level(word(1, "hola"), 2);
        let item = record_outcome(item, true, t0());
        assert_eq!(item.mastery_level, 2);
        let item = record_outcome(item, true, t0());
        assert_eq!(item.mastery_level, 3);
        assert_eq!(item.correct_streak, 0);
    }

    #[test]
    fn test_mixed_answers_do_not_flip_level() {
        let item = at_level(word(1, "hola"), 2);
        let item = record_outcome(item, true, t0());
        let item = record_outcome(item, false, t0());
        assert_eq!(item.mastery_level, 2);
        assert_eq!(item.correct_streak, 0);
        assert_eq!(item.incorrect_streak, 1);
    }

    #[test]
    fn test_two_incorrect_answers_lower_level() {
        let item = at_level(word(1, "hola"), 3);
        let item = record_outcome(record_outcome(item, false, t0()), false, t0());
        assert_eq!(item.mastery_level, 2);
        assert_eq!(item.incorrect_streak, 0);
    }

    #[test]
    fn test_level_bounds_hold() {
        let mut low = word(1, "adiós");
        for _ in 0..6 {
            low = record_outcome(low, false, t0());
        }
        assert_eq!(low.mastery_level, MIN_MASTERY);

        let mut high = word(1, "gracias");
        for _ in 0..20 {
            high = record_outcome(high, true, t0());
        }
        assert_eq!(high.mastery_level, MAX_MASTERY);
        assert!(high.is_mastered());
    }

    #[test]
    fn test_outcome_stamps_review_time() {
        let now = t0() + Duration::days(2);
        let item = record_outcome(word(1, "hola"), true, now);
        assert_eq!(item.last_reviewed_at, Some(now));
    }

    #[test]
    fn test_review_interval_is_honoured() {
        let now = t0() + Duration::days(30);
        let mut six = at_level(word(1, "casa"), 3);
        six.last_reviewed_at = Some(now - Duration::days(6));
        let mut seven = at_level(word(1, "perro"), 3);
        seven.last_reviewed_at = Some(now - Duration::days(7));

        let due = select_due_items(
            vec![six, seven],
            1,
            now,
            DayBoundary::Calendar,
            &ReviewPolicy::default(),
        );
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].target_term, "perro");
    }

    #[test]
    fn test_new_words_due_on_next_calendar_day() {
        let item = word(1, "hola");
        assert!(!item.is_due(t0() + Duration::hours(12), DayBoundary::Calendar));
        assert!(item.is_due(t0() + Duration::days(1), DayBoundary::Calendar));
    }

    #[test]
    fn test_window_range() {
        let policy = ReviewPolicy::default();
        assert_eq!(policy.window(1), 1..=1);
        assert_eq!(policy.window(3), 1..=3);
        assert_eq!(policy.window(9), 6..=9);
    }

    #[test]
    fn test_weakest_words_come_first() {
        let now = t0() + Duration::days(60);
        let strong = at_level(word(1, "fuerte"), 4);
        let weak = at_level(word(1, "débil"), 1);
        let due = select_due_items(vec![strong, weak], 1, now, DayBoundary::Calendar, &ReviewPolicy::default());
        assert_eq!(due[0].target_term, "débil");
    }

    #[tokio::test]
    async fn test_scheduler_records_and_persists_outcomes() {
        let storage = Arc::new(InMemoryStorage::new());
        let enrollment = Enrollment::new("42", None, t0());
        storage.save_enrollment(&enrollment).await.unwrap();
        storage.upsert_vocabulary("42", 1, &[word(1, "hola")]).await.unwrap();

        let scheduler = ReviewScheduler::new(storage.clone(), DayBoundary::Calendar, ReviewPolicy::default());
        let now = t0() + Duration::days(1);
        assert_eq!(scheduler.select_due(&enrollment, 1, now).await.unwrap().len(), 1);

        scheduler.record_review("42", 1, "HOLA", true, now).await.unwrap();
        let updated = scheduler.record_review("42", 1, "hola", true, now).await.unwrap();
        assert_eq!(updated.mastery_level, 2);

        let stored = storage.get_vocabulary("42", 1).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].mastery_level, 2);
        // Level 2 waits three days.
        assert!(scheduler.select_due(&enrollment, 1, now).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_word_is_an_error() {
        let storage = Arc::new(InMemoryStorage::new());
        let scheduler = ReviewScheduler::new(storage, DayBoundary::Calendar, ReviewPolicy::default());
        let err = scheduler.record_review("42", 1, "nada", true, t0()).await.unwrap_err();
        assert_eq!(err.stage, "review");
    }

    /// In-memory storage that yields before every call, so concurrent
    /// read-modify-write cycles interleave unless something serialises them.
    struct YieldingStorage(InMemoryStorage);

    #[async_trait]
    impl Storage for YieldingStorage {
        async fn get_enrollment(&self, learner_id: &str) -> Result<Option<Enrollment>, BotError> {
            tokio::task::yield_now().await;
            self.0.get_enrollment(learner_id).await
        }

        async fn save_enrollment(&self, enrollment: &Enrollment) -> Result<(), BotError> {
            tokio::task::yield_now().await;
            self.0.save_enrollment(enrollment).await
        }

        async fn list_active_enrollments(&self) -> Result<Vec<Enrollment>, BotError> {
            tokio::task::yield_now().await;
            self.0.list_active_enrollments().await
        }

        async fn get_vocabulary(&self, learner_id: &str, week: u32) -> Result<Vec<VocabularyItem>, BotError> {
            tokio::task::yield_now().await;
            self.0.get_vocabulary(learner_id, week).await
        }

        async fn upsert_vocabulary(
            &self,
            learner_id: &str,
            week: u32,
            items: &[VocabularyItem],
        ) -> Result<(), BotError> {
            tokio::task::yield_now().await;
            self.0.upsert_vocabulary(learner_id, week, items).await
        }

        async fn list_all_vocabulary(&self, learner_id: &str) -> Result<Vec<VocabularyItem>, BotError> {
            tokio::task::yield_now().await;
            self.0.list_all_vocabulary(learner_id).await
        }

        async fn get_daily_completion(
            &self,
            learner_id: &str,
            week: u32,
            day: u32,
        ) -> Result<Option<DailyCompletion>, BotError> {
            tokio::task::yield_now().await;
            self.0.get_daily_completion(learner_id, week, day).await
        }

        async fn record_daily_completion(
            &self,
            learner_id: &str,
            week: u32,
            day: u32,
            flags: &DailyCompletion,
        ) -> Result<(), BotError> {
            tokio::task::yield_now().await;
            self.0.record_daily_completion(learner_id, week, day, flags).await
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_answers_for_one_word_are_not_lost() {
        let storage = Arc::new(YieldingStorage(InMemoryStorage::new()));
        storage.upsert_vocabulary("42", 1, &[word(1, "hola")]).await.unwrap();
        let scheduler = ReviewScheduler::new(storage.clone(), DayBoundary::Calendar, ReviewPolicy::default());
        let now = t0() + Duration::days(1);

        let tasks: Vec<_> = (0..4)
            .map(|_| {
                let scheduler = scheduler.clone();
                tokio::spawn(async move { scheduler.record_review("42", 1, "hola", true, now).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        // Four correct answers are two level-ups from level 1.
        let stored = storage.get_vocabulary("42", 1).await.unwrap();
        assert_eq!(stored[0].mastery_level, 3);
        assert_eq!(stored[0].correct_streak, 0);
        assert_eq!(scheduler.tracked_items(), 0);
    }

    #[tokio::test]
    async fn test_item_locks_are_released() {
        let storage = Arc::new(InMemoryStorage::new());
        storage.upsert_vocabulary("42", 1, &[word(1, "hola"), word(1, "adiós")]).await.unwrap();
        let scheduler = ReviewScheduler::new(storage, DayBoundary::Calendar, ReviewPolicy::default());

        scheduler.record_review("42", 1, "hola", true, t0()).await.unwrap();
        scheduler.record_review("42", 1, "adiós", false, t0()).await.unwrap();
        assert!(scheduler.record_review("42", 1, "nada", true, t0()).await.is_err());
        assert_eq!(scheduler.tracked_items(), 0);
    }

    proptest! {
        #[test]
        fn prop_selection_respects_window_and_cap(
            current_week in 1u32..=12,
            weeks in proptest::collection::vec(1u32..=12, 0..80),
        ) {
            let items: Vec<VocabularyItem> = weeks
                .iter()
                .enumerate()
                .map(|(i, w)| word(*w, &format!("w{}", i)))
                .collect();
            let policy = ReviewPolicy::default();
            let due = select_due_items(items, current_week, t0() + Duration::days(100), DayBoundary::Calendar, &policy);

            prop_assert!(due.len() <= 20);
            let low = current_week.saturating_sub(3).max(1);
            for item in &due {
                prop_assert!(item.week >= low && item.week <= current_week);
            }
        }

        #[test]
        fn prop_level_stays_in_bounds(answers in proptest::collection::vec(any::<bool>(), 0..40)) {
            let mut item = word(1, "hola");
            for correct in answers {
                item = record_outcome(item, correct, t0());
                prop_assert!((MIN_MASTERY..=MAX_MASTERY).contains(&item.mastery_level));
            }
        }
    }
}
