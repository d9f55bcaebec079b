#[cfg(test)]
mod tests {
    use crate::broadcast::BroadcastKind;
    use crate::config::ScheduleConfig;
    use crate::scheduler::{next_due, next_fire, triggers};
    use chrono::{Datelike, TimeZone, Utc, Weekday};

    #[test]
    fn test_daily_trigger_fires_later_same_day() {
        let all = triggers(&ScheduleConfig::default()).unwrap();
        let morning = all.iter().find(|t| t.kind == BroadcastKind::MorningLesson).unwrap();
        // Wednesday 06:30 UTC
        let after = Utc.with_ymd_and_hms(2026, 3, 4, 6, 30, 0).unwrap();
        assert_eq!(next_fire(morning, after), Utc.with_ymd_and_hms(2026, 3, 4, 8, 0, 0).unwrap());
    }

    #[test]
    fn test_trigger_at_exact_time_moves_to_next_day() {
        let all = triggers(&ScheduleConfig::default()).unwrap();
        let morning = all.iter().find(|t| t.kind == BroadcastKind::MorningLesson).unwrap();
        let at = Utc.with_ymd_and_hms(2026, 3, 4, 8, 0, 0).unwrap();
        assert_eq!(next_fire(morning, at), Utc.with_ymd_and_hms(2026, 3, 5, 8, 0, 0).unwrap());
    }

    #[test]
    fn test_weekly_summary_waits_for_sunday() {
        let all = triggers(&ScheduleConfig::default()).unwrap();
        let weekly = all.iter().find(|t| t.kind == BroadcastKind::WeeklySummary).unwrap();
        let after = Utc.with_ymd_and_hms(2026, 3, 4, 12, 0, 0).unwrap();
        let fire = next_fire(weekly, after);
        assert_eq!(fire.weekday(), Weekday::Sun);
        assert_eq!(fire, Utc.with_ymd_and_hms(2026, 3, 8, 19, 0, 0).unwrap());
    }

    #[test]
    fn test_next_due_walks_the_day_in_order() {
        let all = triggers(&ScheduleConfig::default()).unwrap();
        let mut cursor = Utc.with_ymd_and_hms(2026, 3, 4, 0, 0, 0).unwrap();
        let mut kinds = Vec::new();
        for _ in 0..4 {
            let (at, kind) = next_due(&all, cursor).unwrap();
            kinds.push(kind);
            cursor = at;
        }
        assert_eq!(
            kinds,
            vec![
                BroadcastKind::MorningLesson,
                BroadcastKind::EveningReview,
                BroadcastKind::PracticePrompt,
                BroadcastKind::MorningLesson,
            ]
        );
    }

    #[test]
    fn test_sunday_includes_summary_before_review() {
        let all = triggers(&ScheduleConfig::default()).unwrap();
        let sunday_noon = Utc.with_ymd_and_hms(2026, 3, 8, 12, 0, 0).unwrap();
        let (at, kind) = next_due(&all, sunday_noon).unwrap();
        assert_eq!(kind, BroadcastKind::WeeklySummary);
        assert_eq!(at, Utc.with_ymd_and_hms(2026, 3, 8, 19, 0, 0).unwrap());
    }

    #[test]
    fn test_broadcast_names_parse() {
        assert_eq!("morning".parse::<BroadcastKind>().unwrap(), BroadcastKind::MorningLesson);
        assert_eq!("weekly".parse::<BroadcastKind>().unwrap(), BroadcastKind::WeeklySummary);
        assert!("noon".parse::<BroadcastKind>().is_err());
    }
}
