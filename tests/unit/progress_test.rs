#[cfg(test)]
mod tests {
    use crate::progress::{compute_progress, compute_progress_with, DayBoundary, PROGRAM_DAYS};
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use proptest::prelude::*;

    fn enrolled() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_enrollment_instant_is_week_one_day_one() {
        let p = compute_progress(enrolled(), enrolled());
        assert_eq!(p.position(), (1, 1));
        assert_eq!(p.total_elapsed_days, 1);
        assert!(!p.completed);
    }

    #[test]
    fn test_next_day_is_day_two() {
        let p = compute_progress(enrolled(), enrolled() + Duration::days(1));
        assert_eq!(p.position(), (1, 2));
    }

    #[test]
    fn test_week_rollover() {
        let p = compute_progress(enrolled(), enrolled() + Duration::days(7));
        assert_eq!(p.position(), (2, 1));
    }

    #[test]
    fn test_completion_boundary() {
        let last = compute_progress(enrolled(), enrolled() + Duration::days(83));
        assert!(!last.completed);
        assert_eq!(last.position(), (12, 7));

        let done = compute_progress(enrolled(), enrolled() + Duration::days(PROGRAM_DAYS as i64));
        assert!(done.completed);
        assert_eq!(done.week_number, 12);
    }

    #[test]
    fn test_week_stays_clamped_long_after_completion() {
        let p = compute_progress(enrolled(), enrolled() + Duration::days(400));
        assert!(p.completed);
        assert_eq!(p.week_number, 12);
        assert!((1..=7).contains(&p.day_number));
    }

    #[test]
    fn test_clock_skew_reads_as_day_one() {
        let p = compute_progress(enrolled(), enrolled() - Duration::days(3));
        assert_eq!(p.position(), (1, 1));
        assert_eq!(p.elapsed_days(), 0);
    }

    #[test]
    fn test_calendar_and_rolling_boundaries_differ_near_midnight() {
        let late = Utc.with_ymd_and_hms(2026, 3, 2, 23, 59, 0).unwrap();
        let after_midnight = late + Duration::minutes(2);

        let calendar = compute_progress_with(DayBoundary::Calendar, late, after_midnight);
        let rolling = compute_progress_with(DayBoundary::Rolling, late, after_midnight);

        assert_eq!(calendar.position(), (1, 2));
        assert_eq!(rolling.position(), (1, 1));
    }

    #[test]
    fn test_default_boundary_is_calendar() {
        assert_eq!(DayBoundary::default(), DayBoundary::Calendar);
    }

    proptest! {
        #[test]
        fn prop_elapsed_days_monotonic(a in 0i64..200 * 86_400, b in 0i64..200 * 86_400) {
            let (t1, t2) = if a <= b { (a, b) } else { (b, a) };
            for boundary in [DayBoundary::Calendar, DayBoundary::Rolling] {
                let p1 = compute_progress_with(boundary, enrolled(), enrolled() + Duration::seconds(t1));
                let p2 = compute_progress_with(boundary, enrolled(), enrolled() + Duration::seconds(t2));
                prop_assert!(p1.total_elapsed_days <= p2.total_elapsed_days);
            }
        }

        #[test]
        fn prop_position_always_in_range(secs in 0i64..400 * 86_400) {
            let p = compute_progress(enrolled(), enrolled() + Duration::seconds(secs));
            prop_assert!((1..=12).contains(&p.week_number));
            prop_assert!((1..=7).contains(&p.day_number));
            prop_assert_eq!(p.completed, p.elapsed_days() >= PROGRAM_DAYS);
        }
    }
}
