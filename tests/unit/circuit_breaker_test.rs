#[cfg(test)]
mod tests {
    use crate::cache::{cache_key, ResponseCache};
    use crate::circuit_breaker::{CircuitBreaker, RetryPolicy};
    use chrono::{TimeZone, Utc};
    use std::time::Duration;

    #[test]
    fn test_circuit_breaker_initial_state() {
        let cb = CircuitBreaker::new(Duration::from_secs(60), 3);
        assert!(!cb.is_open());
        assert_eq!(cb.failure_count(), 0);
        assert!(cb.allow_request());
    }

    #[test]
    fn test_circuit_breaker_opens_after_threshold() {
        let cb = CircuitBreaker::new(Duration::from_secs(60), 3);

        cb.record_failure();
        assert!(!cb.is_open());

        cb.record_failure();
        assert!(!cb.is_open());

        cb.record_failure();
        assert!(cb.is_open());
        assert!(!cb.allow_request());
    }

    #[test]
    fn test_circuit_breaker_resets_on_success() {
        let cb = CircuitBreaker::new(Duration::from_secs(60), 3);
        cb.record_failure();
        cb.record_failure();
        cb.record_success();
        assert_eq!(cb.failure_count(), 0);
        cb.record_failure();
        assert!(!cb.is_open());
    }

    #[test]
    fn test_half_open_after_cooldown() {
        let cb = CircuitBreaker::new(Duration::from_millis(0), 1);
        cb.record_failure();
        assert!(cb.is_open());
        // Zero cool-down: the next request is the trial call.
        assert!(cb.allow_request());
        assert!(!cb.is_open());
        cb.record_failure();
        assert!(cb.is_open());
    }

    #[test]
    fn test_backoff_grows_and_caps() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_for_attempt(0), Duration::from_millis(100));
        assert_eq!(policy.delay_for_attempt(1), Duration::from_millis(200));
        assert_eq!(policy.delay_for_attempt(2), Duration::from_millis(400));
        assert_eq!(policy.delay_for_attempt(30), Duration::from_millis(5000));
    }

    #[test]
    fn test_cache_hit_and_expiry() {
        let cache = ResponseCache::new(8, chrono::Duration::hours(1));
        let now = Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap();
        let key = cache_key("model", "system", "prompt");

        cache.put(key.clone(), "text".to_string(), now);
        assert_eq!(cache.get(&key, now + chrono::Duration::minutes(30)).as_deref(), Some("text"));
        assert_eq!(cache.get(&key, now + chrono::Duration::hours(2)), None);
    }

    #[test]
    fn test_cache_key_depends_on_every_part() {
        let a = cache_key("m", "s", "p");
        assert_eq!(a, cache_key("m", "s", "p"));
        assert_ne!(a, cache_key("m2", "s", "p"));
        assert_ne!(a, cache_key("m", "s", "p2"));
        assert_eq!(a.len(), 64);
    }
}
