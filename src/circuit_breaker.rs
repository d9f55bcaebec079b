use std::time::{Duration, Instant};
use parking_lot::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BreakerState {
    Closed { failures: u32 },
    Open { since: Instant },
    /// One trial call is allowed through after the cool-down.
    HalfOpen,
}

/// Circuit breaker guarding the generation provider.
/// While open, callers go straight to fallback content instead of waiting on timeouts.
pub struct CircuitBreaker {
    state: Mutex<BreakerState>,
    cooldown: Duration,
    failure_threshold: u32,
}

impl CircuitBreaker {
    pub fn new(cooldown: Duration, failure_threshold: u32) -> Self {
        CircuitBreaker {
            state: Mutex::new(BreakerState::Closed { failures: 0 }),
            cooldown,
            failure_threshold: failure_threshold.max(1),
        }
    }

    /// Whether a call may be attempted now. Moves Open to HalfOpen after the cool-down.
    pub fn allow_request(&self) -> bool {
        let mut state = self.state.lock();
        match *state {
            BreakerState::Closed { .. } | BreakerState::HalfOpen => true,
            BreakerState::Open { since } => {
                if since.elapsed() >= self.cooldown {
                    *state = BreakerState::HalfOpen;
                    true
                } else {
                    false
                }
            }
        }
    }

    pub fn record_success(&self) {
        *self.state.lock() = BreakerState::Closed { failures: 0 };
    }

    pub fn record_failure(&self) {
        let mut state = self.state.lock();
        *state = match *state {
            BreakerState::Closed { failures } if failures + 1 < self.failure_threshold => {
                BreakerState::Closed { failures: failures + 1 }
            }
            _ => {
                tracing::warn!(cooldown_secs = self.cooldown.as_secs(), "Circuit opened");
                BreakerState::Open { since: Instant::now() }
            }
        };
    }

    pub fn is_open(&self) -> bool {
        matches!(*self.state.lock(), BreakerState::Open { .. })
    }

    pub fn failure_count(&self) -> u32 {
        match *self.state.lock() {
            BreakerState::Closed { failures } => failures,
            _ => self.failure_threshold,
        }
    }
}

/// Bounded retry with exponential backoff.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub initial_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl RetryPolicy {
    /// Delay before retry number `attempt` (0-indexed)
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let factor = 2u64.saturating_pow(attempt);
        Duration::from_millis(self.initial_delay_ms.saturating_mul(factor).min(self.max_delay_ms))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            max_retries: 2,
            initial_delay_ms: 100,
            max_delay_ms: 5000,
        }
    }
}
