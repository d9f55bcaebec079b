use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use serde::Serialize;

/// Process-wide counters, cheap to clone and share.
#[derive(Clone, Default)]
pub struct Metrics {
    pub messages_sent: Arc<AtomicU64>,
    pub generation_calls: Arc<AtomicU64>,
    /// Generation latency in milliseconds (sum)
    pub generation_latency_ms: Arc<AtomicU64>,
    pub fallbacks: Arc<AtomicU64>,
    /// Learners whose broadcast step failed and was skipped
    pub learners_skipped: Arc<AtomicU64>,
    pub reviews_recorded: Arc<AtomicU64>,
}

/// Point-in-time copy for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub messages_sent: u64,
    pub generation_calls: u64,
    pub generation_latency_ms: u64,
    pub fallbacks: u64,
    pub learners_skipped: u64,
    pub reviews_recorded: u64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_message(&self) {
        self.messages_sent.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_generation(&self, latency_ms: u64) {
        self.generation_calls.fetch_add(1, Ordering::Relaxed);
        self.generation_latency_ms.fetch_add(latency_ms, Ordering::Relaxed);
    }

    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_skipped_learner(&self) {
        self.learners_skipped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_review(&self) {
        self.reviews_recorded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            messages_sent: self.messages_sent.load(Ordering::Relaxed),
            generation_calls: self.generation_calls.load(Ordering::Relaxed),
            generation_latency_ms: self.generation_latency_ms.load(Ordering::Relaxed),
            fallbacks: self.fallbacks.load(Ordering::Relaxed),
            learners_skipped: self.learners_skipped.load(Ordering::Relaxed),
            reviews_recorded: self.reviews_recorded.load(Ordering::Relaxed),
        }
    }
}
