//! Latency of broadcast steps and generation calls, logged at debug level.

use std::time::Instant;

/// Logs the time between creation and drop.
pub struct PerfTimer {
    label: &'static str,
    learner: Option<String>,
    start: Instant,
}

impl PerfTimer {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            learner: None,
            start: Instant::now(),
        }
    }

    /// Timer for one learner's share of a batch.
    pub fn for_learner(label: &'static str, learner: &str) -> Self {
        Self {
            label,
            learner: Some(learner.to_string()),
            start: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

impl Drop for PerfTimer {
    fn drop(&mut self) {
        match &self.learner {
            Some(learner) => tracing::debug!(
                label = self.label,
                learner = %learner,
                duration_ms = self.elapsed_ms(),
                "Perf"
            ),
            None => tracing::debug!(label = self.label, duration_ms = self.elapsed_ms(), "Perf"),
        }
    }
}
