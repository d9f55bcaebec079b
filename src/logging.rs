/// Initialize structured logging with tracing.
/// Call once at startup; `json` switches the fmt layer to JSON lines.
pub fn init_logging(json: bool) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);

    let result = if json {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true)
                    .json(),
            )
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(true).with_thread_ids(true))
            .try_init()
    };

    if let Err(e) = result {
        // A subscriber was already installed (tests, embedding binaries).
        tracing::debug!(error = %e, "Tracing subscriber already set");
        return;
    }

    tracing::info!(json = json, "Structured logging initialized");
}

pub fn log_generation_call(model: &str, capability: &str, success: bool, latency_ms: u64) {
    tracing::info!(
        model = model,
        capability = capability,
        success = success,
        latency_ms = latency_ms,
        "Generation call"
    );
}

pub fn log_fallback(learner: &str, capability: &str, reason: &str) {
    tracing::warn!(
        learner = learner,
        capability = capability,
        reason = reason,
        "Generation failed, using fallback content"
    );
}

pub fn log_timeout(model: &str, duration_secs: u64) {
    tracing::error!(model = model, duration_secs = duration_secs, "Timeout exceeded");
}

pub fn log_broadcast_step(broadcast: &str, learner: &str, week: u32, day: u32, outcome: &str) {
    tracing::info!(
        broadcast = broadcast,
        learner = learner,
        week = week,
        day = day,
        outcome = outcome,
        "Broadcast step"
    );
}
