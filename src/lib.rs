pub mod analytics;
pub mod bot;
pub mod broadcast;
pub mod cache;
pub mod circuit_breaker;
pub mod config;
pub mod curriculum;
pub mod dispatch;
pub mod error;
pub mod generation;
pub mod logging;
pub mod messaging;
pub mod metrics;
pub mod perf;
pub mod progress;
pub mod review;
pub mod scheduler;
pub mod state;
pub mod storage;

#[cfg(test)]
#[path = "../tests/unit/error_handling_test.rs"]
mod error_handling_test;
#[cfg(test)]
#[path = "../tests/unit/json_extraction_test.rs"]
mod json_extraction_test;
#[cfg(test)]
#[path = "../tests/unit/circuit_breaker_test.rs"]
mod circuit_breaker_test;
#[cfg(test)]
#[path = "../tests/unit/progress_test.rs"]
mod progress_test;
#[cfg(test)]
#[path = "../tests/unit/curriculum_test.rs"]
mod curriculum_test;
#[cfg(test)]
#[path = "../tests/unit/review_test.rs"]
mod review_test;
#[cfg(test)]
#[path = "../tests/unit/quiz_test.rs"]
mod quiz_test;
#[cfg(test)]
#[path = "../tests/unit/config_test.rs"]
mod config_test;
#[cfg(test)]
#[path = "../tests/unit/session_test.rs"]
mod session_test;
#[cfg(test)]
#[path = "../tests/unit/scheduler_test.rs"]
mod scheduler_test;
#[cfg(test)]
#[path = "../tests/unit/telegram_test.rs"]
mod telegram_test;
#[cfg(test)]
#[path = "../tests/unit/content_test.rs"]
mod content_test;

use std::sync::Arc;
use chrono::Utc;
use tokio::sync::watch;
use crate::config::{BotConfig, StorageBackend, StorageConfig};
use crate::curriculum::CurriculumStore;
use crate::error::BotError;
use crate::generation::{ContentGenerator, OllamaGenerator};
use crate::messaging::{Messenger, TelegramClient};
use crate::state::app::AppState;
use crate::storage::{InMemoryStorage, JsonFileStorage, Storage};

/// Open the configured storage backend.
pub fn open_storage(config: &StorageConfig) -> Arc<dyn Storage> {
    match config.backend {
        StorageBackend::Json => {
            tracing::info!(dir = ?config.data_dir, "Using JSON file storage");
            Arc::new(JsonFileStorage::new(&config.data_dir))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; nothing survives a restart");
            Arc::new(InMemoryStorage::new())
        }
    }
}

/// The configured curriculum file, or the built-in one.
pub async fn load_curriculum(config: &BotConfig) -> Result<CurriculumStore, BotError> {
    match &config.course.curriculum_path {
        Some(path) => CurriculumStore::load(path).await,
        None => Ok(CurriculumStore::builtin().clone()),
    }
}

/// Wire up every collaborator from config.
/// Returns the shared state plus the Telegram client for inbound polling.
pub async fn build_state(config: BotConfig) -> Result<(AppState, Arc<TelegramClient>), BotError> {
    let curriculum = load_curriculum(&config).await?;
    let storage = open_storage(&config.storage);
    let generator: Arc<dyn ContentGenerator> = Arc::new(OllamaGenerator::from_config(&config.generator)?);
    let telegram = Arc::new(TelegramClient::from_config(&config.telegram)?);
    let messenger: Arc<dyn Messenger> = telegram.clone();

    tracing::info!(
        model = %config.generator.model,
        target_language = %config.course.target_language,
        boundary = ?config.course.day_boundary,
        "Bot configured"
    );

    let state = AppState::new(config, curriculum, storage, generator, messenger);
    Ok((state, telegram))
}

/// Long-poll Telegram and answer each message in arrival order.
pub async fn run_inbound(
    state: AppState,
    telegram: Arc<TelegramClient>,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut offset = 0i64;
    loop {
        let polled = tokio::select! {
            result = telegram.poll(offset) => result,
            _ = shutdown.changed() => break,
        };

        let messages = match polled {
            Ok((next, messages)) => {
                offset = next;
                messages
            }
            Err(e) => {
                tracing::warn!(error = %e, "Polling failed, retrying shortly");
                tokio::select! {
                    _ = tokio::time::sleep(std::time::Duration::from_secs(5)) => continue,
                    _ = shutdown.changed() => break,
                }
            }
        };

        for message in messages {
            let replies = match bot::handle_message(&state, &message, Utc::now()).await {
                Ok(replies) => replies,
                Err(e) => {
                    tracing::error!(learner = %message.chat, error = %e, "Failed to handle message");
                    vec!["Something went wrong, please try again in a moment.".to_string()]
                }
            };
            for reply in replies {
                if let Err(e) = state.messenger.send_text(&message.chat, &reply).await {
                    tracing::warn!(learner = %message.chat, error = %e, "Reply failed");
                    break;
                }
                state.metrics.record_message();
            }
        }
    }
    tracing::info!("Inbound polling stopped");
}

/// Run the bot until Ctrl-C: scheduled broadcasts plus inbound commands.
pub async fn run(config: BotConfig) -> Result<(), BotError> {
    let (state, telegram) = build_state(config).await?;
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let scheduler = tokio::spawn(scheduler::run_scheduler(state.clone(), shutdown_rx.clone()));
    let inbound = tokio::spawn(run_inbound(state.clone(), telegram, shutdown_rx));
    tracing::info!("vocabot running");

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutdown requested");
    let _ = shutdown_tx.send(true);

    match scheduler.await {
        Ok(Err(e)) => tracing::error!(error = %e, "Scheduler exited with error"),
        Err(e) => tracing::error!(error = %e, "Scheduler task panicked"),
        Ok(Ok(())) => {}
    }
    if let Err(e) = inbound.await {
        tracing::error!(error = %e, "Inbound task panicked");
    }

    tracing::info!(metrics = ?state.metrics.snapshot(), "Stopped");
    Ok(())
}
