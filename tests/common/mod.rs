#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use parking_lot::Mutex;
use tokio::sync::watch;
use vocabot_lib::config::BotConfig;
use vocabot_lib::curriculum::CurriculumStore;
use vocabot_lib::error::{BotError, GenerationError};
use vocabot_lib::generation::{ContentGenerator, GenerationOptions};
use vocabot_lib::messaging::Messenger;
use vocabot_lib::state::app::AppState;
use vocabot_lib::storage::{InMemoryStorage, Storage};

/// Monday 2026-03-02 08:00 UTC.
pub fn day_zero() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap()
}

/// Answers each prompt kind with well-formed content; every word is new.
#[derive(Default)]
pub struct ScriptedGenerator {
    next_word: AtomicUsize,
    pub calls: AtomicUsize,
}

#[async_trait]
impl ContentGenerator for ScriptedGenerator {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn generate(
        &self,
        _system: &str,
        prompt: &str,
        _options: &GenerationOptions,
    ) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(rest) = prompt.strip_prefix("Teach exactly ") {
            let count: usize = rest
                .split_whitespace()
                .next()
                .and_then(|n| n.parse().ok())
                .unwrap_or(0);
            let base = self.next_word.fetch_add(count, Ordering::SeqCst);
            let words: Vec<String> = (base..base + count)
                .map(|i| {
                    format!(
                        r#"{{"word": "palabra{i}", "translation": "word {i}", "pronunciation": "pa-LA-bra", "example": "Esta es la palabra{i}."}}"#
                    )
                })
                .collect();
            return Ok(format!(r#"{{"words": [{}]}}"#, words.join(",")));
        }
        if prompt.starts_with("Write a short story") || prompt.starts_with("Write a recap story") {
            let text = "Había una vez una persona que aprendía palabras nuevas cada día. \
                        Por la mañana leía, por la tarde practicaba y por la noche escribía \
                        frases cortas sobre su vida.";
            return Ok(format!(r#"{{"title": "Un día normal", "text": "{}"}}"#, text));
        }
        if prompt.contains("writing exercise") {
            return Ok("Write five sentences about your week using the new words.".to_string());
        }
        Err(GenerationError::Malformed("unscripted prompt".to_string()))
    }
}

/// Provider that is always down.
pub struct FailingGenerator;

#[async_trait]
impl ContentGenerator for FailingGenerator {
    fn name(&self) -> &str {
        "failing"
    }

    async fn generate(
        &self,
        _system: &str,
        _prompt: &str,
        _options: &GenerationOptions,
    ) -> Result<String, GenerationError> {
        Err(GenerationError::Unavailable("connection refused".to_string()))
    }
}

/// Returns the same raw text for every prompt.
pub struct FixedGenerator(pub String);

#[async_trait]
impl ContentGenerator for FixedGenerator {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn generate(
        &self,
        _system: &str,
        _prompt: &str,
        _options: &GenerationOptions,
    ) -> Result<String, GenerationError> {
        Ok(self.0.clone())
    }
}

/// Records sends; sends to `fail_for` fail.
/// With `stop_after_send`, the first successful send flips the shutdown signal.
#[derive(Default)]
pub struct RecordingMessenger {
    pub sent: Mutex<Vec<(String, String)>>,
    pub fail_for: Option<String>,
    pub stop_after_send: Option<watch::Sender<bool>>,
}

impl RecordingMessenger {
    pub fn failing_for(chat: &str) -> Self {
        RecordingMessenger {
            fail_for: Some(chat.to_string()),
            ..Default::default()
        }
    }

    pub fn stopping_after_send(shutdown: watch::Sender<bool>) -> Self {
        RecordingMessenger {
            stop_after_send: Some(shutdown),
            ..Default::default()
        }
    }

    pub fn texts_for(&self, chat: &str) -> Vec<String> {
        self.sent
            .lock()
            .iter()
            .filter(|(c, _)| c == chat)
            .map(|(_, t)| t.clone())
            .collect()
    }

    pub fn clear(&self) {
        self.sent.lock().clear();
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send_text(&self, chat: &str, text: &str) -> Result<(), BotError> {
        if self.fail_for.as_deref() == Some(chat) {
            return Err(BotError::new("chat not found", "messaging").with_learner(chat));
        }
        self.sent.lock().push((chat.to_string(), text.to_string()));
        if let Some(shutdown) = &self.stop_after_send {
            let _ = shutdown.send(true);
        }
        Ok(())
    }

    async fn send_typing(&self, _chat: &str) -> Result<(), BotError> {
        Ok(())
    }
}

pub fn test_config() -> BotConfig {
    let mut config = BotConfig::default();
    config.schedule.inter_learner_delay_ms = 0;
    config.telegram.admin_ids = vec!["admin".to_string()];
    config
}

pub struct Harness {
    pub state: AppState,
    pub storage: Arc<InMemoryStorage>,
    pub messenger: Arc<RecordingMessenger>,
}

pub fn harness_with(generator: Arc<dyn ContentGenerator>, messenger: RecordingMessenger) -> Harness {
    let storage = Arc::new(InMemoryStorage::new());
    let messenger = Arc::new(messenger);
    let state = AppState::new(
        test_config(),
        CurriculumStore::builtin().clone(),
        storage.clone() as Arc<dyn Storage>,
        generator,
        messenger.clone() as Arc<dyn Messenger>,
    );
    Harness { state, storage, messenger }
}

pub fn harness() -> Harness {
    harness_with(Arc::new(ScriptedGenerator::default()), RecordingMessenger::default())
}
