use std::collections::HashMap;
use std::sync::Arc;
use parking_lot::RwLock;
use crate::config::BotConfig;
use crate::curriculum::CurriculumStore;
use crate::dispatch::ContentDispatcher;
use crate::generation::content::Languages;
use crate::generation::{ContentGenerator, GenerationOptions};
use crate::messaging::Messenger;
use crate::metrics::Metrics;
use crate::review::ReviewScheduler;
use crate::state::session::QuizSession;
use crate::storage::Storage;

/// Application-wide state container.
/// Collaborators are injected here and passed explicitly to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<BotConfig>,
    /// Read-only after startup.
    pub curriculum: Arc<CurriculumStore>,
    pub storage: Arc<dyn Storage>,
    pub messenger: Arc<dyn Messenger>,
    pub dispatcher: Arc<ContentDispatcher>,
    pub reviews: ReviewScheduler,
    pub metrics: Metrics,
    /// Open review quizzes by learner id
    quiz_sessions: Arc<RwLock<HashMap<String, QuizSession>>>,
}

impl AppState {
    pub fn new(
        config: BotConfig,
        curriculum: CurriculumStore,
        storage: Arc<dyn Storage>,
        generator: Arc<dyn ContentGenerator>,
        messenger: Arc<dyn Messenger>,
    ) -> Self {
        let metrics = Metrics::new();
        let languages = Languages {
            source: config.course.source_language.clone(),
            target: config.course.target_language.clone(),
        };
        let options = GenerationOptions {
            temperature: config.generator.temperature,
            max_output_tokens: config.generator.max_output_tokens,
        };
        let dispatcher = ContentDispatcher::new(generator, languages, options, metrics.clone());
        let reviews = ReviewScheduler::new(storage.clone(), config.course.day_boundary, config.review);

        AppState {
            config: Arc::new(config),
            curriculum: Arc::new(curriculum),
            storage,
            messenger,
            dispatcher: Arc::new(dispatcher),
            reviews,
            metrics,
            quiz_sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn get_session(&self, learner_id: &str) -> QuizSession {
        self.quiz_sessions
            .read()
            .get(learner_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn set_session(&self, learner_id: &str, session: QuizSession) {
        let mut sessions = self.quiz_sessions.write();
        if session.is_active() {
            sessions.insert(learner_id.to_string(), session);
        } else {
            sessions.remove(learner_id);
        }
    }

    pub fn reset_session(&self, learner_id: &str) {
        self.quiz_sessions.write().remove(learner_id);
    }
}
