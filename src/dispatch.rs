use std::sync::Arc;
use chrono::{DateTime, Utc};
use crate::curriculum::plan::DailyPlan;
use crate::curriculum::FocusCategory;
use crate::error::GenerationError;
use crate::generation::content::{self, Languages, Story, WordEntry};
use crate::generation::{fallback, ContentGenerator, GenerationOptions};
use crate::logging::log_fallback;
use crate::metrics::Metrics;
use crate::review::quiz::{build_review_quiz, Quiz};
use crate::review::VocabularyItem;

/// Largest quiz generated for a mastery day.
const MAX_QUIZ_QUESTIONS: usize = 20;

/// A generation capability the dispatcher can invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Vocabulary,
    Story { recap: bool },
    PracticePrompt,
    Quiz,
}

impl Capability {
    pub fn label(self) -> &'static str {
        match self {
            Capability::Vocabulary => "vocabulary",
            Capability::Story { recap: false } => "story",
            Capability::Story { recap: true } => "recap_story",
            Capability::PracticePrompt => "practice_prompt",
            Capability::Quiz => "quiz",
        }
    }
}

/// Morning-lesson decision table: which capabilities a focus day needs, in order.
pub fn capabilities_for(focus: FocusCategory) -> &'static [Capability] {
    match focus {
        FocusCategory::Introduction => &[Capability::Vocabulary],
        FocusCategory::Integration => &[Capability::Vocabulary, Capability::Story { recap: false }],
        FocusCategory::Expansion => &[Capability::Vocabulary],
        FocusCategory::Practice => &[Capability::Vocabulary],
        FocusCategory::Application => &[Capability::Vocabulary, Capability::Story { recap: false }],
        FocusCategory::Mastery => &[Capability::Quiz],
        FocusCategory::Consolidation => &[Capability::Story { recap: true }],
    }
}

/// The 21:00 job only goes to writing/practice days.
pub fn should_send_practice(focus: FocusCategory) -> bool {
    focus.is_writing_focus()
}

/// Everything generated (or substituted) for one morning lesson.
#[derive(Debug, Clone)]
pub struct LessonContent {
    pub plan: DailyPlan,
    pub new_words: Vec<VocabularyItem>,
    pub story: Option<Story>,
    pub quiz: Option<Quiz>,
    /// Capabilities that fell back to curated content.
    pub fallbacks: Vec<Capability>,
}

impl LessonContent {
    pub fn used_fallback(&self) -> bool {
        !self.fallbacks.is_empty()
    }
}

/// Routes a day's plan to generation calls and validates what comes back.
/// Never fails: every generation error is replaced by curated content.
pub struct ContentDispatcher {
    generator: Arc<dyn ContentGenerator>,
    languages: Languages,
    options: GenerationOptions,
    metrics: Metrics,
}

impl ContentDispatcher {
    pub fn new(
        generator: Arc<dyn ContentGenerator>,
        languages: Languages,
        options: GenerationOptions,
        metrics: Metrics,
    ) -> Self {
        ContentDispatcher { generator, languages, options, metrics }
    }

    async fn call(&self, prompt: &str) -> Result<String, GenerationError> {
        let started = std::time::Instant::now();
        let system = content::system_instructions(&self.languages);
        let result = self.generator.generate(&system, prompt, &self.options).await;
        self.metrics.record_generation(started.elapsed().as_millis() as u64);
        result
    }

    fn note_fallback(&self, learner_id: &str, capability: Capability, err: &GenerationError) {
        self.metrics.record_fallback();
        log_fallback(learner_id, capability.label(), err.kind());
        tracing::debug!(learner = learner_id, error = %err, "Fallback detail");
    }

    /// Build the morning lesson for `plan`.
    /// `known` is everything the learner already has; `week_words` the current week's part of it.
    pub async fn prepare_lesson(
        &self,
        learner_id: &str,
        plan: &DailyPlan,
        known: &[VocabularyItem],
        week_words: &[VocabularyItem],
        now: DateTime<Utc>,
    ) -> LessonContent {
        let mut lesson = LessonContent {
            plan: plan.clone(),
            new_words: Vec::new(),
            story: None,
            quiz: None,
            fallbacks: Vec::new(),
        };

        for &capability in capabilities_for(plan.focus) {
            match capability {
                Capability::Vocabulary => {
                    let (words, fell_back) = self.new_words(learner_id, plan, known, now).await;
                    lesson.new_words = words;
                    if fell_back {
                        lesson.fallbacks.push(capability);
                    }
                }
                Capability::Story { recap } => {
                    let mut words: Vec<String> = lesson
                        .new_words
                        .iter()
                        .chain(week_words.iter())
                        .map(|w| w.target_term.clone())
                        .collect();
                    let mut seen = std::collections::HashSet::new();
                    words.retain(|w| seen.insert(w.to_lowercase()));
                    let (story, fell_back) = self.story(learner_id, plan, &words, recap).await;
                    lesson.story = Some(story);
                    if fell_back {
                        lesson.fallbacks.push(capability);
                    }
                }
                Capability::Quiz => {
                    let items: Vec<VocabularyItem> =
                        week_words.iter().take(MAX_QUIZ_QUESTIONS).cloned().collect();
                    if items.is_empty() {
                        continue;
                    }
                    let (quiz, fell_back) = self.quiz(learner_id, &items).await;
                    lesson.quiz = Some(quiz);
                    if fell_back {
                        lesson.fallbacks.push(capability);
                    }
                }
                Capability::PracticePrompt => {
                    // Sent by the evening job, not part of the morning lesson.
                }
            }
        }

        lesson
    }

    /// New vocabulary for the day, `plan.new_words` long when generation succeeds.
    pub async fn new_words(
        &self,
        learner_id: &str,
        plan: &DailyPlan,
        known: &[VocabularyItem],
        now: DateTime<Utc>,
    ) -> (Vec<VocabularyItem>, bool) {
        if plan.new_words == 0 {
            return (Vec::new(), false);
        }
        let known_terms: Vec<String> = known.iter().map(|k| k.target_term.clone()).collect();
        let prompt = content::vocabulary_prompt(
            &self.languages,
            &plan.theme,
            plan.new_words,
            plan.week,
            &known_terms,
        );

        let quota = plan.new_words as usize;
        let parsed = match self.call(&prompt).await {
            Ok(raw) => content::parse_word_list(&raw, quota)
                .and_then(|entries| unseen_words(entries, plan.week, known, quota, now)),
            Err(e) => Err(e),
        };

        match parsed {
            Ok(words) => (words, false),
            Err(e) => {
                self.note_fallback(learner_id, Capability::Vocabulary, &e);
                (fallback::fallback_words(plan.week, plan.new_words, known, now), true)
            }
        }
    }

    pub async fn story(
        &self,
        learner_id: &str,
        plan: &DailyPlan,
        words: &[String],
        recap: bool,
    ) -> (Story, bool) {
        let prompt = content::story_prompt(&self.languages, &plan.theme, plan.week, words, recap);
        let parsed = match self.call(&prompt).await {
            Ok(raw) => content::parse_story(&raw),
            Err(e) => Err(e),
        };
        match parsed {
            Ok(story) => (story, false),
            Err(e) => {
                self.note_fallback(learner_id, Capability::Story { recap }, &e);
                (fallback::fallback_story(&plan.theme, words, recap), true)
            }
        }
    }

    pub async fn quiz(&self, learner_id: &str, items: &[VocabularyItem]) -> (Quiz, bool) {
        let prompt = content::quiz_prompt(&self.languages, items);
        let parsed = match self.call(&prompt).await {
            Ok(raw) => content::parse_quiz(&raw, items),
            Err(e) => Err(e),
        };
        match parsed {
            Ok(quiz) => (quiz, false),
            Err(e) => {
                self.note_fallback(learner_id, Capability::Quiz, &e);
                (build_review_quiz(items), true)
            }
        }
    }

    /// Evening writing prompt for a practice-type day.
    pub async fn practice_prompt(
        &self,
        learner_id: &str,
        plan: &DailyPlan,
        words: &[String],
    ) -> (String, bool) {
        let prompt = content::practice_prompt_request(&self.languages, &plan.theme, plan.week, words);
        let parsed = match self.call(&prompt).await {
            Ok(raw) => content::parse_practice_prompt(&raw),
            Err(e) => Err(e),
        };
        match parsed {
            Ok(text) => (text, false),
            Err(e) => {
                self.note_fallback(learner_id, Capability::PracticePrompt, &e);
                (fallback::fallback_practice_prompt(plan.focus, &plan.theme), true)
            }
        }
    }
}

/// Generated words minus the ones the learner already knows.
/// Repeats count against the quota, so a short list is a count mismatch.
fn unseen_words(
    entries: Vec<WordEntry>,
    week: u32,
    known: &[VocabularyItem],
    quota: usize,
    now: DateTime<Utc>,
) -> Result<Vec<VocabularyItem>, GenerationError> {
    let fresh: Vec<VocabularyItem> = entries
        .into_iter()
        .map(|e| e.into_item(week, now))
        .filter(|c| !known.iter().any(|k| k.same_word(c)))
        .collect();
    if fresh.len() != quota {
        return Err(GenerationError::CountMismatch { expected: quota, actual: fresh.len() });
    }
    Ok(fresh)
}
